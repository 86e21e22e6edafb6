//! cursor-inf-util: build Windows cursor scheme packages
//!
//! Assign a cursor file to each slot, then generate an `install.inf` or a zip
//! bundling the files together with it.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use cursor_inf_util::config;
use cursor_inf_util::scheme::CursorSlot;

mod commands;

#[derive(Parser)]
#[command(name = "cursor-inf-util")]
#[command(about = "Build install.inf files and zip packs for Windows cursor schemes", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the cursor store database
    #[arg(long, global = true, env = config::STORE_ENV)]
    store: Option<PathBuf>,

    /// Show debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all cursor slots and their assigned files
    Slots,

    /// Assign a cursor file to a slot
    Set {
        /// Slot name (e.g. pointer, busy, text)
        slot: CursorSlot,

        /// Cursor file (.cur or .ani)
        file: PathBuf,

        /// File name to use inside the pack (defaults to the file's own name)
        #[arg(long)]
        name: Option<String>,
    },

    /// Remove the file assigned to a slot
    Clear {
        /// Slot name
        slot: CursorSlot,
    },

    /// Include a slot in exports
    Enable {
        /// Slot name
        slot: CursorSlot,
    },

    /// Leave a slot out of exports without removing its file
    Disable {
        /// Slot name
        slot: CursorSlot,
    },

    /// Generate install.inf for the current slots
    Inf {
        /// Scheme name shown in the Mouse control panel
        pack_name: String,

        /// Directory under %WINDIR%\Cursors (defaults to the pack name)
        #[arg(long, short, default_value = "")]
        dir: String,

        /// Include disabled slots
        #[arg(long)]
        all: bool,

        /// Output file (prints to stdout if omitted)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Build a zip with the cursor files and install.inf
    Export {
        /// Scheme name shown in the Mouse control panel
        pack_name: String,

        /// Directory inside the zip and under %WINDIR%\Cursors (defaults to the pack name)
        #[arg(long, short, default_value = "")]
        dir: String,

        /// Include disabled slots
        #[arg(long)]
        all: bool,

        /// Output zip (defaults to <dir>.zip)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let store_path = cli.store.as_deref();

    match cli.command {
        Commands::Slots => {
            let store = commands::utils::open_store(store_path)?;
            println!("{}", commands::slots::execute(&store)?);
        }

        Commands::Set { slot, file, name } => {
            let mut store = commands::utils::open_store(store_path)?;
            commands::edit::execute_set(&mut store, slot, &file, name.as_deref())?;
        }

        Commands::Clear { slot } => {
            let mut store = commands::utils::open_store(store_path)?;
            commands::edit::execute_clear(&mut store, slot)?;
        }

        Commands::Enable { slot } => {
            let mut store = commands::utils::open_store(store_path)?;
            commands::edit::execute_toggle(&mut store, slot, true)?;
        }

        Commands::Disable { slot } => {
            let mut store = commands::utils::open_store(store_path)?;
            commands::edit::execute_toggle(&mut store, slot, false)?;
        }

        Commands::Inf {
            pack_name,
            dir,
            all,
            output,
        } => {
            let store = commands::utils::open_store(store_path)?;
            commands::inf::execute(&store, &pack_name, &dir, !all, output.as_deref())?;
        }

        Commands::Export {
            pack_name,
            dir,
            all,
            output,
        } => {
            let store = commands::utils::open_store(store_path)?;
            commands::export::execute(&store, &pack_name, &dir, !all, output.as_deref())?;
        }
    }

    Ok(())
}
