//! Inf command - Print or write the generated install.inf

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use std::fs;
use std::path::Path;

use cursor_inf_util::scheme::{inf, CursorStore, KeyValueStore};

/// Execute the inf command
///
/// Prints the descriptor to stdout unless `output` is given.
pub fn execute<S: KeyValueStore>(
    store: &CursorStore<S>,
    pack_name: &str,
    dir_name: &str,
    apply_enabled_filter: bool,
    output: Option<&Path>,
) -> Result<()> {
    let text = inf::render(store, pack_name, dir_name, apply_enabled_filter)?;

    match output {
        Some(path) => {
            fs::write(path, &text)
                .with_context(|| format!("Failed to write: {}", path.display()))?;
            println!("{} {}", "Wrote:".green(), path.display());
        }
        None => println!("{}", text),
    }

    Ok(())
}
