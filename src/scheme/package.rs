//! Cursor pack archive
//!
//! Layout of the generated zip:
//!
//! ```text
//! <dir>/
//! <dir>/<cursor files, each distinct filename once>
//! <dir>/install.inf
//! ```

use anyhow::Context;
use log::{debug, info};
use std::collections::HashSet;
use std::fs;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

use super::file::{CursorFile, DecodeError};
use super::inf;
use super::slots::CursorSlot;
use super::store::{CursorStore, KeyValueStore};

/// Name of the descriptor inside the package directory
pub const INSTALL_INF: &str = "install.inf";

/// Errors raised while building a cursor pack
#[derive(Debug, Error)]
pub enum PackageError {
    #[error("cannot decode {filename} (slot {slot})")]
    Decode {
        slot: CursorSlot,
        filename: String,
        #[source]
        source: DecodeError,
    },

    #[error("zip error: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("I/O error while writing archive: {0}")]
    Io(#[from] std::io::Error),
}

fn entry_options() -> SimpleFileOptions {
    SimpleFileOptions::default()
        .compression_method(zip::CompressionMethod::Deflated)
        .last_modified_time(zip::DateTime::default())
        .unix_permissions(0o644)
}

/// Build the zip for an already-selected set of files
pub fn build(
    files: &[CursorFile],
    pack_name: &str,
    dir_name: &str,
) -> Result<Vec<u8>, PackageError> {
    let dir = inf::effective_dir_name(pack_name, dir_name);
    let options = entry_options();

    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    zip.add_directory(format!("{}/", dir), options.unix_permissions(0o755))?;

    let mut added: HashSet<&str> = HashSet::new();
    for file in files {
        if added.contains(file.filename.as_str()) {
            debug!(
                "{} already packed, skipping duplicate from slot {}",
                file.filename, file.slot
            );
            continue;
        }

        let bytes = file.decode_payload().map_err(|source| PackageError::Decode {
            slot: file.slot,
            filename: file.filename.clone(),
            source,
        })?;

        zip.start_file(format!("{}/{}", dir, file.filename), options)?;
        zip.write_all(&bytes)?;
        added.insert(file.filename.as_str());
    }

    let descriptor = inf::generate(files, pack_name, dir_name);
    zip.start_file(format!("{}/{}", dir, INSTALL_INF), options)?;
    zip.write_all(descriptor.as_bytes())?;

    let cursor = zip.finish()?;
    Ok(cursor.into_inner())
}

/// Default archive path: `<dir>.zip` in the current directory
pub fn default_output(pack_name: &str, dir_name: &str) -> PathBuf {
    PathBuf::from(format!("{}.zip", inf::effective_dir_name(pack_name, dir_name)))
}

/// Build the pack from the store's current cursor set and write it to `dest`
///
/// Returns the path of the written archive. Nothing is written when the
/// build fails.
pub fn export<S: KeyValueStore>(
    store: &CursorStore<S>,
    pack_name: &str,
    dir_name: &str,
    apply_enabled_filter: bool,
    dest: &Path,
) -> anyhow::Result<PathBuf> {
    let files = store.list_populated(apply_enabled_filter)?;
    let bytes = build(&files, pack_name, dir_name)
        .with_context(|| format!("Failed to build cursor pack: {}", pack_name))?;

    fs::write(dest, &bytes).with_context(|| format!("Failed to write: {}", dest.display()))?;
    info!("wrote {} ({} bytes)", dest.display(), bytes.len());

    Ok(dest.to_path_buf())
}
