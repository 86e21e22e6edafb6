//! Platform-specific configuration and paths

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Environment variable overriding the store location
pub const STORE_ENV: &str = "CURSOR_INF_STORE";

/// File name of the SQLite store inside the data directory
const STORE_FILE: &str = "store.db";

/// Get the application data directory
/// - macOS: ~/Library/Application Support/cursor-inf-util/
/// - Linux: ~/.local/share/cursor-inf-util/
/// - Windows: %APPDATA%/cursor-inf-util/
pub fn data_dir() -> Result<PathBuf> {
    let base = dirs::data_dir().context("Could not determine data directory")?;
    Ok(base.join("cursor-inf-util"))
}

/// Get the default store path (<data_dir>/store.db)
pub fn default_store_path() -> Result<PathBuf> {
    Ok(data_dir()?.join(STORE_FILE))
}

/// Resolve the store path, preferring an explicit override
pub fn store_path(explicit: Option<&Path>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => default_store_path(),
    }
}
