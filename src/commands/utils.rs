//! Shared utilities for commands

use anyhow::Result;
use log::debug;
use std::path::Path;

use cursor_inf_util::config;
use cursor_inf_util::scheme::{CursorStore, SqliteStore};

/// Format bytes as human-readable size
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

/// Open the cursor store at an explicit path or the platform default
pub fn open_store(explicit: Option<&Path>) -> Result<CursorStore<SqliteStore>> {
    let path = config::store_path(explicit)?;
    debug!("using store {}", path.display());
    Ok(CursorStore::new(SqliteStore::open(&path)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cursor_inf_util::scheme::CursorSlot;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(1024), "1.0 KB");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(1024 * 1024), "1.0 MB");
        assert_eq!(format_size(1024 * 1024 * 1024), "1.0 GB");
    }

    #[test]
    fn test_open_store_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.db");

        let store = open_store(Some(&path)).unwrap();
        assert!(path.exists());
        assert!(store.get(CursorSlot::Pointer).unwrap().is_none());
    }
}
