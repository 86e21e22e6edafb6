//! Export command - Build the cursor pack zip

use anyhow::Result;
use owo_colors::OwoColorize;
use std::fs;
use std::path::{Path, PathBuf};

use super::utils;
use cursor_inf_util::scheme::{inf, package, CursorStore, KeyValueStore};

/// Execute the export command, returning the path of the written archive
pub fn execute<S: KeyValueStore>(
    store: &CursorStore<S>,
    pack_name: &str,
    dir_name: &str,
    apply_enabled_filter: bool,
    output: Option<&Path>,
) -> Result<PathBuf> {
    let dest = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| package::default_output(pack_name, dir_name));

    let files = store.list_populated(apply_enabled_filter)?;
    let distinct = inf::unique_filenames(&files).len();

    println!(
        "Packing {} slot(s), {} file(s) into {}/",
        files.len(),
        distinct,
        inf::effective_dir_name(pack_name, dir_name)
    );

    if files.is_empty() {
        println!(
            "{} no cursor files assigned, the pack will only contain install.inf",
            "Warning:".yellow()
        );
    }

    let path = package::export(store, pack_name, dir_name, apply_enabled_filter, &dest)?;
    let size = fs::metadata(&path).map(|m| m.len()).unwrap_or(0);

    println!(
        "{} {} ({})",
        "Created:".green(),
        path.display(),
        utils::format_size(size)
    );

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cursor_inf_util::scheme::{CursorFile, CursorSlot, MemoryStore};

    #[test]
    fn test_export_to_explicit_path() {
        let mut store = CursorStore::new(MemoryStore::new());
        store
            .put(&CursorFile::from_bytes(CursorSlot::Pointer, "arrow.cur", b"x"))
            .unwrap();

        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("out.zip");

        let path = execute(&store, "MyPack", "", true, Some(&dest)).unwrap();
        assert_eq!(path, dest);
        assert!(dest.exists());
    }
}
