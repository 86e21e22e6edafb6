//! Slot editing commands - assign, clear and toggle cursor files

use anyhow::{bail, Context, Result};
use owo_colors::OwoColorize;
use std::fs;
use std::path::Path;

use super::utils;
use cursor_inf_util::scheme::{package, CursorFile, CursorSlot, CursorStore, KeyValueStore};

/// Read a cursor file from disk and assign it to `slot`
///
/// The stored filename is `name` when given, otherwise the file's own name.
pub fn set<S: KeyValueStore>(
    store: &mut CursorStore<S>,
    slot: CursorSlot,
    file_path: &Path,
    name: Option<&str>,
) -> Result<CursorFile> {
    if !file_path.is_file() {
        bail!("Cursor file does not exist: {}", file_path.display());
    }

    let filename = match name {
        Some(n) => n.to_string(),
        None => file_path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default(),
    };

    if filename.is_empty() {
        bail!("Cannot determine a file name for: {}", file_path.display());
    }
    if filename.contains(['/', '\\', '"']) {
        bail!("File name must not contain '/', '\\' or '\"': {}", filename);
    }
    if filename == "." || filename == ".." {
        bail!("Invalid file name: {}", filename);
    }
    // Windows file names are case-insensitive
    if filename.eq_ignore_ascii_case(package::INSTALL_INF) {
        bail!("File name is reserved for the generated descriptor: {}", filename);
    }

    let bytes =
        fs::read(file_path).with_context(|| format!("Failed to read: {}", file_path.display()))?;

    let file = CursorFile::from_bytes(slot, filename, &bytes);
    store.put(&file)?;

    Ok(file)
}

/// Execute the set command
pub fn execute_set<S: KeyValueStore>(
    store: &mut CursorStore<S>,
    slot: CursorSlot,
    file_path: &Path,
    name: Option<&str>,
) -> Result<()> {
    let size = fs::metadata(file_path).map(|m| m.len()).unwrap_or(0);
    let file = set(store, slot, file_path, name)?;

    println!(
        "{} {} -> {} ({})",
        "Stored:".green(),
        slot,
        file.filename,
        utils::format_size(size)
    );

    if !store.is_enabled(slot)? {
        println!(
            "{} slot {} is disabled and will be left out of exports",
            "Warning:".yellow(),
            slot
        );
    }

    Ok(())
}

/// Execute the clear command
pub fn execute_clear<S: KeyValueStore>(store: &mut CursorStore<S>, slot: CursorSlot) -> Result<()> {
    if store.get(slot)?.is_none() {
        println!("Slot {} has no file assigned.", slot);
        return Ok(());
    }

    store.remove(slot)?;
    println!("{} {}", "Cleared:".green(), slot);
    Ok(())
}

/// Execute the enable/disable commands
pub fn execute_toggle<S: KeyValueStore>(
    store: &mut CursorStore<S>,
    slot: CursorSlot,
    enabled: bool,
) -> Result<()> {
    store.set_enabled(slot, enabled)?;

    if enabled {
        println!("{} {}", "Enabled:".green(), slot);
    } else {
        println!("{} {}", "Disabled:".yellow(), slot);
    }

    Ok(())
}
