//! Slots command - Show every cursor slot and its assigned file

use anyhow::Result;
use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, ContentArrangement, Table};

use super::utils;
use cursor_inf_util::scheme::{CursorFile, CursorSlot, CursorStore, KeyValueStore};

/// One row of the slot overview
#[derive(Debug)]
pub struct SlotStatus {
    pub slot: CursorSlot,
    /// Populated record, if any
    pub file: Option<CursorFile>,
    /// Decoded payload size in bytes (None when it cannot be decoded)
    pub size: Option<u64>,
    pub enabled: bool,
}

/// Collect the status of every slot, in slot order
pub fn collect<S: KeyValueStore>(store: &CursorStore<S>) -> Result<Vec<SlotStatus>> {
    let enabled = store.enabled_slots()?;

    CursorSlot::ALL
        .into_iter()
        .map(|slot| -> Result<SlotStatus> {
            let file = store.get(slot)?.filter(CursorFile::is_populated);
            let size = file
                .as_ref()
                .and_then(|f| f.decode_payload().ok())
                .map(|bytes| bytes.len() as u64);
            let enabled = enabled
                .as_ref()
                .and_then(|m| m.get(&slot).copied())
                .unwrap_or(true);
            Ok(SlotStatus {
                slot,
                file,
                size,
                enabled,
            })
        })
        .collect()
}

/// Render the slot overview as a table
pub fn execute<S: KeyValueStore>(store: &CursorStore<S>) -> Result<String> {
    let statuses = collect(store)?;

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Slot"),
        Cell::new("Scheme label"),
        Cell::new("Registry"),
        Cell::new("File"),
        Cell::new("Size"),
        Cell::new("Enabled"),
    ]);

    for status in &statuses {
        let (file_str, size_str) = match &status.file {
            Some(f) => (
                f.filename.clone(),
                status
                    .size
                    .map(utils::format_size)
                    .unwrap_or_else(|| "invalid".to_string()),
            ),
            None => ("-".to_string(), "-".to_string()),
        };

        table.add_row(vec![
            Cell::new(status.slot.id()),
            Cell::new(status.slot.label()),
            Cell::new(status.slot.registry_value()),
            Cell::new(file_str),
            Cell::new(size_str),
            Cell::new(if status.enabled { "yes" } else { "no" }),
        ]);
    }

    let assigned = statuses.iter().filter(|s| s.file.is_some()).count();
    let included = statuses
        .iter()
        .filter(|s| s.file.is_some() && s.enabled)
        .count();

    let mut output = table.to_string();
    output.push_str(&format!(
        "\n\n{} of {} slots assigned, {} included in export",
        assigned,
        statuses.len(),
        included
    ));

    Ok(output)
}
