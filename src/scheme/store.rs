//! Cursor file storage
//!
//! Records live in a flat key-value store:
//! - `cursor-file-<slot>` holds a JSON [`CursorFile`]
//! - `enabled-cursor-slots` holds a JSON object of slot -> bool
//!
//! The on-disk store is a SQLite database with a single `ItemTable`, the same
//! shape VS Code-style editors use for `state.vscdb`.

use anyhow::{Context, Result};
use log::debug;
use rusqlite::{Connection, OptionalExtension};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use super::file::CursorFile;
use super::slots::CursorSlot;

/// Key holding the enabled-slots map
pub const ENABLED_SLOTS_KEY: &str = "enabled-cursor-slots";

/// Storage key for a slot's cursor file record
pub fn cursor_file_key(slot: CursorSlot) -> String {
    format!("cursor-file-{}", slot.id())
}

/// Minimal string key-value storage
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
    fn keys(&self) -> Result<Vec<String>>;
}

/// In-memory store, used for tests and throwaway sessions
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    items: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.items.remove(key);
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>> {
        Ok(self.items.keys().cloned().collect())
    }
}

/// SQLite-backed store (`ItemTable(key, value)`)
pub struct SqliteStore {
    conn: Connection,
    path: PathBuf,
}

impl SqliteStore {
    /// Open (and create if needed) the store at `path`
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create: {}", parent.display()))?;
            }
        }

        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open: {}", path.display()))?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS ItemTable (key TEXT UNIQUE ON CONFLICT REPLACE, value TEXT)",
            [],
        )
        .context("Failed to create ItemTable")?;

        debug!("opened store {}", path.display());

        Ok(Self {
            conn,
            path: path.to_path_buf(),
        })
    }

    /// Path of the underlying database file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.conn
            .query_row(
                "SELECT value FROM ItemTable WHERE key = ?1",
                rusqlite::params![key],
                |row| row.get(0),
            )
            .optional()
            .with_context(|| format!("Failed to read key: {}", key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.conn
            .execute(
                "INSERT INTO ItemTable (key, value) VALUES (?1, ?2)",
                rusqlite::params![key, value],
            )
            .with_context(|| format!("Failed to write key: {}", key))?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.conn
            .execute(
                "DELETE FROM ItemTable WHERE key = ?1",
                rusqlite::params![key],
            )
            .with_context(|| format!("Failed to delete key: {}", key))?;
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT key FROM ItemTable ORDER BY key")
            .context("Failed to prepare query")?;

        let keys = stmt
            .query_map([], |row| row.get(0))
            .context("Failed to query")?
            .collect::<rusqlite::Result<Vec<String>>>()?;

        Ok(keys)
    }
}

/// Per-slot enabled flags. Slots missing from the map count as enabled.
pub type EnabledSlots = HashMap<CursorSlot, bool>;

/// Typed access to cursor records on top of a [`KeyValueStore`]
pub struct CursorStore<S> {
    store: S,
}

impl<S: KeyValueStore> CursorStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Access the underlying store
    pub fn inner(&self) -> &S {
        &self.store
    }

    /// Read the record stored for `slot`, if any
    pub fn get(&self, slot: CursorSlot) -> Result<Option<CursorFile>> {
        let key = cursor_file_key(slot);
        let Some(value) = self.store.get(&key)? else {
            return Ok(None);
        };
        let file = serde_json::from_str(&value)
            .with_context(|| format!("Failed to parse stored record: {}", key))?;
        Ok(Some(file))
    }

    /// Store a record under its own slot, replacing any previous one
    pub fn put(&mut self, file: &CursorFile) -> Result<()> {
        let value = serde_json::to_string(file)?;
        self.store.set(&cursor_file_key(file.slot), &value)
    }

    /// Forget the record for `slot`
    pub fn remove(&mut self, slot: CursorSlot) -> Result<()> {
        self.store.remove(&cursor_file_key(slot))
    }

    /// Read the enabled-slots map, if one was ever written
    pub fn enabled_slots(&self) -> Result<Option<EnabledSlots>> {
        let Some(value) = self.store.get(ENABLED_SLOTS_KEY)? else {
            return Ok(None);
        };
        let map = serde_json::from_str(&value)
            .with_context(|| format!("Failed to parse stored record: {}", ENABLED_SLOTS_KEY))?;
        Ok(Some(map))
    }

    /// Whether `slot` is enabled (true when no map exists or the slot is absent)
    pub fn is_enabled(&self, slot: CursorSlot) -> Result<bool> {
        Ok(enabled_in(self.enabled_slots()?.as_ref(), slot))
    }

    /// Set the enabled flag for `slot`, creating the all-enabled map first if needed
    pub fn set_enabled(&mut self, slot: CursorSlot, enabled: bool) -> Result<()> {
        let mut map = self
            .enabled_slots()?
            .unwrap_or_else(|| CursorSlot::ALL.into_iter().map(|s| (s, true)).collect());
        map.insert(slot, enabled);

        // Serialize in slot order so the stored JSON is stable
        let ordered: BTreeMap<CursorSlot, bool> = map.into_iter().collect();
        let value = serde_json::to_string(&ordered)?;
        self.store.set(ENABLED_SLOTS_KEY, &value)
    }

    /// Populated records in slot order, optionally dropping disabled slots
    ///
    /// This is the only place that decides which files take part in an export;
    /// the descriptor and the package both read from here.
    pub fn list_populated(&self, apply_enabled_filter: bool) -> Result<Vec<CursorFile>> {
        let enabled = if apply_enabled_filter {
            self.enabled_slots()?
        } else {
            None
        };

        let mut files = Vec::new();
        for slot in CursorSlot::ALL {
            let Some(file) = self.get(slot)? else {
                continue;
            };
            if !file.is_populated() {
                continue;
            }
            if apply_enabled_filter && !enabled_in(enabled.as_ref(), slot) {
                debug!("skipping disabled slot {}", slot);
                continue;
            }
            files.push(file);
        }

        Ok(files)
    }
}

fn enabled_in(map: Option<&EnabledSlots>, slot: CursorSlot) -> bool {
    map.and_then(|m| m.get(&slot).copied()).unwrap_or(true)
}
