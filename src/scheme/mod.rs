//! Cursor scheme model, storage and output generation

pub mod file;
pub mod inf;
pub mod package;
pub mod slots;
pub mod store;

// Re-exports for library consumers
pub use file::{CursorFile, CursorFileType};
pub use package::PackageError;
pub use slots::CursorSlot;
pub use store::{CursorStore, KeyValueStore, MemoryStore, SqliteStore};
