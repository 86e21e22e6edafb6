//! Stored cursor file records
//!
//! Each slot's file is kept as a JSON record whose payload is a data URL
//! (`data:<mime>;base64,<payload>`). An empty payload means the slot has no
//! file assigned.

use base64::{engine::general_purpose::STANDARD, Engine};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use super::slots::CursorSlot;

/// Classification of a cursor payload (informational only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CursorFileType {
    Cur,
    Ani,
    #[default]
    Unknown,
}

impl CursorFileType {
    /// Classify a file by its extension (case-insensitive)
    pub fn from_filename(filename: &str) -> Self {
        let ext = Path::new(filename)
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase());
        match ext.as_deref() {
            Some("cur") => Self::Cur,
            Some("ani") => Self::Ani,
            _ => Self::Unknown,
        }
    }

    /// MIME type used in the data URL metadata
    pub fn mime(self) -> &'static str {
        match self {
            Self::Cur => "image/x-win-bitmap",
            Self::Ani => "application/x-navi-animation",
            Self::Unknown => "application/octet-stream",
        }
    }
}

/// Failure to extract the binary payload from a stored data URL
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("payload is not a data URL (missing ',' separator)")]
    MissingSeparator,

    #[error("payload is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),
}

/// A cursor file assigned to a slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CursorFile {
    /// Name of the file inside the package
    pub filename: String,
    /// Payload classification
    #[serde(rename = "type")]
    pub file_type: CursorFileType,
    /// Slot this file is assigned to
    pub slot: CursorSlot,
    /// Data URL; empty when no file is assigned
    pub base64_data: String,
}

impl Default for CursorFile {
    fn default() -> Self {
        Self {
            filename: String::new(),
            file_type: CursorFileType::Unknown,
            slot: CursorSlot::Pointer,
            base64_data: String::new(),
        }
    }
}

impl CursorFile {
    /// Build a record from raw file bytes, encoding them as a data URL
    pub fn from_bytes(slot: CursorSlot, filename: impl Into<String>, bytes: &[u8]) -> Self {
        let filename = filename.into();
        let file_type = CursorFileType::from_filename(&filename);
        let base64_data = format!("data:{};base64,{}", file_type.mime(), STANDARD.encode(bytes));

        Self {
            filename,
            file_type,
            slot,
            base64_data,
        }
    }

    /// Whether a payload is assigned
    pub fn is_populated(&self) -> bool {
        !self.base64_data.is_empty()
    }

    /// Decode the payload portion (after the first comma) of the data URL
    pub fn decode_payload(&self) -> Result<Vec<u8>, DecodeError> {
        let (_, payload) = self
            .base64_data
            .split_once(',')
            .ok_or(DecodeError::MissingSeparator)?;
        Ok(STANDARD.decode(payload)?)
    }
}
