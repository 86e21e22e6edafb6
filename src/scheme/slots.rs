//! Cursor slot registry
//!
//! Windows cursor schemes bind a fixed set of cursor roles to files. The
//! order of [`CursorSlot::ALL`] is the order slots are rendered in
//! `install.inf`, and matches the value order Windows uses for the
//! comma-separated scheme string under `Control Panel\Cursors\Schemes`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A named cursor role in a Windows cursor scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CursorSlot {
    Pointer,
    Help,
    Work,
    Busy,
    Cross,
    Text,
    Hand,
    // Misspelled in the storage format; kept verbatim
    Unavailiable,
    Vert,
    Horz,
    Dgn1,
    Dgn2,
    Move,
    Alternate,
    Link,
    Location,
    Person,
}

impl CursorSlot {
    /// All slots in scheme order
    pub const ALL: [CursorSlot; 17] = [
        Self::Pointer,
        Self::Help,
        Self::Work,
        Self::Busy,
        Self::Cross,
        Self::Text,
        Self::Hand,
        Self::Unavailiable,
        Self::Vert,
        Self::Horz,
        Self::Dgn1,
        Self::Dgn2,
        Self::Move,
        Self::Alternate,
        Self::Link,
        Self::Location,
        Self::Person,
    ];

    /// Identifier used in storage keys and `[Strings]` entries
    pub fn id(self) -> &'static str {
        match self {
            Self::Pointer => "pointer",
            Self::Help => "help",
            Self::Work => "work",
            Self::Busy => "busy",
            Self::Cross => "cross",
            Self::Text => "text",
            Self::Hand => "hand",
            Self::Unavailiable => "unavailiable",
            Self::Vert => "vert",
            Self::Horz => "horz",
            Self::Dgn1 => "dgn1",
            Self::Dgn2 => "dgn2",
            Self::Move => "move",
            Self::Alternate => "alternate",
            Self::Link => "link",
            Self::Location => "location",
            Self::Person => "person",
        }
    }

    /// Human-readable scheme label, as shown in the Mouse control panel
    pub fn label(self) -> &'static str {
        match self {
            Self::Pointer => "normal select",
            Self::Help => "help select",
            Self::Work => "working in background",
            Self::Busy => "busy",
            Self::Cross => "precision select",
            Self::Text => "text select",
            Self::Hand => "handwriting",
            Self::Unavailiable => "unavailable",
            Self::Vert => "vertical resize",
            Self::Horz => "horizontal resize",
            Self::Dgn1 => "diagonal resize 1 \\",
            Self::Dgn2 => "diagonal resize 2 /",
            Self::Move => "move",
            Self::Alternate => "alternate select",
            Self::Link => "link select",
            Self::Location => "location select",
            Self::Person => "person select",
        }
    }

    /// Registry value name under `HKCU\Control Panel\Cursors`
    pub fn registry_value(self) -> &'static str {
        match self {
            Self::Pointer => "Arrow",
            Self::Help => "Help",
            Self::Work => "AppStarting",
            Self::Busy => "Wait",
            Self::Cross => "Crosshair",
            Self::Text => "IBeam",
            Self::Hand => "NWPen",
            Self::Unavailiable => "No",
            Self::Vert => "SizeNS",
            Self::Horz => "SizeWE",
            Self::Dgn1 => "SizeNWSE",
            Self::Dgn2 => "SizeNESW",
            Self::Move => "SizeAll",
            Self::Alternate => "UpArrow",
            Self::Link => "Hand",
            Self::Location => "Pin",
            Self::Person => "Person",
        }
    }
}

impl fmt::Display for CursorSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Error returned when a string does not name a cursor slot
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown cursor slot '{0}' (run `cursor-inf-util slots` for the list)")]
pub struct SlotParseError(pub String);

impl FromStr for CursorSlot {
    type Err = SlotParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|slot| slot.id() == needle)
            .ok_or_else(|| SlotParseError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_order() {
        let ids: Vec<&str> = CursorSlot::ALL.iter().map(|s| s.id()).collect();
        assert_eq!(
            ids,
            vec![
                "pointer",
                "help",
                "work",
                "busy",
                "cross",
                "text",
                "hand",
                "unavailiable",
                "vert",
                "horz",
                "dgn1",
                "dgn2",
                "move",
                "alternate",
                "link",
                "location",
                "person",
            ]
        );
    }

    #[test]
    fn test_labels() {
        assert_eq!(CursorSlot::Cross.label(), "precision select");
        assert_eq!(CursorSlot::Dgn1.label(), "diagonal resize 1 \\");
    }

    #[test]
    fn test_parse_round_trips_ids() {
        for slot in CursorSlot::ALL {
            assert_eq!(slot.id().parse::<CursorSlot>(), Ok(slot));
        }
        assert_eq!("  Busy ".parse::<CursorSlot>(), Ok(CursorSlot::Busy));
    }

    #[test]
    fn test_parse_unknown() {
        let err = "unavailable".parse::<CursorSlot>().unwrap_err();
        assert_eq!(err, SlotParseError("unavailable".to_string()));
    }

    #[test]
    fn test_serde_uses_id() {
        let json = serde_json::to_string(&CursorSlot::Unavailiable).unwrap();
        assert_eq!(json, "\"unavailiable\"");
        let slot: CursorSlot = serde_json::from_str("\"dgn2\"").unwrap();
        assert_eq!(slot, CursorSlot::Dgn2);
    }
}
