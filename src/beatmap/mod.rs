// Beatmap data model
// Time-ordered hit events, serialized as a flat JSON array

pub mod filter;
pub mod writer;
pub mod zones;

pub use filter::filter_onsets;
pub use writer::{default_output_path, format_summary, write_beatmap};
pub use zones::{assign_zones, zone_pattern};

use serde::{Deserialize, Serialize};

/// A single hit event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Hit time in milliseconds from the start of the track
    pub time_ms: u64,

    /// Zero-based target zone index
    pub zone: u32,
}

/// Ordered sequence of notes
///
/// Serde-transparent: the JSON artifact is the bare array of notes, which
/// is the compatibility contract with the game client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Beatmap {
    pub notes: Vec<Note>,
}

impl Beatmap {
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_serialization_shape() {
        let note = Note {
            time_ms: 1500,
            zone: 2,
        };
        let json = serde_json::to_string(&note).unwrap();
        assert_eq!(json, r#"{"time_ms":1500,"zone":2}"#);
    }

    #[test]
    fn test_beatmap_serializes_as_flat_array() {
        let beatmap = Beatmap {
            notes: vec![
                Note { time_ms: 100, zone: 0 },
                Note { time_ms: 500, zone: 1 },
            ],
        };
        let json = serde_json::to_string(&beatmap).unwrap();
        assert_eq!(
            json,
            r#"[{"time_ms":100,"zone":0},{"time_ms":500,"zone":1}]"#
        );
    }

    #[test]
    fn test_empty_beatmap_is_empty_array() {
        let beatmap = Beatmap::default();
        assert_eq!(serde_json::to_string(&beatmap).unwrap(), "[]");
    }

    #[test]
    fn test_beatmap_roundtrip() {
        let beatmap = Beatmap {
            notes: vec![Note { time_ms: 42, zone: 4 }],
        };
        let json = serde_json::to_string(&beatmap).unwrap();
        let parsed: Beatmap = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, beatmap);
    }
}
