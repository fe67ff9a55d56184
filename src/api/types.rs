//! Wire types for the daemon's REST interface.

use crate::consts::cli_consts::status_note;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One tracked transfer, as reported by `GET /torrent`.
///
/// The daemon serializes every field it knows about, but older builds omit
/// the totals and peer counts, so everything defaults to zero and the name
/// to empty rather than failing the whole snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TorrentRecord {
    #[serde(default)]
    pub name: String,
    /// Download rate in bytes per second.
    #[serde(default)]
    pub down_rate: f64,
    /// Upload rate in bytes per second.
    #[serde(default)]
    pub up_rate: f64,
    /// Completion in the 0.0..=1.0 range.
    #[serde(default)]
    pub progress: f64,
    #[serde(default)]
    pub down_total: u64,
    #[serde(default)]
    pub up_total: u64,
    #[serde(default)]
    pub seeds: u32,
    #[serde(default)]
    pub peers: u32,
}

/// A whole-collection snapshot keyed by info-hash.
///
/// A BTreeMap keeps key order stable, so an unchanged response always renders
/// the same table. Each poll replaces the previous snapshot wholesale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TorrentSnapshot(pub BTreeMap<String, TorrentRecord>);

impl TorrentSnapshot {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&TorrentRecord> {
        self.0.get(key)
    }

    /// Records in key order, one table row each.
    pub fn records(&self) -> impl Iterator<Item = (&String, &TorrentRecord)> {
        self.0.iter()
    }
}

/// The fixed placeholder payload accepted (and discarded) by the daemon root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusNote {
    pub title: String,
    pub body: String,
    #[serde(rename = "userId")]
    pub user_id: u64,
}

impl StatusNote {
    pub fn placeholder() -> Self {
        Self {
            title: status_note::TITLE.to_string(),
            body: status_note::BODY.to_string(),
            user_id: status_note::USER_ID,
        }
    }
}

/// Format a byte rate the way the daemon's web front end did: divide by 1000
/// and append the unit, with no trailing zeros.
pub fn format_rate(bytes_per_sec: f64) -> String {
    format!("{}Kb/s", bytes_per_sec / 1000.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_rate_whole_kilobits() {
        assert_eq!(format_rate(1000.0), "1Kb/s");
        assert_eq!(format_rate(2000.0), "2Kb/s");
    }

    #[test]
    fn test_format_rate_zero() {
        assert_eq!(format_rate(0.0), "0Kb/s");
    }

    #[test]
    fn test_format_rate_fractional() {
        assert_eq!(format_rate(500.0), "0.5Kb/s");
    }

    #[test]
    fn test_snapshot_row_count_matches_key_count() {
        let json = r#"{
            "abc": {"name":"X","down_rate":2000,"up_rate":500},
            "def": {"name":"Y","down_rate":0,"up_rate":0}
        }"#;
        let snapshot: TorrentSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot.records().count(), 2);
    }

    #[test]
    fn test_empty_response_parses_to_empty_snapshot() {
        let snapshot: TorrentSnapshot = serde_json::from_str("{}").unwrap();
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.records().count(), 0);
    }

    #[test]
    fn test_sparse_record_defaults_missing_fields() {
        let json = r#"{"abc": {"name": "X"}}"#;
        let snapshot: TorrentSnapshot = serde_json::from_str(json).unwrap();
        let record = snapshot.get("abc").unwrap();
        assert_eq!(record.name, "X");
        assert_eq!(record.down_rate, 0.0);
        assert_eq!(record.seeds, 0);
    }

    #[test]
    fn test_missing_key_yields_none() {
        let snapshot: TorrentSnapshot = serde_json::from_str("{}").unwrap();
        assert!(snapshot.get("56a21a042238079f5cc68a81af8f3689dd923b0b").is_none());
    }

    #[test]
    fn test_identical_responses_yield_identical_snapshots() {
        let json = r#"{"abc": {"name":"X","down_rate":2000,"up_rate":500}}"#;
        let first: TorrentSnapshot = serde_json::from_str(json).unwrap();
        let second: TorrentSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_status_note_uses_wire_field_name() {
        let json = serde_json::to_string(&StatusNote::placeholder()).unwrap();
        assert!(json.contains("\"userId\":123"));
    }
}
