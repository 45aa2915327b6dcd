//! Flood-history sample data.
//!
//! Static entries for the history charts. Unrelated to live snapshots:
//! nothing the simulator produces is ever persisted here.

use chrono::{DateTime, Utc};
use serde::Serialize;

use fw_core::ZoneId;

/// One past flood occurrence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FloodHistoryEntry {
    pub timestamp: DateTime<Utc>,
    pub zone: ZoneId,
    pub duration_minutes: u32,
}

/// Sample history shown on the dashboard charts.
pub fn mock_history() -> Vec<FloodHistoryEntry> {
    let entry = |ts: &str, zone, duration_minutes| FloodHistoryEntry {
        // Timestamps are fixed literals; parse cannot fail.
        timestamp: ts.parse().expect("valid RFC 3339 timestamp"),
        zone,
        duration_minutes,
    };
    vec![
        entry("2024-07-01T14:30:00Z", ZoneId::A, 45),
        entry("2024-07-15T09:15:00Z", ZoneId::C, 120),
        entry("2024-08-05T18:00:00Z", ZoneId::A, 30),
        entry("2024-08-06T11:45:00Z", ZoneId::B, 60),
        entry("2024-08-21T21:00:00Z", ZoneId::C, 90),
        entry("2024-09-10T07:20:00Z", ZoneId::A, 25),
        entry("2024-09-11T13:05:00Z", ZoneId::B, 75),
        entry("2024-09-12T16:50:00Z", ZoneId::C, 40),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_is_chronological() {
        let history = mock_history();
        assert_eq!(history.len(), 8);
        for pair in history.windows(2) {
            assert!(pair[0].timestamp < pair[1].timestamp);
        }
    }

    #[test]
    fn durations_are_positive() {
        assert!(mock_history().iter().all(|e| e.duration_minutes > 0));
    }
}
