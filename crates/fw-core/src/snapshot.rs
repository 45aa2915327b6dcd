//! Per-zone status snapshots.

use core::fmt;

use crate::zone::{FloodStatus, FloodedSet, ZoneId, ZoneState, ZONE_COUNT};

/// A complete picture of the building at one instant: exactly one status
/// per zone, stored in enumeration order.
///
/// Snapshots are cheap to copy and replaced wholesale each simulator tick;
/// there is no partial mutation of a prior snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    statuses: [FloodStatus; ZONE_COUNT],
}

impl Snapshot {
    /// All zones SAFE.
    pub fn all_safe() -> Self {
        Snapshot {
            statuses: [FloodStatus::Safe; ZONE_COUNT],
        }
    }

    /// Build from statuses assigned positionally to zones A, B, C.
    pub fn from_statuses(statuses: [FloodStatus; ZONE_COUNT]) -> Self {
        Snapshot { statuses }
    }

    pub fn status(&self, zone: ZoneId) -> FloodStatus {
        self.statuses[zone.index()]
    }

    /// Zone states in enumeration order.
    pub fn zones(&self) -> impl Iterator<Item = ZoneState> + '_ {
        ZoneId::ALL.into_iter().map(|id| ZoneState {
            id,
            status: self.status(id),
        })
    }

    /// The set of zones currently FLOODED.
    pub fn flooded(&self) -> FloodedSet {
        ZoneId::ALL
            .into_iter()
            .filter(|z| self.status(*z).is_flooded())
            .collect()
    }

    pub fn is_all_safe(&self) -> bool {
        self.statuses.iter().all(|s| *s == FloodStatus::Safe)
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Snapshot::all_safe()
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for state in self.zones() {
            if !first {
                f.write_str("  ")?;
            }
            write!(f, "{}: {}", state.id.letter(), state.status)?;
            first = false;
        }
        Ok(())
    }
}
