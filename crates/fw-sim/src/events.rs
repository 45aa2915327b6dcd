//! Discrete flood events.
//!
//! A `ZoneFlooded` event is emitted exactly once, on the tick where the
//! zone transitions into FLOODED. Consumers receive events by value from
//! the tick report; there is no polled flag to clear and nothing to race
//! against the next tick.

use fw_core::ZoneId;

/// One-shot notification of a zone-level transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FloodEvent {
    /// The zone was not FLOODED on the previous snapshot and is now.
    ZoneFlooded { zone: ZoneId },
}

impl FloodEvent {
    pub fn zone(&self) -> ZoneId {
        match self {
            FloodEvent::ZoneFlooded { zone } => *zone,
        }
    }
}
