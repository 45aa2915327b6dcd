//! Fixed-interval tick scheduling.
//!
//! The simulator itself is clock-free; consumers drive it from whatever
//! time base they have (wall clock, UI event loop, test counter). The
//! `TickClock` tracks when the next tick is due against that time base.

use serde::{Deserialize, Serialize};

use crate::error::{SimError, SimResult};

/// Tracks when the simulator should tick.
///
/// Ticks fire at a fixed interval. Between ticks the current snapshot is
/// simply held; there is nothing to interpolate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickClock {
    /// Tick interval in seconds.
    pub interval_s: f64,
    /// Time of the next scheduled tick.
    pub next_tick_time: f64,
}

impl TickClock {
    /// Create a clock ticking every `interval_s` seconds, starting from
    /// `initial_time`. The interval must be positive and finite.
    pub fn new(interval_s: f64, initial_time: f64) -> SimResult<Self> {
        if !interval_s.is_finite() || interval_s <= 0.0 {
            return Err(SimError::InvalidArg {
                what: "tick interval must be positive",
            });
        }
        Ok(TickClock {
            interval_s,
            next_tick_time: initial_time + interval_s,
        })
    }

    /// Check if a tick is due at the given time.
    pub fn should_tick(&self, current_time: f64) -> bool {
        current_time >= self.next_tick_time
    }

    /// Advance to the next tick time. Call after executing a tick.
    pub fn advance(&mut self) {
        self.next_tick_time += self.interval_s;
    }

    /// Reset the schedule relative to a new time.
    pub fn reset(&mut self, current_time: f64) {
        self.next_tick_time = current_time + self.interval_s;
    }

    /// Time remaining until the next tick.
    pub fn time_until_tick(&self, current_time: f64) -> f64 {
        (self.next_tick_time - current_time).max(0.0)
    }
}
