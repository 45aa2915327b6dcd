//! Scenario-driven flood simulation for floodwatch.
//!
//! Provides:
//! - Scenario scripts: fixed per-zone status sequences replayed cyclically
//! - The zone simulator with newly-flooded transition detection
//! - A tick clock for fixed-interval scheduling against an external time base
//! - Discrete flood events for alert-triggering consumers

pub mod clock;
pub mod error;
pub mod events;
pub mod scenario;
pub mod simulator;

// Re-exports for public API
pub use clock::TickClock;
pub use error::{SimError, SimResult};
pub use events::FloodEvent;
pub use scenario::{ScenarioScript, ScenarioStep};
pub use simulator::{TickReport, ZoneSimulator};

/// Tick interval of the reference dashboard, in seconds.
pub const DEFAULT_TICK_INTERVAL_S: f64 = 15.0;
