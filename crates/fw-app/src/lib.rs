//! Shared application service layer for floodwatch.
//!
//! This crate provides a unified interface for dashboard frontends,
//! centralizing the school registry, flood-history sample data, alert
//! building, and the monitor loop that wires clock, simulator, and
//! resolver together.

pub mod alert;
pub mod error;
pub mod history;
pub mod monitor;
pub mod scenario;
pub mod schools;

// Re-export key types for convenience
pub use alert::{build_alerts, Alert};
pub use error::{AppError, AppResult};
pub use history::{mock_history, FloodHistoryEntry};
pub use monitor::FloodMonitor;
pub use scenario::load_scenario;
pub use schools::{get_school, list_schools, School};
