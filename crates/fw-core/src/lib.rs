//! fw-core: stable foundation for floodwatch.
//!
//! Contains:
//! - zone (zone identifiers, flood status levels, flooded-set mask)
//! - snapshot (per-zone status snapshots)
//! - error (shared error types)

pub mod error;
pub mod snapshot;
pub mod zone;

// Re-exports: nice ergonomics for downstream crates
pub use error::{FwError, FwResult};
pub use snapshot::*;
pub use zone::*;
