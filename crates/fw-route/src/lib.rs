//! Deterministic evacuation-route resolution for floodwatch.
//!
//! Provides:
//! - `RouteRequest` validation (zone labels, contextual fields)
//! - The exhaustive 8-entry exit table keyed by the flooded-zone mask
//! - `find_safe_route`, the single resolver entry point
//!
//! The resolver is pure: no I/O, no shared state, no randomness. The exit
//! texts are policy data carried verbatim from the dashboard rule set, not
//! derived from building geometry.

pub mod error;
pub mod request;
pub mod resolver;
pub mod table;

// Re-exports for public API
pub use error::{RouteError, RouteResult};
pub use request::RouteRequest;
pub use resolver::find_safe_route;
pub use table::{recommend, RouteRecommendation};
