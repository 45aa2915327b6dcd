//! Route request payload and validation.

use serde::{Deserialize, Serialize};

use fw_core::{FloodedSet, ZoneId};

use crate::error::{RouteError, RouteResult};

/// Input to the route resolver.
///
/// `current_location` and `school_map` are accepted for interface
/// compatibility with the dashboard's route-finder form but do not
/// influence the recommendation; only `flooded_zones` does.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteRequest {
    pub current_location: String,
    pub flooded_zones: Vec<String>,
    pub school_map: String,
}

impl RouteRequest {
    pub fn new(
        current_location: impl Into<String>,
        flooded_zones: Vec<String>,
        school_map: impl Into<String>,
    ) -> Self {
        RouteRequest {
            current_location: current_location.into(),
            flooded_zones,
            school_map: school_map.into(),
        }
    }

    /// Validate the request and extract the flooded-zone set.
    ///
    /// Every label must name one of the three zones ("A" or "Zone A",
    /// case-insensitive). Anything else fails validation; callers get the
    /// generic invalid-input failure, never a panic.
    pub fn flooded_set(&self) -> RouteResult<FloodedSet> {
        self.flooded_zones
            .iter()
            .map(|label| label.parse::<ZoneId>().map_err(|_| RouteError::InvalidInput))
            .collect()
    }
}
