//! The exit table: one entry per flooded-zone combination.
//!
//! Policy data, carried verbatim from the dashboard rule set. The table is
//! indexed directly by the 3-bit flooded mask (bit 0 = A, bit 1 = B,
//! bit 2 = C), so totality over all 8 combinations is visible at a glance.

use serde::Serialize;

use fw_core::FloodedSet;

/// A recommended exit with guidance text.
///
/// Static text, not computed from geometry; descriptions read as route
/// guidance but come straight from the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RouteRecommendation {
    pub nearest_safe_exit: &'static str,
    pub route_description: &'static str,
}

/// Sentinel exit label when every zone is flooded.
pub const NO_SAFE_EXIT: &str = "None";

/// Exit label when no zone is flooded.
pub const ALL_EXITS_SAFE: &str = "All exits are safe";

/// Indexed by `FloodedSet::mask()`.
const EXIT_TABLE: [RouteRecommendation; 8] = [
    // 0b000: nothing flooded
    RouteRecommendation {
        nearest_safe_exit: ALL_EXITS_SAFE,
        route_description: "There are no active flood warnings. All evacuation routes are clear. The nearest exit depends on your current location.",
    },
    // 0b001: A
    RouteRecommendation {
        nearest_safe_exit: "Exit 3",
        route_description: "Zone A is flooded. Your nearest safe exit is Exit 3. An alternative is Exit 2. Avoid Exit 1.",
    },
    // 0b010: B
    RouteRecommendation {
        nearest_safe_exit: "Exit 1",
        route_description: "Zone B is flooded. The safest route is to Exit 1. Exit 2 is closer but may be risky. Avoid Exit 3.",
    },
    // 0b011: A + B
    RouteRecommendation {
        nearest_safe_exit: "Exit 2",
        route_description: "With Zones A and B flooded, your only safe path is towards Exit 2. Proceed with caution.",
    },
    // 0b100: C
    RouteRecommendation {
        nearest_safe_exit: "Exit 1",
        route_description: "Zone C is flooded. The safest route is to Exit 1. Exit 3 is closer but you would need to pass near the flooded zone.",
    },
    // 0b101: A + C
    RouteRecommendation {
        nearest_safe_exit: "Exit 3",
        route_description: "Zones A and C are flooded. The safest route is to Exit 3. Avoid the southern part of the school.",
    },
    // 0b110: B + C
    RouteRecommendation {
        nearest_safe_exit: "Exit 1",
        route_description: "The entire eastern part of the school (Zones B and C) is flooded. Proceed directly to Exit 1.",
    },
    // 0b111: everything
    RouteRecommendation {
        nearest_safe_exit: NO_SAFE_EXIT,
        route_description: "All zones are flooded. No safe exit can be determined. Seek higher ground immediately and await rescue.",
    },
];

/// Look up the recommendation for a flooded-zone set.
pub fn recommend(flooded: FloodedSet) -> RouteRecommendation {
    EXIT_TABLE[flooded.mask() as usize]
}
