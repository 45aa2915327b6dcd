//! Alert building: flood events into evacuation guidance.
//!
//! Mirrors the dashboard effect chain: a tick reports newly flooded zones,
//! the resolver is asked for the safest exit given everything currently
//! flooded, and the result feeds the notification surface.

use serde::Serialize;

use fw_core::ZoneId;
use fw_route::{find_safe_route, RouteRecommendation, RouteRequest};
use fw_sim::TickReport;

use crate::error::AppResult;
use crate::schools::School;

/// A user-facing flood alert with evacuation guidance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Alert {
    /// The zone that just flooded.
    pub zone: ZoneId,
    /// Recommendation given the full set of currently flooded zones.
    pub recommendation: RouteRecommendation,
}

/// Build one alert per newly flooded zone in the report.
///
/// Every alert in a tick shares the same recommendation, since the
/// resolver only looks at the current flooded set. The zone's own label
/// is passed as the location hint; the resolver ignores it.
pub fn build_alerts(school: &School, report: &TickReport) -> AppResult<Vec<Alert>> {
    let flooded: Vec<String> = report
        .snapshot
        .flooded()
        .iter()
        .map(|z| z.label().to_string())
        .collect();

    report
        .events
        .iter()
        .map(|event| {
            let zone = event.zone();
            let request = RouteRequest::new(
                zone.label(),
                flooded.clone(),
                school.map_layout_description,
            );
            let recommendation = find_safe_route(&request)?;
            tracing::warn!(
                zone = %zone,
                exit = recommendation.nearest_safe_exit,
                "flood alert"
            );
            Ok(Alert {
                zone,
                recommendation,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schools::get_school;
    use fw_core::{FloodStatus, Snapshot};
    use fw_sim::FloodEvent;

    fn report(statuses: [FloodStatus; 3], newly: &[ZoneId]) -> TickReport {
        TickReport {
            snapshot: Snapshot::from_statuses(statuses),
            newly_flooded: newly.first().copied(),
            events: newly
                .iter()
                .map(|z| FloodEvent::ZoneFlooded { zone: *z })
                .collect(),
        }
    }

    #[test]
    fn no_events_no_alerts() {
        use FloodStatus::Safe as S;
        let school = get_school("cmc-elem").unwrap();
        let alerts = build_alerts(school, &report([S, S, S], &[])).unwrap();
        assert!(alerts.is_empty());
    }

    #[test]
    fn alert_reflects_current_flooded_set() {
        use FloodStatus::{Flooded as F, Safe as S};
        let school = get_school("cmc-elem").unwrap();
        // A was already flooded, B just transitioned: recommendation must
        // come from the {A, B} table row.
        let alerts = build_alerts(school, &report([F, F, S], &[ZoneId::B])).unwrap();
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].zone, ZoneId::B);
        assert_eq!(alerts[0].recommendation.nearest_safe_exit, "Exit 2");
    }

    #[test]
    fn simultaneous_floods_alert_each_zone() {
        use FloodStatus::Flooded as F;
        let school = get_school("cmc-elem").unwrap();
        let all = [ZoneId::A, ZoneId::B, ZoneId::C];
        let alerts = build_alerts(school, &report([F, F, F], &all)).unwrap();
        assert_eq!(alerts.len(), 3);
        for alert in &alerts {
            assert_eq!(alert.recommendation.nearest_safe_exit, "None");
        }
    }
}
