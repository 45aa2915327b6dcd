//! Integration test: the dashboard effect chain end to end.
//!
//! Scenario tick -> snapshot update -> newly-flooded events -> resolver ->
//! alerts, driven through the service layer the way a frontend would.

use fw_app::{get_school, FloodMonitor};
use fw_core::{FloodStatus, ZoneId, ZONE_COUNT};
use fw_sim::{ScenarioScript, ScenarioStep};

fn script(steps: &[[FloodStatus; ZONE_COUNT]]) -> ScenarioScript {
    ScenarioScript::new(steps.iter().map(|s| ScenarioStep(*s)).collect()).unwrap()
}

#[test]
fn rising_flood_produces_one_alert_per_transition() {
    use FloodStatus::{Flooded as F, Safe as S, Warning as W};
    let school = get_school("mcnnhs").unwrap();
    let steps = [
        [S, S, S],
        [W, S, S],
        [F, S, S], // A floods: {A} -> Exit 3
        [F, F, S], // B floods while A stays: {A, B} -> Exit 2
        [F, F, S], // no transition, no alert
        [F, F, F], // C floods: {A, B, C} -> None
    ];
    let mut monitor = FloodMonitor::new(school, script(&steps), 15.0, 0.0).unwrap();

    let mut alerts = Vec::new();
    for _ in 0..steps.len() {
        alerts.extend(monitor.tick_now().unwrap());
    }

    let summary: Vec<(ZoneId, &str)> = alerts
        .iter()
        .map(|a| (a.zone, a.recommendation.nearest_safe_exit))
        .collect();
    assert_eq!(
        summary,
        vec![
            (ZoneId::A, "Exit 3"),
            (ZoneId::B, "Exit 2"),
            (ZoneId::C, "None"),
        ]
    );
}

#[test]
fn polling_between_intervals_never_double_alerts() {
    use FloodStatus::{Flooded as F, Safe as S};
    let school = get_school("cmc-elem").unwrap();
    let steps = [[S, F, S], [S, F, S]];
    let mut monitor = FloodMonitor::new(school, script(&steps), 15.0, 0.0).unwrap();

    let mut alert_count = 0;
    let mut now = 0.0;
    while now <= 60.0 {
        alert_count += monitor.poll(now).unwrap().len();
        now += 1.0;
    }
    // B floods once on the first tick; later ticks keep it flooded and the
    // wrap back to step 0 does not count as a transition either.
    assert_eq!(alert_count, 1);
    assert_eq!(monitor.snapshot().status(ZoneId::B), FloodStatus::Flooded);
}
