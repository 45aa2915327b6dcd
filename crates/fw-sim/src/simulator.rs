//! The zone simulator: scripted snapshots plus transition detection.

use fw_core::{Snapshot, ZoneId};

use crate::events::FloodEvent;
use crate::scenario::ScenarioScript;

/// Result of one simulator tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TickReport {
    /// The snapshot produced by this tick.
    pub snapshot: Snapshot,
    /// First zone (enumeration order) that became FLOODED this tick.
    ///
    /// Matches the single-zone signal of the reference dashboard: when
    /// several zones flood on the same tick only the first is named here.
    /// `events` carries the full set.
    pub newly_flooded: Option<ZoneId>,
    /// One event per zone that became FLOODED this tick.
    pub events: Vec<FloodEvent>,
}

/// Replays a scenario script and reports zones newly transitioning into
/// FLOODED.
///
/// The script is injected at construction; the simulator holds no global
/// state and no timer. Drive `tick()` from a [`crate::TickClock`] or call
/// it directly in tests.
#[derive(Clone, Debug)]
pub struct ZoneSimulator {
    script: ScenarioScript,
    /// Index of the step the next tick will apply.
    index: usize,
    /// Snapshot produced by the last tick (all SAFE before the first).
    current: Snapshot,
}

impl ZoneSimulator {
    /// Create a simulator at the start of `script`, all zones SAFE.
    pub fn new(script: ScenarioScript) -> Self {
        ZoneSimulator {
            script,
            index: 0,
            current: Snapshot::all_safe(),
        }
    }

    /// Simulator over the built-in demo script.
    pub fn demo() -> Self {
        ZoneSimulator::new(ScenarioScript::demo())
    }

    /// The snapshot as of the last tick.
    pub fn snapshot(&self) -> Snapshot {
        self.current
    }

    pub fn script(&self) -> &ScenarioScript {
        &self.script
    }

    /// Apply the next scripted step.
    ///
    /// Builds the new snapshot, diffs it against the previous one for
    /// SAFE/WARNING -> FLOODED transitions, and advances the script index
    /// modulo the script length. The old snapshot is dropped; only the
    /// diff outcome survives in the report.
    pub fn tick(&mut self) -> TickReport {
        let previous = self.current;
        let snapshot = self.script.step(self.index).snapshot();
        self.index = (self.index + 1) % self.script.len();
        self.current = snapshot;

        let events: Vec<FloodEvent> = ZoneId::ALL
            .into_iter()
            .filter(|z| snapshot.status(*z).is_flooded() && !previous.status(*z).is_flooded())
            .map(|zone| FloodEvent::ZoneFlooded { zone })
            .collect();
        let newly_flooded = events.first().map(FloodEvent::zone);

        if let Some(zone) = newly_flooded {
            tracing::info!(zone = %zone, "zone newly flooded");
        }

        TickReport {
            snapshot,
            newly_flooded,
            events,
        }
    }

    /// Run `n` ticks, returning the reports in order.
    pub fn run(&mut self, n: usize) -> Vec<TickReport> {
        (0..n).map(|_| self.tick()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fw_core::{FloodStatus, ZONE_COUNT};
    use crate::scenario::ScenarioStep;

    fn script(steps: &[[FloodStatus; ZONE_COUNT]]) -> ScenarioScript {
        ScenarioScript::new(steps.iter().map(|s| ScenarioStep(*s)).collect()).unwrap()
    }

    #[test]
    fn starts_all_safe() {
        let sim = ZoneSimulator::demo();
        assert!(sim.snapshot().is_all_safe());
    }

    #[test]
    fn tick_applies_scripted_step() {
        use FloodStatus::{Flooded as F, Safe as S, Warning as W};
        let mut sim = ZoneSimulator::new(script(&[[W, S, F]]));
        let report = sim.tick();
        assert_eq!(report.snapshot.status(ZoneId::A), W);
        assert_eq!(report.snapshot.status(ZoneId::C), F);
        assert_eq!(sim.snapshot(), report.snapshot);
    }

    #[test]
    fn transition_reported_once() {
        use FloodStatus::{Flooded as F, Safe as S};
        // B floods on step 1 and stays flooded on step 2
        let mut sim = ZoneSimulator::new(script(&[[S, F, S], [S, F, S], [S, S, S]]));
        let first = sim.tick();
        assert_eq!(first.newly_flooded, Some(ZoneId::B));
        assert_eq!(first.events, vec![FloodEvent::ZoneFlooded { zone: ZoneId::B }]);

        let second = sim.tick();
        assert_eq!(second.newly_flooded, None);
        assert!(second.events.is_empty());
    }

    #[test]
    fn simultaneous_floods_name_first_zone() {
        use FloodStatus::{Flooded as F, Safe as S};
        let mut sim = ZoneSimulator::new(script(&[[F, S, F]]));
        let report = sim.tick();
        assert_eq!(report.newly_flooded, Some(ZoneId::A));
        assert_eq!(report.events.len(), 2);
        assert_eq!(report.events[1].zone(), ZoneId::C);
    }

    #[test]
    fn reflood_after_receding_reported_again() {
        use FloodStatus::{Flooded as F, Safe as S};
        let mut sim = ZoneSimulator::new(script(&[[F, S, S], [S, S, S], [F, S, S]]));
        assert_eq!(sim.tick().newly_flooded, Some(ZoneId::A));
        assert_eq!(sim.tick().newly_flooded, None);
        assert_eq!(sim.tick().newly_flooded, Some(ZoneId::A));
    }

    #[test]
    fn snapshot_always_three_zones() {
        let mut sim = ZoneSimulator::demo();
        for _ in 0..40 {
            let report = sim.tick();
            assert_eq!(report.snapshot.zones().count(), ZONE_COUNT);
        }
    }
}
