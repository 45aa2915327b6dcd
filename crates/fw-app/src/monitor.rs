//! The monitor loop: clock + simulator + alerts for one school.

use fw_core::Snapshot;
use fw_sim::{ScenarioScript, TickClock, ZoneSimulator, DEFAULT_TICK_INTERVAL_S};

use crate::alert::{build_alerts, Alert};
use crate::error::AppResult;
use crate::schools::School;

/// Drives the zone simulator for one school against an external time base.
///
/// Ticks run to completion one at a time; the caller supplies monotonic
/// `now` values (wall clock seconds, UI frame time, or a test counter).
/// Teardown is dropping the monitor; there is nothing else to cancel.
pub struct FloodMonitor {
    school: &'static School,
    simulator: ZoneSimulator,
    clock: TickClock,
}

impl FloodMonitor {
    /// Monitor `school` with the given script and tick interval.
    pub fn new(
        school: &'static School,
        script: ScenarioScript,
        interval_s: f64,
        now: f64,
    ) -> AppResult<Self> {
        let clock = TickClock::new(interval_s, now)?;
        Ok(FloodMonitor {
            school,
            simulator: ZoneSimulator::new(script),
            clock,
        })
    }

    /// Monitor with the demo script at the reference 15 s cadence.
    pub fn demo(school: &'static School, now: f64) -> AppResult<Self> {
        FloodMonitor::new(school, ScenarioScript::demo(), DEFAULT_TICK_INTERVAL_S, now)
    }

    pub fn school(&self) -> &'static School {
        self.school
    }

    /// Current snapshot for map coloring and the status list.
    pub fn snapshot(&self) -> Snapshot {
        self.simulator.snapshot()
    }

    /// Seconds until the next scheduled tick.
    pub fn time_until_tick(&self, now: f64) -> f64 {
        self.clock.time_until_tick(now)
    }

    /// Tick if one is due at `now`, returning any alerts raised.
    ///
    /// At most one tick runs per call; if the caller fell behind by more
    /// than one interval, remaining ticks fire on subsequent polls.
    pub fn poll(&mut self, now: f64) -> AppResult<Vec<Alert>> {
        if !self.clock.should_tick(now) {
            return Ok(Vec::new());
        }
        self.clock.advance();
        self.tick_now()
    }

    /// Force a tick regardless of the clock. Deterministic driver for
    /// tests and the CLI runner.
    pub fn tick_now(&mut self) -> AppResult<Vec<Alert>> {
        let report = self.simulator.tick();
        build_alerts(self.school, &report)
    }
}
