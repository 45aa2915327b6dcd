//! Scenario scripts: scripted per-zone status sequences.
//!
//! A script stands in for real sensor telemetry. The simulator replays it
//! cyclically, one step per tick, wrapping at the end.

use serde::{Deserialize, Serialize};

use fw_core::{FloodStatus, Snapshot, ZONE_COUNT};

use crate::error::{SimError, SimResult};

/// One script entry: statuses assigned positionally to zones A, B, C.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioStep(pub [FloodStatus; ZONE_COUNT]);

impl ScenarioStep {
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from_statuses(self.0)
    }
}

/// A non-empty ordered list of steps, replayed cyclically.
///
/// Deserialization goes through [`ScenarioScript::new`], so an empty
/// script is rejected at parse time too.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<ScenarioStep>", into = "Vec<ScenarioStep>")]
pub struct ScenarioScript {
    steps: Vec<ScenarioStep>,
}

impl TryFrom<Vec<ScenarioStep>> for ScenarioScript {
    type Error = SimError;

    fn try_from(steps: Vec<ScenarioStep>) -> SimResult<Self> {
        ScenarioScript::new(steps)
    }
}

impl From<ScenarioScript> for Vec<ScenarioStep> {
    fn from(script: ScenarioScript) -> Self {
        script.steps
    }
}

impl ScenarioScript {
    /// Create a script from explicit steps. At least one step is required.
    pub fn new(steps: Vec<ScenarioStep>) -> SimResult<Self> {
        if steps.is_empty() {
            return Err(SimError::EmptyScript);
        }
        Ok(ScenarioScript { steps })
    }

    /// The scripted demo cycle of the reference dashboard: a flood rising
    /// through zone A, receding, hitting zone B, then the eastern half,
    /// and finally the whole building.
    pub fn demo() -> Self {
        use FloodStatus::{Flooded as F, Safe as S, Warning as W};
        ScenarioScript {
            steps: vec![
                ScenarioStep([S, S, S]),
                ScenarioStep([W, S, S]),
                ScenarioStep([F, S, S]),
                ScenarioStep([F, W, S]),
                ScenarioStep([S, W, S]),
                ScenarioStep([S, F, S]),
                ScenarioStep([S, S, W]),
                ScenarioStep([W, S, W]),
                ScenarioStep([F, F, S]),
                ScenarioStep([S, S, S]),
                ScenarioStep([F, F, F]),
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        // new() rejects empty scripts; kept for API symmetry
        self.steps.is_empty()
    }

    /// Step at `index` modulo script length.
    pub fn step(&self, index: usize) -> &ScenarioStep {
        &self.steps[index % self.steps.len()]
    }

    pub fn steps(&self) -> &[ScenarioStep] {
        &self.steps
    }
}
