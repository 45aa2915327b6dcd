//! Scenario file loading.

use std::fs;
use std::path::Path;

use fw_sim::ScenarioScript;

use crate::error::{AppError, AppResult};

/// Load a scenario script from a YAML file.
///
/// The file is a sequence of steps, each a three-element list of statuses
/// for zones A, B, C:
///
/// ```yaml
/// - [SAFE, SAFE, SAFE]
/// - [WARNING, SAFE, SAFE]
/// - [FLOODED, SAFE, SAFE]
/// ```
pub fn load_scenario(path: &Path) -> AppResult<ScenarioScript> {
    let text = fs::read_to_string(path).map_err(|source| AppError::ScenarioFileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let script: ScenarioScript = serde_yaml::from_str(&text)?;
    tracing::info!(path = %path.display(), steps = script.len(), "loaded scenario");
    Ok(script)
}
