//! Error types for the fw-app service layer.

use std::path::PathBuf;

/// Application error type that wraps errors from the backend crates and
/// provides a unified error interface for frontends.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("School not found: {0}")]
    SchoolNotFound(String),

    #[error("Failed to read scenario file: {path}")]
    ScenarioFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Scenario parse error: {0}")]
    ScenarioParse(#[from] serde_yaml::Error),

    #[error("Simulation error: {0}")]
    Simulation(String),

    #[error("Route error: {0}")]
    Route(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for fw-app operations.
pub type AppResult<T> = Result<T, AppError>;

// Conversions from backend error types
impl From<fw_sim::SimError> for AppError {
    fn from(err: fw_sim::SimError) -> Self {
        AppError::Simulation(err.to_string())
    }
}

impl From<fw_route::RouteError> for AppError {
    fn from(err: fw_route::RouteError) -> Self {
        AppError::Route(err.to_string())
    }
}

impl From<fw_core::FwError> for AppError {
    fn from(err: fw_core::FwError) -> Self {
        AppError::InvalidInput(err.to_string())
    }
}
