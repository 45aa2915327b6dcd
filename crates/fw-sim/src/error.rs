//! Error types for simulation operations.

use thiserror::Error;

/// Errors encountered while building or running a simulation.
#[derive(Error, Debug)]
pub enum SimError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Scenario script must contain at least one step")]
    EmptyScript,
}

pub type SimResult<T> = Result<T, SimError>;

impl From<fw_core::FwError> for SimError {
    fn from(e: fw_core::FwError) -> Self {
        match e {
            fw_core::FwError::InvalidArg { what } => SimError::InvalidArg { what },
            _ => SimError::InvalidArg {
                what: "invalid core value",
            },
        }
    }
}
