use thiserror::Error;

pub type FwResult<T> = Result<T, FwError>;

#[derive(Error, Debug)]
pub enum FwError {
    #[error("Unknown zone label: {label}")]
    UnknownZone { label: String },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Invariant violated: {what}")]
    Invariant { what: &'static str },
}
