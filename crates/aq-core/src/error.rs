use thiserror::Error;

pub type AqResult<T> = Result<T, AqError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AqError {
    #[error("Invalid value for {what}: {value} (must be non-negative and finite)")]
    InvalidValue { what: &'static str, value: f64 },

    #[error("Value out of range for {what}: {value} (expected {min} to {max})")]
    InvalidRange {
        what: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("Missing input: {what}")]
    MissingInput { what: &'static str },

    #[error("Convergence failed: {what}")]
    ConvergenceFailure { what: String },
}
