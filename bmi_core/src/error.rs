//! Error types for the bmi_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Reasons an input record is rejected before any computation happens.
///
/// The display strings are the user-facing notifications; they name the
/// problem class, never the specific field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// One or more required fields are empty
    #[error("Missing Field.. Please Fill In All Fields!!")]
    MissingField,

    /// Weight or height text does not parse as a number
    #[error("Invalid Input.. Weight And Height Should Be Numeric!!")]
    NotNumeric,

    /// Non-positive weight, negative height part, or zero total height
    #[error("Invalid Range.. Weight And Height Should Be Positive!!")]
    InvalidRange,
}

/// Core error type for bmi_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Input rejected by the validator
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// BMI could not be represented as a two-place decimal
    #[error("Calculation error: {0}")]
    Calculation(String),

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// The validation failure behind this error, if any
    pub fn as_validation(&self) -> Option<ValidationError> {
        match self {
            Error::Validation(kind) => Some(*kind),
            _ => None,
        }
    }
}
