//! Error types for Homestead
//!
//! Uses `thiserror` for library errors. Validation failures are raised
//! synchronously and carry the offending field so callers can surface them
//! next to the form input that produced them; no partial results are ever
//! returned alongside an error.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Homestead operations
pub type HomesteadResult<T> = Result<T, HomesteadError>;

/// Main error type for Homestead operations
#[derive(Error, Debug)]
pub enum HomesteadError {
    /// A field required by the scenario's development type is absent
    #[error("missing required field '{field}' for {kind} scenario")]
    MissingField {
        field: &'static str,
        kind: &'static str,
    },

    /// A field is present but its value is unusable
    #[error("invalid value for '{field}' in {kind} scenario: {message}")]
    InvalidField {
        field: &'static str,
        kind: &'static str,
        message: String,
    },

    /// Budget envelope with min above max
    #[error("budget range minimum {min} exceeds maximum {max}")]
    InvalidBudgetRange { min: f64, max: f64 },

    /// Land area must be strictly positive
    #[error("land size must be positive, got {value} sqm")]
    InvalidLandSize { value: f64 },

    /// The occupancy constants round the projected population to zero,
    /// leaving per-person figures undefined
    #[error("estimated population rounds to zero; cost per person is undefined")]
    ZeroPopulation,

    /// Assumption table file failed to parse
    #[error("invalid assumptions table {file}: {message}")]
    InvalidAssumptions { file: PathBuf, message: String },

    /// No cost assumptions registered for the requested region
    #[error("no cost assumptions for region '{region}'")]
    UnknownRegion { region: String },

    /// No country data registered for the requested ISO code
    #[error("no country data for country code '{code}'")]
    UnknownCountry { code: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
