//! Error types for the driftfield core.

use thiserror::Error;

/// Errors produced by field, particle, and configuration operations.
#[derive(Debug, Error)]
pub enum SimError {
    /// Width or height was zero, negative, or non-finite.
    #[error("invalid dimensions: width and height must be positive and finite")]
    InvalidDimensions,

    /// A mode name did not match any recognized field mode.
    #[error("unknown field mode: {0}")]
    UnknownMode(String),

    /// A configuration value was NaN or infinite.
    #[error("non-finite value for '{name}': {value}")]
    NonFinite { name: String, value: f64 },

    /// A configuration value was finite but outside its usable range.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// An I/O failure while writing a snapshot or scene.
    #[error("i/o error: {0}")]
    Io(String),
}
