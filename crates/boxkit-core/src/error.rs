//! Error types for BoxKit.
//!
//! This module provides structured error types for configuration
//! validation and box layout generation.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Errors that can occur while generating a box layout.
#[derive(Error, Debug)]
pub enum Error {
    /// A configuration parameter failed validation.
    #[error("Parameter error: {0}")]
    Parameter(#[from] ParameterError),

    /// Notched lines were requested before they were generated.
    #[error("Notches are not yet generated")]
    NotGenerated,

    /// A geometry operation failed during path generation.
    #[error("Geometry error: {0}")]
    Geometry(String),
}

/// Errors related to box configuration validation.
#[derive(Error, Debug)]
pub enum ParameterError {
    /// A required parameter is missing.
    #[error("Missing required parameter: {0}")]
    Missing(String),

    /// A parameter value is out of the valid range.
    #[error("Parameter '{name}' out of range: {value} (valid: {min}..{max})")]
    OutOfRange {
        name: String,
        value: f64,
        min: f64,
        max: f64,
    },

    /// A parameter value is invalid.
    #[error("Invalid value for '{name}': {reason}")]
    InvalidValue { name: String, reason: String },

    /// Dimensions are invalid (zero or negative).
    #[error("Invalid dimensions: {0}")]
    InvalidDimensions(String),
}

/// Result type alias for box layout generation.
pub type Result<T> = std::result::Result<T, Error>;

/// Result type alias for configuration validation.
pub type ParameterResult<T> = std::result::Result<T, ParameterError>;
