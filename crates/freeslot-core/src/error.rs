//! Core error types for freeslot-core.
//!
//! This module defines the error hierarchy using thiserror. Precondition
//! violations on value types surface as [`ValidationError`]; a broken
//! interval-set invariant surfaces as [`CoreError::Invariant`].

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for freeslot-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Internal invariant of the interval set was violated
    #[error("Internal invariant violated: {0}")]
    Invariant(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Home or config directory could not be prepared
    #[error("Configuration directory unavailable: {0}")]
    DirectoryUnavailable(String),
}

/// Validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Invalid time range
    #[error("Invalid time range: end ({end}) must not be before start ({start})")]
    InvalidTimeRange {
        start: chrono::DateTime<chrono::Utc>,
        end: chrono::DateTime<chrono::Utc>,
    },

    /// Task priority outside 1..=5
    #[error("Priority must be a value from {min} to {max}, got {value}")]
    PriorityOutOfRange { value: i64, min: u8, max: u8 },

    /// Negative duration
    #[error("Duration for '{field}' must not be negative")]
    NegativeDuration { field: String },

    /// Empty required name
    #[error("'{0}' needs a non-empty name")]
    EmptyName(String),

    /// Unknown scheduling algorithm name
    #[error("Algorithm type does not exist: {0}")]
    UnknownAlgorithm(String),

    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
