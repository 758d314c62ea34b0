//! Error types for the orbit engine and scenario loading

use thiserror::Error;

/// Degenerate geometry or run settings; fatal for the current run
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DomainError {
    #[error("body is at zero distance from the central mass")]
    ZeroDistance,

    #[error("time step must be positive and finite, got {0}")]
    NonPositiveStep(f64),

    #[error("end time must be non-negative and finite, got {0}")]
    InvalidEndTime(f64),

    #[error("start time must be finite, got {0}")]
    InvalidStartTime(f64),
}

/// Failures while reading or validating a scenario file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read scenario: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse scenario yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ConfigError::Invalid { field, reason: reason.into() }
    }
}
