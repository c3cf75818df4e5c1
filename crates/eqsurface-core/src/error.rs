//! Configuration error types

use thiserror::Error;

/// Errors found while validating an editor configuration
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The editor needs at least one band
    #[error("Band count must be at least 1")]
    NoBands,

    /// Fewer labels than bands is fine, more is a typo
    #[error("{labels} band labels configured for {bands} bands")]
    TooManyLabels { labels: usize, bands: usize },

    /// Gain bounds are inverted or equal
    #[error("Invalid gain range: min={min}, max={max}")]
    InvalidGainRange { min: i32, max: i32 },

    /// A curve geometry setting is not a positive, finite number
    #[error("Curve setting '{name}' must be positive, got {value}")]
    InvalidCurveSetting { name: &'static str, value: f32 },
}

/// Result type for configuration validation
pub type ConfigResult<T> = Result<T, ConfigError>;
