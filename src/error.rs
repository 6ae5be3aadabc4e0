// src/error.rs

//! Error types shared by the model, optimizer, simulator and reporter.

use thiserror::Error;

/// Result type alias for every fallible operation in the crate.
pub type Result<T> = std::result::Result<T, SimError>;

#[derive(Error, Debug)]
pub enum SimError {
    /// A closed-form evaluation left the real domain (e.g. a negative
    /// liquidity raised to a fractional power).
    #[error("Domain error: {parameter} = {value} yields a non-finite result")]
    Domain { parameter: &'static str, value: f64 },

    #[error("Empty grid: nothing to optimize over")]
    EmptyGrid,

    #[error("Invalid fee grid: min={min}, max={max}")]
    InvalidGrid { min: f64, max: f64 },

    #[error("Shock schedule needs {requested} disjoint windows but only {available} fit")]
    ShockSchedule { requested: usize, available: usize },

    #[error("Invalid configuration: {parameter} {reason}")]
    InvalidConfig {
        parameter: &'static str,
        reason: String,
    },

    #[error("Chart rendering error: {0}")]
    Chart(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl SimError {
    /// Create an invalid configuration error
    pub fn invalid_config<S: Into<String>>(parameter: &'static str, reason: S) -> Self {
        Self::InvalidConfig {
            parameter,
            reason: reason.into(),
        }
    }
}
