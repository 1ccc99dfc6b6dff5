//! Configuration errors.
//!
//! Solvers never fail once constructed: numerical edge cases (flat
//! curvature, out-of-bounds proposals, near-zero fitness) are handled
//! inside the iteration loop. The only error surface is an invalid
//! configuration, rejected at construction time.

use thiserror::Error;

/// Errors raised when validating a solver configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("invalid bounds: min ({min}) must be finite and less than max ({max})")]
    InvalidBounds { min: f64, max: f64 },

    #[error("{name} must be at least 1")]
    EmptyPopulation { name: &'static str },

    #[error("max_iterations must be at least 1")]
    ZeroIterations,

    #[error("invalid {name}: {value} ({reason})")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },
}

impl ConfigError {
    pub(crate) fn parameter(name: &'static str, value: f64, reason: &'static str) -> Self {
        Self::InvalidParameter {
            name,
            value,
            reason,
        }
    }
}

/// Rejects values that are non-finite or not strictly positive.
pub(crate) fn require_positive(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::parameter(name, value, "must be finite and positive"))
    }
}

/// Rejects values that are non-finite or negative.
pub(crate) fn require_non_negative(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::parameter(name, value, "must be finite and non-negative"))
    }
}

/// Rejects values outside the open interval (0, 1).
pub(crate) fn require_unit_open(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 && value < 1.0 {
        Ok(())
    } else {
        Err(ConfigError::parameter(name, value, "must be in (0, 1)"))
    }
}
