//! GD configuration.

use crate::diff::DEFAULT_STEP;
use crate::error::{require_non_negative, require_positive, ConfigError};
use crate::objective::Bounds;

/// Configuration for gradient descent.
///
/// # Examples
///
/// ```
/// use u_scalarmin::gd::GdConfig;
///
/// let config = GdConfig::default()
///     .with_start(3.0)
///     .with_learning_rate(0.1)
///     .with_max_iterations(500);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GdConfig {
    /// Starting point.
    pub start: f64,

    /// Finite-difference step `h`.
    pub step: f64,

    /// Learning rate `η`.
    pub learning_rate: f64,

    /// Stop once `|f'(x)|` falls below this.
    pub tolerance: f64,

    /// Hard iteration cap.
    pub max_iterations: usize,

    /// Optional box; iterates are clamped into it when set.
    pub bounds: Option<Bounds>,
}

impl Default for GdConfig {
    fn default() -> Self {
        Self {
            start: 1.0,
            step: DEFAULT_STEP,
            learning_rate: 0.03,
            tolerance: 1e-6,
            max_iterations: 2000,
            bounds: None,
        }
    }
}

impl GdConfig {
    pub fn with_start(mut self, x: f64) -> Self {
        self.start = x;
        self
    }

    pub fn with_step(mut self, h: f64) -> Self {
        self.step = h;
        self
    }

    pub fn with_learning_rate(mut self, rate: f64) -> Self {
        self.learning_rate = rate;
        self
    }

    pub fn with_tolerance(mut self, tol: f64) -> Self {
        self.tolerance = tol;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = Some(bounds);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.start.is_finite() {
            return Err(ConfigError::parameter("start", self.start, "must be finite"));
        }
        require_positive("step", self.step)?;
        require_positive("learning_rate", self.learning_rate)?;
        require_non_negative("tolerance", self.tolerance)?;
        if self.max_iterations == 0 {
            return Err(ConfigError::ZeroIterations);
        }
        if let Some(bounds) = &self.bounds {
            bounds.validate()?;
        }
        Ok(())
    }
}
