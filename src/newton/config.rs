//! Newton configuration.

use crate::diff::DEFAULT_STEP;
use crate::error::{require_non_negative, require_positive, ConfigError};
use crate::objective::Bounds;

/// Configuration for Newton's method.
///
/// # Examples
///
/// ```
/// use u_scalarmin::newton::NewtonConfig;
///
/// let config = NewtonConfig::default().with_start(4.0).with_tolerance(1e-9);
/// assert_eq!(config.max_iterations, 100);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NewtonConfig {
    /// Starting point.
    pub start: f64,

    /// Finite-difference step `h`.
    pub step: f64,

    /// Stop once `|x_new − x|` falls below this.
    pub tolerance: f64,

    /// Hard iteration cap.
    pub max_iterations: usize,

    /// Curvature magnitude below which the iteration stops instead of
    /// dividing.
    pub curvature_floor: f64,

    /// Optional box; iterates are clamped into it when set.
    pub bounds: Option<Bounds>,
}

impl Default for NewtonConfig {
    fn default() -> Self {
        Self {
            start: 1.0,
            step: DEFAULT_STEP,
            tolerance: 1e-6,
            max_iterations: 100,
            curvature_floor: 1e-6,
            bounds: None,
        }
    }
}

impl NewtonConfig {
    pub fn with_start(mut self, x: f64) -> Self {
        self.start = x;
        self
    }

    pub fn with_step(mut self, h: f64) -> Self {
        self.step = h;
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

    pub fn with_curvature_floor(mut self, floor: f64) -> Self {
        self.curvature_floor = floor;
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
        require_non_negative("tolerance", self.tolerance)?;
        require_non_negative("curvature_floor", self.curvature_floor)?;
        if self.max_iterations == 0 {
            return Err(ConfigError::ZeroIterations);
        }
        if let Some(bounds) = &self.bounds {
            bounds.validate()?;
        }
        Ok(())
    }
}
