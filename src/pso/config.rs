//! PSO configuration.

use crate::error::{require_non_negative, ConfigError};
use crate::objective::Bounds;

/// How the inertia weight evolves over a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InertiaSchedule {
    /// Linear decay from `w_max` at the first iteration toward `w_min`:
    /// `w = w_max − (i / max_iterations) · (w_max − w_min)`.
    #[default]
    LinearDecay,

    /// `w_max` on every iteration; `w_min` is ignored.
    Constant,
}

impl InertiaSchedule {
    /// Inertia weight for the zero-based `iteration`.
    pub fn weight(&self, iteration: usize, max_iterations: usize, w_max: f64, w_min: f64) -> f64 {
        match self {
            InertiaSchedule::LinearDecay => {
                let progress = iteration as f64 / max_iterations.max(1) as f64;
                w_max - progress * (w_max - w_min)
            }
            InertiaSchedule::Constant => w_max,
        }
    }
}

/// Configuration for Particle Swarm Optimization.
///
/// # Examples
///
/// ```
/// use u_scalarmin::pso::{InertiaSchedule, PsoConfig};
///
/// let config = PsoConfig::default()
///     .with_particles(40)
///     .with_inertia(0.9, 0.4, InertiaSchedule::LinearDecay)
///     .with_seed(1);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PsoConfig {
    /// Search domain.
    pub bounds: Bounds,

    /// Swarm size.
    pub particles: usize,

    /// Number of sweeps over the swarm.
    pub max_iterations: usize,

    /// Inertia weight at the start of the schedule.
    pub w_max: f64,

    /// Inertia weight at the end of a decaying schedule.
    pub w_min: f64,

    /// Inertia schedule.
    pub inertia: InertiaSchedule,

    /// Cognitive coefficient (pull toward the personal best).
    pub c1: f64,

    /// Social coefficient (pull toward the global best).
    pub c2: f64,

    /// Accepted for symmetry with the other solvers; the swarm never stops
    /// early.
    pub tolerance: f64,

    /// Random seed for reproducibility. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for PsoConfig {
    fn default() -> Self {
        Self {
            bounds: Bounds::default(),
            particles: 20,
            max_iterations: 300,
            w_max: 0.9,
            w_min: 0.4,
            inertia: InertiaSchedule::default(),
            c1: 2.0,
            c2: 2.0,
            tolerance: 1e-6,
            seed: None,
        }
    }
}

impl PsoConfig {
    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn with_particles(mut self, n: usize) -> Self {
        self.particles = n;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the inertia range and schedule.
    pub fn with_inertia(mut self, w_max: f64, w_min: f64, schedule: InertiaSchedule) -> Self {
        self.w_max = w_max;
        self.w_min = w_min;
        self.inertia = schedule;
        self
    }

    /// Sets the cognitive and social coefficients.
    pub fn with_coefficients(mut self, c1: f64, c2: f64) -> Self {
        self.c1 = c1;
        self.c2 = c2;
        self
    }

    pub fn with_tolerance(mut self, tol: f64) -> Self {
        self.tolerance = tol;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.bounds.validate()?;
        if self.particles == 0 {
            return Err(ConfigError::EmptyPopulation { name: "particles" });
        }
        if self.max_iterations == 0 {
            return Err(ConfigError::ZeroIterations);
        }
        require_non_negative("w_max", self.w_max)?;
        require_non_negative("w_min", self.w_min)?;
        require_non_negative("c1", self.c1)?;
        require_non_negative("c2", self.c2)?;
        require_non_negative("tolerance", self.tolerance)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PsoConfig::default();
        assert_eq!(config.particles, 20);
        assert_eq!(config.max_iterations, 300);
        assert_eq!(config.inertia, InertiaSchedule::LinearDecay);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_linear_decay_weight() {
        let s = InertiaSchedule::LinearDecay;
        assert!((s.weight(0, 100, 0.9, 0.4) - 0.9).abs() < 1e-12);
        assert!((s.weight(50, 100, 0.9, 0.4) - 0.65).abs() < 1e-12);
        assert!((s.weight(100, 100, 0.9, 0.4) - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_constant_weight_ignores_progress() {
        let s = InertiaSchedule::Constant;
        for i in [0, 10, 299] {
            assert_eq!(s.weight(i, 300, 0.9, 0.4), 0.9);
        }
    }

    #[test]
    fn test_validate_empty_swarm() {
        let err = PsoConfig::default().with_particles(0).validate();
        assert_eq!(err, Err(ConfigError::EmptyPopulation { name: "particles" }));
    }

    #[test]
    fn test_validate_negative_coefficient() {
        assert!(PsoConfig::default().with_coefficients(-1.0, 2.0).validate().is_err());
    }
}
