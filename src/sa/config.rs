//! SA configuration.

use crate::error::{require_positive, require_unit_open, ConfigError};
use crate::objective::Bounds;

/// Configuration for the Simulated Annealing algorithm.
///
/// # Examples
///
/// ```
/// use u_scalarmin::sa::SaConfig;
///
/// let config = SaConfig::default()
///     .with_initial_temperature(500.0)
///     .with_final_temperature(0.1)
///     .with_alpha(0.98)
///     .with_iterations_per_temperature(200)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaConfig {
    /// Search domain.
    pub bounds: Bounds,

    /// Starting temperature. Higher values accept more uphill moves.
    pub initial_temperature: f64,

    /// The run stops once the temperature is at or below this.
    pub final_temperature: f64,

    /// Geometric cooling factor in (0, 1): `T ← alpha · T`.
    ///
    /// Higher values cool more slowly.
    pub alpha: f64,

    /// Proposals evaluated at each temperature level.
    pub iterations_per_temperature: usize,

    /// Hard budget on total proposals. 0 = no limit.
    pub max_iterations: usize,

    /// Random seed for reproducibility. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            bounds: Bounds::default(),
            initial_temperature: 1000.0,
            final_temperature: 1.0,
            alpha: 0.995,
            iterations_per_temperature: 1000,
            max_iterations: 0,
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_final_temperature(mut self, t: f64) -> Self {
        self.final_temperature = t;
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_iterations_per_temperature(mut self, n: usize) -> Self {
        self.iterations_per_temperature = n;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of temperature levels the schedule visits, 0 for an invalid
    /// schedule.
    pub fn temperature_levels(&self) -> usize {
        if self.validate().is_err() {
            return 0;
        }
        let mut t = self.initial_temperature;
        let mut levels = 0;
        while t > self.final_temperature {
            t *= self.alpha;
            levels += 1;
        }
        levels
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.bounds.validate()?;
        require_positive("initial_temperature", self.initial_temperature)?;
        require_positive("final_temperature", self.final_temperature)?;
        if self.final_temperature >= self.initial_temperature {
            return Err(ConfigError::parameter(
                "final_temperature",
                self.final_temperature,
                "must be less than initial_temperature",
            ));
        }
        require_unit_open("alpha", self.alpha)?;
        if self.iterations_per_temperature == 0 {
            return Err(ConfigError::ZeroIterations);
        }
        Ok(())
    }
}
