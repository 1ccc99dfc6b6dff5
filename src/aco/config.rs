//! ACO configuration.

use crate::error::{require_non_negative, require_positive, require_unit_open, ConfigError};
use crate::objective::{Bounds, Candidate};

/// Early-stop rule, checked once the iteration index exceeds 3.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConvergenceCheck {
    /// Stop when the latest global-best improvement changed the best
    /// fitness by less than the tolerance.
    #[default]
    BestFitnessDelta,

    /// Compare the best fitness against the previous best *position*.
    ///
    /// Mixes a fitness with a coordinate, so it almost never fires.
    /// Reproduces the comparison of the classic single-file implementation.
    LegacyPositionDelta,
}

impl ConvergenceCheck {
    /// Whether the run has converged given the current and the previous
    /// global best.
    pub fn converged(&self, best: &Candidate, previous: &Candidate, tolerance: f64) -> bool {
        let delta = match self {
            ConvergenceCheck::BestFitnessDelta => best.value - previous.value,
            ConvergenceCheck::LegacyPositionDelta => best.value - previous.position,
        };
        delta.abs() < tolerance
    }
}

/// Configuration for Ant Colony Optimization.
///
/// Defaults follow the classic demo setup (50 ants, ρ = 0.5, q = 100).
///
/// The deposit `q / (fitness + ε)` is negative whenever the fitness is
/// below `−ε`, so trails can go negative. Only the magnitude of a trail
/// matters for the step, since the direction comes from `U(−1, 1)`. With
/// the default `q` and fitness values of order one, trails stay far above
/// one and every step spans the whole domain: the colony samples the
/// domain with clamping and greedy acceptance, which still finds the
/// minimizer of `x² − 2` in most seeded runs. A small `deposit` such as
/// `0.01` shrinks the steps near the minimizer and turns the colony into
/// a local search.
///
/// # Examples
///
/// ```
/// use u_scalarmin::aco::{AcoConfig, ConvergenceCheck};
///
/// let config = AcoConfig::default()
///     .with_ants(30)
///     .with_deposit(0.01)
///     .with_convergence(ConvergenceCheck::BestFitnessDelta)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcoConfig {
    /// Search domain.
    pub bounds: Bounds,

    /// Colony size.
    pub ants: usize,

    /// Evaporation rate `ρ` in (0, 1).
    pub evaporation: f64,

    /// Pheromone gain `q`.
    pub deposit: f64,

    /// Pheromone level of every ant before the first sweep.
    pub initial_pheromone: f64,

    /// Early-stop tolerance.
    pub tolerance: f64,

    /// Maximum number of sweeps.
    pub max_iterations: usize,

    /// Early-stop rule.
    pub convergence: ConvergenceCheck,

    /// Random seed for reproducibility. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for AcoConfig {
    fn default() -> Self {
        Self {
            bounds: Bounds::default(),
            ants: 50,
            evaporation: 0.5,
            deposit: 100.0,
            initial_pheromone: 1.0,
            tolerance: 1e-6,
            max_iterations: 1000,
            convergence: ConvergenceCheck::default(),
            seed: None,
        }
    }
}

impl AcoConfig {
    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn with_ants(mut self, n: usize) -> Self {
        self.ants = n;
        self
    }

    pub fn with_evaporation(mut self, rate: f64) -> Self {
        self.evaporation = rate;
        self
    }

    pub fn with_deposit(mut self, q: f64) -> Self {
        self.deposit = q;
        self
    }

    pub fn with_initial_pheromone(mut self, level: f64) -> Self {
        self.initial_pheromone = level;
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

    pub fn with_convergence(mut self, check: ConvergenceCheck) -> Self {
        self.convergence = check;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.bounds.validate()?;
        if self.ants == 0 {
            return Err(ConfigError::EmptyPopulation { name: "ants" });
        }
        if self.max_iterations == 0 {
            return Err(ConfigError::ZeroIterations);
        }
        require_unit_open("evaporation", self.evaporation)?;
        require_positive("deposit", self.deposit)?;
        require_positive("initial_pheromone", self.initial_pheromone)?;
        require_non_negative("tolerance", self.tolerance)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(position: f64, value: f64) -> Candidate {
        Candidate { position, value }
    }

    #[test]
    fn test_default_config() {
        let config = AcoConfig::default();
        assert_eq!(config.ants, 50);
        assert!((config.evaporation - 0.5).abs() < 1e-15);
        assert!((config.deposit - 100.0).abs() < 1e-12);
        assert_eq!(config.convergence, ConvergenceCheck::BestFitnessDelta);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_empty_colony() {
        let err = AcoConfig::default().with_ants(0).validate();
        assert_eq!(err, Err(ConfigError::EmptyPopulation { name: "ants" }));
    }

    #[test]
    fn test_validate_bad_evaporation() {
        assert!(AcoConfig::default().with_evaporation(0.0).validate().is_err());
        assert!(AcoConfig::default().with_evaporation(1.0).validate().is_err());
    }

    #[test]
    fn test_fitness_delta_check() {
        let check = ConvergenceCheck::BestFitnessDelta;
        assert!(check.converged(&at(0.0, -2.0), &at(0.001, -1.9999999), 1e-6));
        assert!(!check.converged(&at(0.0, -2.0), &at(0.5, -1.75), 1e-6));
    }

    #[test]
    fn test_legacy_check_compares_position() {
        // The legacy rule fires when the best fitness equals the previous
        // best position, regardless of the previous fitness.
        let check = ConvergenceCheck::LegacyPositionDelta;
        assert!(check.converged(&at(0.0, -2.0), &at(-2.0, 2.0), 1e-6));
        assert!(!ConvergenceCheck::BestFitnessDelta.converged(&at(0.0, -2.0), &at(-2.0, 2.0), 1e-6));
    }
}
