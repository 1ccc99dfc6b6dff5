//! SA execution loop.

use super::config::SaConfig;
use crate::error::ConfigError;
use crate::objective::{Candidate, Objective};
use crate::optimizer::{history_buffer, Counted, OptimizeResult, Optimizer, Termination};
use crate::random::create_rng;
use rand::rngs::StdRng;
use rand::Rng;
use tracing::{debug, trace};

/// Temperature at which the proposal amplitude is `width / e`.
const STEP_TEMPERATURE_SCALE: f64 = 1000.0;

/// Acceptance statistics of the most recent SA run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SaStats {
    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of strictly improving moves.
    pub improving_moves: usize,

    /// Temperature levels visited.
    pub temperature_levels: usize,

    /// Temperature when the run stopped.
    pub final_temperature: f64,
}

/// Simulated Annealing solver.
///
/// # Examples
///
/// ```
/// use u_scalarmin::Optimizer;
/// use u_scalarmin::sa::{SaConfig, SimulatedAnnealing};
///
/// let config = SaConfig::default()
///     .with_alpha(0.9)
///     .with_iterations_per_temperature(50)
///     .with_seed(42);
/// let mut sa = SimulatedAnnealing::new(|x: f64| x * x - 2.0, config).unwrap();
/// let result = sa.run();
/// assert!(result.best.value < -1.9);
/// ```
pub struct SimulatedAnnealing<F, R = StdRng> {
    objective: F,
    config: SaConfig,
    rng: R,
    best: Option<Candidate>,
    stats: Option<SaStats>,
}

impl<F: Objective> SimulatedAnnealing<F> {
    /// Creates a solver seeded from `config.seed`.
    pub fn new(objective: F, config: SaConfig) -> Result<Self, ConfigError> {
        let rng = create_rng(config.seed);
        Self::with_rng(objective, config, rng)
    }
}

impl<F: Objective, R: Rng> SimulatedAnnealing<F, R> {
    /// Creates a solver drawing from a caller-supplied generator.
    ///
    /// `config.seed` is ignored.
    pub fn with_rng(objective: F, config: SaConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            objective,
            config,
            rng,
            best: None,
            stats: None,
        })
    }

    pub fn config(&self) -> &SaConfig {
        &self.config
    }

    /// Acceptance statistics of the most recent run.
    pub fn stats(&self) -> Option<SaStats> {
        self.stats
    }
}

impl<F: Objective, R: Rng> Optimizer for SimulatedAnnealing<F, R> {
    fn name(&self) -> &'static str {
        "simulated-annealing"
    }

    fn run_observed(&mut self, observer: &mut dyn FnMut(&Candidate)) -> OptimizeResult {
        let config = &self.config;
        let rng = &mut self.rng;
        let f = Counted::new(&self.objective);
        let bounds = config.bounds;

        // Initialize
        let mut current = Candidate::evaluate(&f, bounds.sample(rng));
        observer(&current);
        let mut best = current;

        let mut temperature = config.initial_temperature;
        let mut total_iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut levels = 0usize;
        let mut termination = Termination::ScheduleExhausted;

        let mut history = history_buffer(config.temperature_levels());
        history.push(best.value);

        debug!(
            initial_temperature = config.initial_temperature,
            final_temperature = config.final_temperature,
            alpha = config.alpha,
            start = current.position,
            "simulated annealing started"
        );

        'cooling: while temperature > config.final_temperature {
            let amplitude = bounds.width() * (-temperature / STEP_TEMPERATURE_SCALE).exp();

            for _ in 0..config.iterations_per_temperature {
                if config.max_iterations > 0 && total_iterations >= config.max_iterations {
                    termination = Termination::MaxIterations;
                    break 'cooling;
                }

                let step = rng.random_range(-1.0..1.0) * amplitude;
                let proposal = Candidate::evaluate(&f, bounds.clamp(current.position + step));
                observer(&proposal);

                // Metropolis acceptance criterion
                let accept = if proposal.is_better_than(&current) {
                    improving_moves += 1;
                    true
                } else {
                    let probability = ((current.value - proposal.value) / temperature).exp();
                    rng.random::<f64>() < probability
                };

                if accept {
                    current = proposal;
                    accepted_moves += 1;
                }

                // Tracked apart from acceptance: an accepted uphill move never
                // overwrites the best-ever record.
                if current.is_better_than(&best) {
                    best = current;
                }

                total_iterations += 1;
            }

            history.push(best.value);
            trace!(level = levels, temperature, best = best.value, "sa level done");

            temperature *= config.alpha;
            levels += 1;
        }

        // Final history entry: a budget stop mid-level skips the level push.
        if history.last() != Some(&best.value) {
            history.push(best.value);
        }

        let evaluations = f.calls();
        debug!(
            iterations = total_iterations,
            accepted_moves,
            position = best.position,
            value = best.value,
            ?termination,
            "simulated annealing finished"
        );

        self.best = Some(best);
        self.stats = Some(SaStats {
            accepted_moves,
            improving_moves,
            temperature_levels: levels,
            final_temperature: temperature,
        });

        OptimizeResult {
            best,
            iterations: total_iterations,
            evaluations,
            termination,
            history,
        }
    }

    fn best(&self) -> Option<Candidate> {
        self.best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objective::Bounds;
    use crate::random::rng_from_seed;

    fn shifted_quadratic(x: f64) -> f64 {
        x * x - 2.0
    }

    fn quick_config() -> SaConfig {
        SaConfig::default()
            .with_initial_temperature(1000.0)
            .with_final_temperature(1.0)
            .with_alpha(0.95)
            .with_iterations_per_temperature(50)
            .with_seed(42)
    }

    #[test]
    fn test_sa_quadratic() {
        let mut sa = SimulatedAnnealing::new(shifted_quadratic, quick_config()).unwrap();
        let result = sa.run();

        assert!(
            result.best.value < -1.99,
            "expected near-minimal value, got {}",
            result.best.value
        );
        assert_eq!(result.termination, Termination::ScheduleExhausted);

        let stats = sa.stats().unwrap();
        assert!(stats.improving_moves > 0);
        assert!(stats.accepted_moves >= stats.improving_moves);
        assert!(stats.final_temperature <= 1.0);
    }

    #[test]
    fn test_sa_schedule_length() {
        let config = quick_config().with_alpha(0.5).with_iterations_per_temperature(7);
        let mut sa = SimulatedAnnealing::new(shifted_quadratic, config).unwrap();
        let result = sa.run();

        assert_eq!(sa.stats().unwrap().temperature_levels, 10);
        assert_eq!(result.iterations, 70);
        assert_eq!(result.evaluations, 71);
        assert_eq!(result.history.len(), 11);
    }

    #[test]
    fn test_sa_max_iterations_limit() {
        let config = quick_config()
            .with_alpha(0.999)
            .with_iterations_per_temperature(10)
            .with_max_iterations(100);
        let mut sa = SimulatedAnnealing::new(shifted_quadratic, config).unwrap();
        let result = sa.run();

        assert_eq!(result.iterations, 100);
        assert_eq!(result.termination, Termination::MaxIterations);
    }

    #[test]
    fn test_sa_budget_mid_level_records_final_best() {
        let config = SaConfig::default()
            .with_iterations_per_temperature(1000)
            .with_max_iterations(1500)
            .with_seed(3);
        let mut sa = SimulatedAnnealing::new(shifted_quadratic, config).unwrap();
        let result = sa.run();

        assert_eq!(result.termination, Termination::MaxIterations);
        assert_eq!(result.iterations, 1500);
        assert_eq!(result.history.last(), Some(&result.best.value));
        for window in result.history.windows(2) {
            assert!(window[1] <= window[0]);
        }
    }

    #[test]
    fn test_sa_best_never_worse_than_visited() {
        let mut sa = SimulatedAnnealing::new(shifted_quadratic, quick_config()).unwrap();
        let mut visited = Vec::new();
        let result = sa.run_observed(&mut |c| visited.push(*c));

        assert_eq!(visited.len(), result.evaluations);
        assert!(visited.iter().all(|c| result.best.value <= c.value));
        assert!(visited.iter().all(|c| c.value == shifted_quadratic(c.position)));
    }

    #[test]
    fn test_sa_proposals_clamped() {
        // Minimizer sits outside the domain, so proposals keep hitting the edge.
        let bounds = Bounds::new(2.0, 6.0).unwrap();
        let config = quick_config().with_bounds(bounds);
        let mut sa = SimulatedAnnealing::new(shifted_quadratic, config).unwrap();
        let mut visited = Vec::new();
        let result = sa.run_observed(&mut |c| visited.push(c.position));

        assert!(visited.iter().all(|&x| bounds.contains(x)));
        assert_eq!(result.best.position, 2.0);
    }

    #[test]
    fn test_sa_cost_history_non_increasing() {
        let mut sa = SimulatedAnnealing::new(shifted_quadratic, quick_config()).unwrap();
        let result = sa.run();

        for window in result.history.windows(2) {
            assert!(
                window[1] <= window[0],
                "best cost history should be non-increasing: {} > {}",
                window[1],
                window[0]
            );
        }
    }

    #[test]
    fn test_sa_metropolis_accepts_uphill() {
        // Near T = 1000 the uphill acceptance probability stays high.
        let config = quick_config()
            .with_initial_temperature(1000.0)
            .with_final_temperature(500.0)
            .with_alpha(0.9)
            .with_iterations_per_temperature(200);
        let mut sa = SimulatedAnnealing::new(shifted_quadratic, config).unwrap();
        let result = sa.run();

        let stats = sa.stats().unwrap();
        let acceptance_ratio = stats.accepted_moves as f64 / result.iterations as f64;
        assert!(
            acceptance_ratio > 0.8,
            "expected high acceptance at high temp, got {acceptance_ratio}"
        );
    }

    #[test]
    fn test_sa_injected_rng_matches_seed() {
        let config = quick_config();
        let mut seeded = SimulatedAnnealing::new(shifted_quadratic, config.clone()).unwrap();
        let mut injected =
            SimulatedAnnealing::with_rng(shifted_quadratic, config, rng_from_seed(42)).unwrap();

        let a = seeded.run();
        let b = injected.run();
        assert_eq!(a.best.position.to_bits(), b.best.position.to_bits());
        assert_eq!(a.history, b.history);
    }
}
