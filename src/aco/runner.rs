//! ACO execution loop.

use super::config::AcoConfig;
use super::types::Ant;
use crate::error::ConfigError;
use crate::objective::{Candidate, Objective};
use crate::optimizer::{history_buffer, Counted, OptimizeResult, Optimizer, Termination};
use crate::random::create_rng;
use rand::rngs::StdRng;
use rand::Rng;
use tracing::{debug, trace};

/// Iteration index after which the early-stop rule is consulted.
const WARMUP_ITERATIONS: usize = 3;

/// Ant Colony solver.
///
/// # Examples
///
/// ```
/// use u_scalarmin::Optimizer;
/// use u_scalarmin::aco::{AcoConfig, AntColony};
///
/// let config = AcoConfig::default().with_deposit(0.01).with_seed(42);
/// let mut colony = AntColony::new(|x: f64| x * x - 2.0, config).unwrap();
/// let result = colony.run();
/// assert!(result.best.position.abs() < 0.1);
/// ```
pub struct AntColony<F, R = StdRng> {
    objective: F,
    config: AcoConfig,
    rng: R,
    colony: Vec<Ant>,
    best: Option<Candidate>,
}

impl<F: Objective> AntColony<F> {
    /// Creates a solver seeded from `config.seed`.
    pub fn new(objective: F, config: AcoConfig) -> Result<Self, ConfigError> {
        let rng = create_rng(config.seed);
        Self::with_rng(objective, config, rng)
    }
}

impl<F: Objective, R: Rng> AntColony<F, R> {
    /// Creates a solver drawing from a caller-supplied generator.
    ///
    /// `config.seed` is ignored.
    pub fn with_rng(objective: F, config: AcoConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            objective,
            colony: Vec::with_capacity(config.ants),
            config,
            rng,
            best: None,
        })
    }

    pub fn config(&self) -> &AcoConfig {
        &self.config
    }

    /// Colony state at the end of the most recent run.
    pub fn ants(&self) -> &[Ant] {
        &self.colony
    }
}

impl<F: Objective, R: Rng> Optimizer for AntColony<F, R> {
    fn name(&self) -> &'static str {
        "ant-colony"
    }

    fn run_observed(&mut self, observer: &mut dyn FnMut(&Candidate)) -> OptimizeResult {
        let config = &self.config;
        let rng = &mut self.rng;
        let f = Counted::new(&self.objective);
        let bounds = config.bounds;

        let colony = &mut self.colony;
        colony.clear();
        for _ in 0..config.ants {
            let start = Candidate::evaluate(&f, bounds.sample(rng));
            observer(&start);
            colony.push(Ant::new(start, config.initial_pheromone));
        }

        let mut global = colony[0].current;
        for ant in colony.iter().skip(1) {
            if ant.current.is_better_than(&global) {
                global = ant.current;
            }
        }
        // Global best before the most recent improvement.
        let mut previous: Option<Candidate> = None;

        let mut history = history_buffer(config.max_iterations);
        history.push(global.value);

        let mut termination = Termination::MaxIterations;
        let mut iterations = 0usize;

        debug!(
            ants = config.ants,
            evaporation = config.evaporation,
            deposit = config.deposit,
            convergence = ?config.convergence,
            "ant colony started"
        );

        for iteration in 0..config.max_iterations {
            for ant in colony.iter_mut() {
                let step = rng.random_range(-1.0..1.0) * bounds.width() * ant.pheromone;
                let proposal = Candidate::evaluate(&f, bounds.clamp(ant.current.position + step));
                observer(&proposal);

                ant.try_move(proposal);

                if proposal.is_better_than(&global) {
                    previous = Some(global);
                    global = proposal;
                }
            }

            for ant in colony.iter_mut() {
                ant.update_pheromone(config.evaporation, config.deposit);
            }

            iterations = iteration + 1;
            history.push(global.value);
            trace!(iteration, best = global.value, "aco sweep done");

            if iteration > WARMUP_ITERATIONS {
                if let Some(prev) = &previous {
                    if config.convergence.converged(&global, prev, config.tolerance) {
                        termination = Termination::Converged;
                        break;
                    }
                }
            }
        }

        let evaluations = f.calls();
        debug!(
            iterations,
            position = global.position,
            value = global.value,
            ?termination,
            "ant colony finished"
        );

        self.best = Some(global);
        OptimizeResult {
            best: global,
            iterations,
            evaluations,
            termination,
            history,
        }
    }

    fn best(&self) -> Option<Candidate> {
        self.best
    }
}
