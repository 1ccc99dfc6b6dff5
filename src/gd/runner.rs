//! GD execution loop.

use super::config::GdConfig;
use crate::diff::first_derivative;
use crate::error::ConfigError;
use crate::objective::{Candidate, Objective};
use crate::optimizer::{history_buffer, Counted, OptimizeResult, Optimizer, Termination};
use tracing::{debug, trace};

/// Gradient descent solver.
///
/// ```
/// use u_scalarmin::Optimizer;
/// use u_scalarmin::gd::{GdConfig, GradientDescent};
///
/// let mut gd = GradientDescent::new(|x: f64| (x - 3.0).powi(2), GdConfig::default()).unwrap();
/// let result = gd.run();
/// assert!((result.best.position - 3.0).abs() < 1e-3);
/// ```
pub struct GradientDescent<F> {
    objective: F,
    config: GdConfig,
    best: Option<Candidate>,
}

impl<F: Objective> GradientDescent<F> {
    /// Creates a solver after validating `config`.
    pub fn new(objective: F, config: GdConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            objective,
            config,
            best: None,
        })
    }

    pub fn config(&self) -> &GdConfig {
        &self.config
    }
}

impl<F: Objective> Optimizer for GradientDescent<F> {
    fn name(&self) -> &'static str {
        "gradient-descent"
    }

    fn run_observed(&mut self, observer: &mut dyn FnMut(&Candidate)) -> OptimizeResult {
        let config = &self.config;
        let f = Counted::new(&self.objective);
        let clamp = |x: f64| config.bounds.map_or(x, |b| b.clamp(x));

        let mut x = clamp(config.start);
        let mut current = Candidate::evaluate(&f, x);
        observer(&current);

        let mut history = history_buffer(config.max_iterations);
        history.push(current.value);

        debug!(
            start = x,
            learning_rate = config.learning_rate,
            max_iterations = config.max_iterations,
            "gradient descent started"
        );

        let mut termination = Termination::MaxIterations;
        let mut iterations = 0usize;

        for _ in 0..config.max_iterations {
            let derivative = first_derivative(&f, x, config.step);
            x = clamp(x - config.learning_rate * derivative);

            current = Candidate::evaluate(&f, x);
            observer(&current);
            history.push(current.value);
            iterations += 1;

            trace!(iteration = iterations, x, derivative, "gd step");

            // Convergence is judged on the derivative, not the step.
            if derivative.abs() < config.tolerance {
                termination = Termination::Converged;
                break;
            }
        }

        let evaluations = f.calls();
        debug!(
            iterations,
            position = current.position,
            value = current.value,
            ?termination,
            "gradient descent finished"
        );

        self.best = Some(current);
        OptimizeResult {
            best: current,
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
