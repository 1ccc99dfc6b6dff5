//! Newton execution loop.

use super::config::NewtonConfig;
use crate::diff::{first_derivative, second_derivative};
use crate::error::ConfigError;
use crate::objective::{Candidate, Objective};
use crate::optimizer::{Counted, OptimizeResult, Optimizer, Termination};
use tracing::{debug, trace};

/// Newton's method solver.
pub struct Newton<F> {
    objective: F,
    config: NewtonConfig,
    best: Option<Candidate>,
}

impl<F: Objective> Newton<F> {
    /// Creates a solver after validating `config`.
    pub fn new(objective: F, config: NewtonConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            objective,
            config,
            best: None,
        })
    }

    pub fn config(&self) -> &NewtonConfig {
        &self.config
    }
}

impl<F: Objective> Optimizer for Newton<F> {
    fn name(&self) -> &'static str {
        "newton"
    }

    /// Each pass counts as one iteration, including the pass that stops on
    /// flat curvature or a small step. The stopping pass does not adopt its
    /// proposed point.
    fn run_observed(&mut self, observer: &mut dyn FnMut(&Candidate)) -> OptimizeResult {
        let config = &self.config;
        let f = Counted::new(&self.objective);
        let clamp = |x: f64| config.bounds.map_or(x, |b| b.clamp(x));

        let mut current = Candidate::evaluate(&f, clamp(config.start));
        observer(&current);

        let mut history = vec![current.value];
        let mut termination = Termination::MaxIterations;
        let mut iterations = 0usize;

        debug!(start = current.position, tolerance = config.tolerance, "newton started");

        for _ in 0..config.max_iterations {
            iterations += 1;
            let x = current.position;
            let d1 = first_derivative(&f, x, config.step);
            let d2 = second_derivative(&f, x, config.step);

            if d2.abs() < config.curvature_floor {
                debug!(x, curvature = d2, "newton stopped on flat curvature");
                termination = Termination::FlatCurvature;
                break;
            }

            let x_new = clamp(x - d1 / d2);
            trace!(iteration = iterations, x, x_new, d1, d2, "newton step");

            if (x_new - x).abs() < config.tolerance {
                termination = Termination::Converged;
                break;
            }

            current = Candidate::evaluate(&f, x_new);
            observer(&current);
            history.push(current.value);
        }

        let evaluations = f.calls();
        debug!(
            iterations,
            position = current.position,
            value = current.value,
            ?termination,
            "newton finished"
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
