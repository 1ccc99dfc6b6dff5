//! The strategy interface shared by every solver.

use crate::objective::{Candidate, Objective};
use std::cell::Cell;

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Termination {
    /// The iteration cap (or SA's optional evaluation budget) was reached.
    MaxIterations,

    /// The solver-specific tolerance fired: derivative magnitude (GD),
    /// step size (Newton), or best-fitness delta (ACO).
    Converged,

    /// Newton's method met near-zero curvature and stopped without
    /// dividing.
    FlatCurvature,

    /// Simulated annealing cooled below its final temperature.
    ScheduleExhausted,
}

/// Outcome of a single solver run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct OptimizeResult {
    /// The reported solution.
    ///
    /// For the stochastic solvers this is the best candidate ever
    /// evaluated. Gradient descent and Newton's method report their final
    /// iterate, which is not corrected if the iteration diverged.
    pub best: Candidate,

    /// Completed iterations. For SA this counts inner (per-proposal) steps.
    pub iterations: usize,

    /// Objective evaluations, derivative probes included.
    pub evaluations: usize,

    /// Stopping reason.
    pub termination: Termination,

    /// Reported value after initialization and after every iteration
    /// (every temperature level for SA).
    ///
    /// Non-increasing for SA, PSO and ACO.
    pub history: Vec<f64>,
}

/// A scalar minimization strategy.
///
/// Implementors are constructed from an objective plus a validated
/// configuration, then driven with [`run`](Optimizer::run). Each run starts
/// from freshly initialized state; stochastic solvers keep advancing the
/// same generator, so consecutive runs explore different trajectories.
///
/// The trait is object safe, so harnesses can hold a
/// `Vec<Box<dyn Optimizer>>`:
///
/// ```
/// use u_scalarmin::Optimizer;
/// use u_scalarmin::gd::{GdConfig, GradientDescent};
/// use u_scalarmin::newton::{Newton, NewtonConfig};
///
/// let f = |x: f64| x * x - 2.0;
/// let mut solvers: Vec<Box<dyn Optimizer>> = vec![
///     Box::new(GradientDescent::new(f, GdConfig::default()).unwrap()),
///     Box::new(Newton::new(f, NewtonConfig::default()).unwrap()),
/// ];
/// for solver in &mut solvers {
///     let result = solver.run();
///     assert!(result.best.position.abs() < 1e-3, "{}", solver.name());
/// }
/// ```
pub trait Optimizer {
    /// Short strategy name, for logs and reports.
    fn name(&self) -> &'static str;

    /// Runs to completion, reporting every candidate the solver evaluates
    /// as a solution (initial points, iterates, proposals) to `observer`.
    ///
    /// Derivative probes at `x ± h` are not reported.
    fn run_observed(&mut self, observer: &mut dyn FnMut(&Candidate)) -> OptimizeResult;

    /// Runs to completion.
    fn run(&mut self) -> OptimizeResult {
        self.run_observed(&mut |_| {})
    }

    /// Best candidate of the most recent run, `None` before the first run.
    fn best(&self) -> Option<Candidate>;
}

/// Most history slots reserved before a run starts. Caps are often set far
/// above the iteration where a tolerance stops the run.
const HISTORY_RESERVE: usize = 4096;

/// Empty history buffer sized for `expected` iterations plus the initial
/// entry, reserving at most [`HISTORY_RESERVE`] slots up front.
pub(crate) fn history_buffer(expected: usize) -> Vec<f64> {
    Vec::with_capacity(expected.saturating_add(1).min(HISTORY_RESERVE))
}

/// Objective wrapper that counts evaluations.
pub(crate) struct Counted<'a, F: ?Sized> {
    inner: &'a F,
    calls: Cell<usize>,
}

impl<'a, F: Objective + ?Sized> Counted<'a, F> {
    pub(crate) fn new(inner: &'a F) -> Self {
        Self {
            inner,
            calls: Cell::new(0),
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl<F: Objective + ?Sized> Objective for Counted<'_, F> {
    fn evaluate(&self, x: f64) -> f64 {
        self.calls.set(self.calls.get() + 1);
        self.inner.evaluate(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::first_derivative;

    #[test]
    fn test_counted_tracks_calls() {
        let f = |x: f64| x * x;
        let counted = Counted::new(&f);
        assert_eq!(counted.calls(), 0);
        let _ = first_derivative(&counted, 1.0, 1e-6);
        assert_eq!(counted.calls(), 2);
        let c = Candidate::evaluate(&counted, 3.0);
        assert_eq!(c.value, 9.0);
        assert_eq!(counted.calls(), 3);
    }

    #[test]
    fn test_history_buffer_reservation() {
        assert_eq!(history_buffer(0).capacity(), 1);
        assert!(history_buffer(300).capacity() >= 301);
        assert!(history_buffer(usize::MAX).capacity() <= 2 * HISTORY_RESERVE);
        assert!(history_buffer(1 << 40).is_empty());
    }
}
