//! Symmetric finite-difference derivative estimates.
//!
//! Both estimators are central differences with truncation error `O(h²)`.
//! Accuracy degrades for `h` too small (cancellation) or too large
//! (truncation); choosing `h` is the caller's job.

use crate::objective::Objective;

/// Step used by the derivative-based solvers unless configured otherwise.
pub const DEFAULT_STEP: f64 = 1e-6;

/// Estimates `f'(x)` as `(f(x+h) - f(x-h)) / 2h`.
pub fn first_derivative<F: Objective + ?Sized>(f: &F, x: f64, h: f64) -> f64 {
    (f.evaluate(x + h) - f.evaluate(x - h)) / (2.0 * h)
}

/// Estimates `f''(x)` as `(f(x+h) - 2f(x) + f(x-h)) / h²`.
pub fn second_derivative<F: Objective + ?Sized>(f: &F, x: f64, h: f64) -> f64 {
    (f.evaluate(x + h) - 2.0 * f.evaluate(x) + f.evaluate(x - h)) / (h * h)
}
