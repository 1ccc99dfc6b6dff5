//! Newton's method for minimization.
//!
//! Finds a stationary point by applying Newton root finding to the
//! derivative: `x ← x − f'(x)/f''(x)`, with both derivatives estimated by
//! central differences.
//!
//! Stops on a step smaller than the tolerance, on near-zero curvature
//! (without dividing by it), or at the iteration cap.

mod config;
mod runner;

pub use config::NewtonConfig;
pub use runner::Newton;
