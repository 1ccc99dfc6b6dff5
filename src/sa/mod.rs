//! Simulated Annealing (SA).
//!
//! A single-point trajectory search inspired by physical annealing.
//! Worse proposals are accepted with the Metropolis probability
//! `exp(−Δ/T)`, which shrinks as the temperature cools geometrically,
//! letting the search escape local minima early and settle late.
//!
//! The proposal amplitude is `width · exp(−T/1000)`: proposals start at
//! roughly a third of the domain at `T = 1000` and widen as the
//! temperature falls.
//!
//! There is no tolerance-based early exit: a run ends when the schedule
//! is exhausted or the optional evaluation budget is spent.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Metropolis et al. (1953), "Equation of State Calculations by Fast
//!   Computing Machines"

mod config;
mod runner;

pub use config::SaConfig;
pub use runner::{SaStats, SimulatedAnnealing};
