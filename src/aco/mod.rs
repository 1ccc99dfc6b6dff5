//! Ant Colony Optimization (ACO) for a continuous scalar domain.
//!
//! Each ant carries its own pheromone level, which scales the amplitude of
//! its random steps: `x' = x + U(−1, 1) · width · τ`. Moves are accepted
//! greedily. After every sweep each trail evaporates and is reinforced by
//! the ant's own fitness, `τ ← τ(1 − ρ) + q / (fitness + ε)`.
//!
//! Trails are per ant, not laid on shared edges as in combinatorial ACO:
//! an ant's pheromone reflects only its own search history.
//!
//! # References
//!
//! - Dorigo, Maniezzo & Colorni (1996), "Ant System: Optimization by a
//!   Colony of Cooperating Agents"
//! - Socha & Dorigo (2008), "Ant colony optimization for continuous domains"

mod config;
mod runner;
mod types;

pub use config::{AcoConfig, ConvergenceCheck};
pub use runner::AntColony;
pub use types::{Ant, PHEROMONE_EPSILON};
