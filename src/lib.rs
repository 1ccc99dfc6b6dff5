//! Scalar function minimization toolkit.
//!
//! Provides five independent strategies for locating an approximate
//! minimizer of a one-dimensional objective `f: ℝ → ℝ`:
//!
//! - **Gradient Descent (GD)**: first-order local descent driven by a
//!   finite-difference derivative.
//! - **Newton's method**: second-order root finding on the derivative,
//!   with a curvature guard.
//! - **Simulated Annealing (SA)**: single-point stochastic search with
//!   Metropolis acceptance under a geometric cooling schedule.
//! - **Particle Swarm Optimization (PSO)**: population search with
//!   velocity/position dynamics and a shared global best.
//! - **Ant Colony Optimization (ACO)**: population search where each ant's
//!   pheromone level scales its step amplitude.
//!
//! # Architecture
//!
//! Every solver implements [`Optimizer`], so callers can pick a strategy at
//! runtime and drive it through one interface. Stochastic solvers own their
//! random generator: seed it through the config for reproducible runs, or
//! inject one with `with_rng`.
//!
//! ```
//! use u_scalarmin::{Bounds, Optimizer};
//! use u_scalarmin::pso::{ParticleSwarm, PsoConfig};
//!
//! let bounds = Bounds::new(-10.0, 10.0).unwrap();
//! let config = PsoConfig::default().with_bounds(bounds).with_seed(7);
//! let mut swarm = ParticleSwarm::new(|x: f64| x * x - 2.0, config).unwrap();
//! let result = swarm.run();
//! assert!(result.best.position.abs() < 0.1);
//! ```

pub mod aco;
pub mod diff;
pub mod error;
pub mod gd;
pub mod newton;
pub mod objective;
pub mod optimizer;
pub mod pso;
pub mod random;
pub mod sa;

pub use error::ConfigError;
pub use objective::{Bounds, Candidate, Objective};
pub use optimizer::{OptimizeResult, Optimizer, Termination};
