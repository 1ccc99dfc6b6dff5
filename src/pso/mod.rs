//! Particle Swarm Optimization (PSO).
//!
//! A population of particles moves through the domain. Each particle's
//! velocity blends its previous velocity (inertia), a pull toward its own
//! best position (cognitive term), and a pull toward the swarm's best
//! position (social term). The global best is updated after every particle
//! move, so an improvement found early in a sweep already steers the
//! remaining particles of that sweep.
//!
//! The run always lasts the full iteration budget.
//!
//! # References
//!
//! - Kennedy & Eberhart (1995), "Particle Swarm Optimization"
//! - Shi & Eberhart (1998), "A Modified Particle Swarm Optimizer"

mod config;
mod runner;
mod types;

pub use config::{InertiaSchedule, PsoConfig};
pub use runner::ParticleSwarm;
pub use types::Particle;
