//! Gradient Descent (GD).
//!
//! First-order local descent on a finite-difference derivative:
//! `x ← x − η·f'(x)`. Stops when `|f'(x)|` drops below the tolerance or the
//! iteration cap is reached.
//!
//! A learning rate too large for the local curvature makes the iteration
//! diverge; that is reported as-is, not detected or corrected.
//!
//! # References
//!
//! - Cauchy (1847), "Méthode générale pour la résolution des systèmes
//!   d'équations simultanées"

mod config;
mod runner;

pub use config::GdConfig;
pub use runner::GradientDescent;
