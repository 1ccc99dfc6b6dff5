//! PSO execution loop.

use super::config::PsoConfig;
use super::types::Particle;
use crate::error::ConfigError;
use crate::objective::{Candidate, Objective};
use crate::optimizer::{history_buffer, Counted, OptimizeResult, Optimizer, Termination};
use crate::random::create_rng;
use rand::rngs::StdRng;
use rand::Rng;
use tracing::{debug, trace};

/// Particle Swarm solver.
pub struct ParticleSwarm<F, R = StdRng> {
    objective: F,
    config: PsoConfig,
    rng: R,
    swarm: Vec<Particle>,
    best: Option<Candidate>,
}

impl<F: Objective> ParticleSwarm<F> {
    /// Creates a solver seeded from `config.seed`.
    pub fn new(objective: F, config: PsoConfig) -> Result<Self, ConfigError> {
        let rng = create_rng(config.seed);
        Self::with_rng(objective, config, rng)
    }
}

impl<F: Objective, R: Rng> ParticleSwarm<F, R> {
    /// Creates a solver drawing from a caller-supplied generator.
    ///
    /// `config.seed` is ignored.
    pub fn with_rng(objective: F, config: PsoConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            objective,
            swarm: Vec::with_capacity(config.particles),
            config,
            rng,
            best: None,
        })
    }

    pub fn config(&self) -> &PsoConfig {
        &self.config
    }

    /// Swarm state at the end of the most recent run.
    pub fn particles(&self) -> &[Particle] {
        &self.swarm
    }
}

impl<F: Objective, R: Rng> Optimizer for ParticleSwarm<F, R> {
    fn name(&self) -> &'static str {
        "particle-swarm"
    }

    fn run_observed(&mut self, observer: &mut dyn FnMut(&Candidate)) -> OptimizeResult {
        let config = &self.config;
        let rng = &mut self.rng;
        let f = Counted::new(&self.objective);
        let bounds = config.bounds;

        // 1. Scatter the swarm: uniform positions, velocities in [0, 1).
        let swarm = &mut self.swarm;
        swarm.clear();
        for _ in 0..config.particles {
            let start = Candidate::evaluate(&f, bounds.sample(rng));
            observer(&start);
            swarm.push(Particle::new(start, rng.random::<f64>()));
        }

        // 2. Global best over the initial swarm.
        let mut global = swarm[0].best;
        for particle in swarm.iter().skip(1) {
            if particle.best.is_better_than(&global) {
                global = particle.best;
            }
        }

        let mut history = history_buffer(config.max_iterations);
        history.push(global.value);

        debug!(
            particles = config.particles,
            max_iterations = config.max_iterations,
            inertia = ?config.inertia,
            "particle swarm started"
        );

        // 3. Sweeps
        for iteration in 0..config.max_iterations {
            let w = config
                .inertia
                .weight(iteration, config.max_iterations, config.w_max, config.w_min);

            for particle in swarm.iter_mut() {
                let x = particle.current.position;
                let r1 = rng.random::<f64>();
                let r2 = rng.random::<f64>();
                particle.velocity = w * particle.velocity
                    + config.c1 * r1 * (particle.best.position - x)
                    + config.c2 * r2 * (global.position - x);

                let next = Candidate::evaluate(&f, bounds.clamp(x + particle.velocity));
                observer(&next);
                particle.move_to(next);

                // Updated per particle, not per sweep.
                if next.is_better_than(&global) {
                    global = next;
                }
            }

            history.push(global.value);
            trace!(iteration, w, best = global.value, "pso sweep done");
        }

        let evaluations = f.calls();
        debug!(
            evaluations,
            position = global.position,
            value = global.value,
            "particle swarm finished"
        );

        self.best = Some(global);
        OptimizeResult {
            best: global,
            iterations: config.max_iterations,
            evaluations,
            termination: Termination::MaxIterations,
            history,
        }
    }

    fn best(&self) -> Option<Candidate> {
        self.best
    }
}
