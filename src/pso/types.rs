//! Swarm state.

use crate::objective::Candidate;

/// One member of the swarm.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Current position and its objective value.
    pub current: Candidate,

    /// Current velocity.
    pub velocity: f64,

    /// Best candidate this particle has visited.
    pub best: Candidate,
}

impl Particle {
    pub(crate) fn new(start: Candidate, velocity: f64) -> Self {
        Self {
            current: start,
            velocity,
            best: start,
        }
    }

    /// Moves to `next`, updating the personal best on strict improvement.
    pub(crate) fn move_to(&mut self, next: Candidate) {
        self.current = next;
        if next.is_better_than(&self.best) {
            self.best = next;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(position: f64) -> Candidate {
        Candidate::evaluate(&|x: f64| x * x, position)
    }

    #[test]
    fn test_move_keeps_personal_best() {
        let mut p = Particle::new(candidate(1.0), 0.5);
        p.move_to(candidate(3.0));
        assert_eq!(p.current.position, 3.0);
        assert_eq!(p.best.position, 1.0);

        p.move_to(candidate(0.5));
        assert_eq!(p.best.position, 0.5);
    }
}
