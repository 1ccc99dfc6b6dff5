//! Colony state.

use crate::objective::Candidate;

/// Guards the pheromone deposit against division by zero fitness.
pub const PHEROMONE_EPSILON: f64 = 1e-4;

/// One member of the colony.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ant {
    /// Current position and its fitness.
    pub current: Candidate,

    /// Trail strength; scales the ant's step amplitude.
    pub pheromone: f64,
}

impl Ant {
    pub(crate) fn new(start: Candidate, pheromone: f64) -> Self {
        Self {
            current: start,
            pheromone,
        }
    }

    /// Greedy acceptance: moves only on strict improvement.
    ///
    /// Returns whether the ant moved.
    pub(crate) fn try_move(&mut self, proposal: Candidate) -> bool {
        if proposal.is_better_than(&self.current) {
            self.current = proposal;
            true
        } else {
            false
        }
    }

    /// Evaporates the trail and reinforces it from the ant's own fitness.
    pub(crate) fn update_pheromone(&mut self, evaporation: f64, deposit: f64) {
        self.pheromone = self.pheromone * (1.0 - evaporation)
            + deposit / (self.current.value + PHEROMONE_EPSILON);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(position: f64) -> Candidate {
        Candidate::evaluate(&|x: f64| x * x, position)
    }

    #[test]
    fn test_negative_fitness_gives_negative_trail() {
        let mut ant = Ant::new(Candidate::evaluate(&|x: f64| x * x - 2.0, 0.0), 1.0);
        ant.update_pheromone(0.5, 100.0);
        assert!(ant.pheromone < 0.0);
        assert!((ant.pheromone - (0.5 + 100.0 / (-2.0 + PHEROMONE_EPSILON))).abs() < 1e-9);
    }

    #[test]
    fn test_greedy_move() {
        let mut ant = Ant::new(candidate(2.0), 1.0);
        assert!(!ant.try_move(candidate(3.0)));
        assert_eq!(ant.current.position, 2.0);
        assert!(ant.try_move(candidate(-1.0)));
        assert_eq!(ant.current.position, -1.0);
        // Ties do not move the ant.
        assert!(!ant.try_move(candidate(1.0)));
    }

    #[test]
    fn test_pheromone_update() {
        let mut ant = Ant::new(candidate(1.0), 1.0);
        ant.update_pheromone(0.5, 100.0);
        let expected = 0.5 + 100.0 / (1.0 + PHEROMONE_EPSILON);
        assert!((ant.pheromone - expected).abs() < 1e-12);
    }

    #[test]
    fn test_pheromone_zero_fitness_is_finite() {
        let mut ant = Ant::new(candidate(0.0), 1.0);
        ant.update_pheromone(0.5, 1.0);
        assert!(ant.pheromone.is_finite());
        assert!((ant.pheromone - (0.5 + 1.0 / PHEROMONE_EPSILON)).abs() < 1e-6);
    }
}
