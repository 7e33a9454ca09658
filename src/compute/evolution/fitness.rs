//! Fitness evaluation: closed tour length from the hive through every flower.

use crate::compute::geometry::distance;
use crate::schema::{Point, Problem};

use super::EvolutionError;
use super::candidate::Candidate;
use super::tour::is_permutation;

/// Evaluates candidates against a fixed problem instance.
pub struct FitnessEvaluator {
    problem: Problem,
}

impl FitnessEvaluator {
    /// Create a new fitness evaluator.
    pub fn new(problem: Problem) -> Self {
        Self { problem }
    }

    pub fn problem(&self) -> &Problem {
        &self.problem
    }

    /// Compute and store `distance` and `fitness` on the candidate.
    ///
    /// Fails on tours that are not a permutation of the flower indices and on
    /// zero-length tours, where fitness would divide by zero.
    pub fn evaluate(&self, candidate: &mut Candidate) -> Result<f64, EvolutionError> {
        let n = self.problem.flower_count();
        if !is_permutation(&candidate.tour, n) {
            return Err(EvolutionError::InvalidTour {
                id: candidate.id,
                expected: n,
                found: candidate.tour.len(),
            });
        }

        let length = tour_length(&candidate.tour, &self.problem.flowers, self.problem.hive);
        if length <= 0.0 {
            return Err(EvolutionError::DegenerateTour { id: candidate.id });
        }

        let fitness = 1.0 / length;
        candidate.distance = Some(length);
        candidate.fitness = Some(fitness);
        Ok(fitness)
    }

    /// Evaluate only if the candidate has no fitness yet.
    pub fn ensure_evaluated(&self, candidate: &mut Candidate) -> Result<f64, EvolutionError> {
        match candidate.fitness {
            Some(fitness) => Ok(fitness),
            None => self.evaluate(candidate),
        }
    }
}

/// Length of hive -> flowers[tour[0]] -> ... -> flowers[tour[last]] -> hive.
pub fn tour_length(tour: &[usize], flowers: &[Point], hive: Point) -> f64 {
    let mut total = 0.0;
    let mut current = hive;
    for &idx in tour {
        let next = flowers[idx];
        total += distance(current, next);
        current = next;
    }
    total + distance(current, hive)
}
