//! Population-level operators: creation, selection, crossover and mutation.
//!
//! Every operator that produces a candidate allocates a fresh ID from the
//! run's [`IdAllocator`]; parents are never modified.

use std::cmp::Ordering;

use super::candidate::{Candidate, IdAllocator};
use super::tour::TourRng;

/// Build `size` generation-0 candidates with uniformly random tours over
/// `flower_count` flowers.
pub fn create_population(
    size: usize,
    flower_count: usize,
    rng: &mut TourRng,
    ids: &mut IdAllocator,
) -> Vec<Candidate> {
    (0..size)
        .map(|_| Candidate::founder(ids.allocate(), rng.random_tour(flower_count)))
        .collect()
}

/// Sort by descending fitness; equal fitness is broken by ascending ID.
pub fn rank(population: &mut [Candidate]) {
    population.sort_by(compare_ranked);
}

fn compare_ranked(a: &Candidate, b: &Candidate) -> Ordering {
    b.rank_fitness()
        .total_cmp(&a.rank_fitness())
        .then_with(|| a.id.cmp(&b.id))
}

/// Elitist truncation: the first `floor(len * proportion)` candidates of an
/// already ranked population.
pub fn select(population: &[Candidate], proportion: f64) -> &[Candidate] {
    let size = (population.len() as f64 * proportion).floor() as usize;
    &population[..size.min(population.len())]
}

/// Order crossover producing one child of `parent1` and `parent2`.
pub fn crossover(
    parent1: &Candidate,
    parent2: &Candidate,
    rng: &mut TourRng,
    ids: &mut IdAllocator,
) -> Candidate {
    let tour = rng.crossover(&parent1.tour, &parent2.tour);
    Candidate::offspring(ids.allocate(), tour, &[parent1, parent2])
}

/// Swap mutation with probability `rate`.
///
/// Always returns a new candidate with `candidate` as its only parent, even
/// when no swap happened.
pub fn mutate(
    candidate: &Candidate,
    rate: f64,
    rng: &mut TourRng,
    ids: &mut IdAllocator,
) -> Candidate {
    let mut tour = candidate.tour.clone();
    rng.swap_mutate(&mut tour, rate);
    Candidate::offspring(ids.allocate(), tour, &[candidate])
}
