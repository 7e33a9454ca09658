//! Tour manipulation utilities for evolutionary search.
//!
//! Provides random generation, order crossover, and swap mutation over
//! permutations of flower indices.

use rand::prelude::*;
use rand::seq::index;

/// Random number generator wrapper for tour operations.
pub struct TourRng {
    rng: StdRng,
}

impl TourRng {
    /// Create from seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create with random seed.
    pub fn random() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Uniformly random permutation of `0..n`.
    pub fn random_tour(&mut self, n: usize) -> Vec<usize> {
        let mut tour: Vec<usize> = (0..n).collect();
        tour.shuffle(&mut self.rng);
        tour
    }

    /// Two distinct positions in `0..n`, in ascending order.
    ///
    /// Requires `n >= 2`.
    pub fn cut_points(&mut self, n: usize) -> (usize, usize) {
        let picked = index::sample(&mut self.rng, n, 2);
        let (a, b) = (picked.index(0), picked.index(1));
        (a.min(b), a.max(b))
    }

    /// Order crossover with random cut points.
    ///
    /// Tours shorter than 2 have no distinct cut points and are copied from
    /// `parent1`.
    pub fn crossover(&mut self, parent1: &[usize], parent2: &[usize]) -> Vec<usize> {
        if parent1.len() < 2 {
            return parent1.to_vec();
        }
        let (start, end) = self.cut_points(parent1.len());
        order_crossover(parent1, parent2, start, end)
    }

    /// With probability `rate`, swap two distinct random positions.
    ///
    /// Returns whether a swap happened.
    pub fn swap_mutate(&mut self, tour: &mut [usize], rate: f64) -> bool {
        if tour.len() < 2 || self.rng.r#gen::<f64>() >= rate {
            return false;
        }
        let (i, j) = self.cut_points(tour.len());
        tour.swap(i, j);
        true
    }

    /// Two distinct indices into a slice of length `n`, in draw order.
    ///
    /// Requires `n >= 2`.
    pub fn distinct_pair(&mut self, n: usize) -> (usize, usize) {
        let picked = index::sample(&mut self.rng, n, 2);
        (picked.index(0), picked.index(1))
    }

    /// Generate next u64 for seeding child RNGs.
    pub fn next_seed(&mut self) -> u64 {
        self.rng.r#gen()
    }
}

/// Order crossover (OX) with explicit cut points `start < end`.
///
/// `parent1[start..end]` is copied into the child verbatim. The remaining
/// positions are filled with the genes of `parent2` not yet placed, in
/// `parent2` order, starting at `end` and wrapping around to 0. Filled
/// positions are skipped, so the child is a permutation whenever both
/// parents are permutations of the same set.
pub fn order_crossover(
    parent1: &[usize],
    parent2: &[usize],
    start: usize,
    end: usize,
) -> Vec<usize> {
    let n = parent1.len();
    debug_assert!(start < end && end <= n);

    let mut child: Vec<Option<usize>> = vec![None; n];
    let mut placed = vec![false; n];
    for pos in start..end {
        let gene = parent1[pos];
        child[pos] = Some(gene);
        placed[gene] = true;
    }

    let mut pos = end % n;
    for &gene in parent2 {
        if placed[gene] {
            continue;
        }
        while child[pos].is_some() {
            pos = (pos + 1) % n;
        }
        child[pos] = Some(gene);
        placed[gene] = true;
    }

    child.into_iter().flatten().collect()
}

/// Whether `tour` is a permutation of `0..n`.
pub fn is_permutation(tour: &[usize], n: usize) -> bool {
    if tour.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &gene in tour {
        if gene >= n || seen[gene] {
            return false;
        }
        seen[gene] = true;
    }
    true
}
