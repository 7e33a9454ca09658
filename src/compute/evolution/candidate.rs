//! Candidate individuals and their identifiers.

use crate::schema::CandidateSnapshot;

/// Allocates candidate IDs for one run.
///
/// Each run owns its allocator, so IDs are unique and increasing within a
/// run and never shared between the runs of a sweep.
#[derive(Debug, Default)]
pub struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand out the next unused ID.
    pub fn allocate(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }

    /// Number of IDs handed out so far.
    pub fn allocated(&self) -> u64 {
        self.next
    }
}

/// A candidate individual in the population: one tour plus lineage.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    /// Unique identifier.
    pub id: u64,
    /// Permutation of flower indices.
    pub tour: Vec<usize>,
    /// Closed tour length, `None` until evaluated.
    pub distance: Option<f64>,
    /// `1 / distance`, `None` until evaluated.
    pub fitness: Option<f64>,
    /// Lineage depth: 0 for founders, else one more than the deepest parent.
    pub generation: usize,
    /// Parent IDs.
    pub parents: Vec<u64>,
}

impl Candidate {
    /// A generation-0 candidate with no parents.
    pub fn founder(id: u64, tour: Vec<usize>) -> Self {
        Self {
            id,
            tour,
            distance: None,
            fitness: None,
            generation: 0,
            parents: Vec::new(),
        }
    }

    /// A candidate descended from `parents`.
    pub fn offspring(id: u64, tour: Vec<usize>, parents: &[&Candidate]) -> Self {
        let generation = parents
            .iter()
            .map(|p| p.generation + 1)
            .max()
            .unwrap_or(0);

        Self {
            id,
            tour,
            distance: None,
            fitness: None,
            generation,
            parents: parents.iter().map(|p| p.id).collect(),
        }
    }

    #[inline]
    pub fn is_evaluated(&self) -> bool {
        self.fitness.is_some()
    }

    /// Fitness used for ranking; unevaluated candidates rank last.
    #[inline]
    pub fn rank_fitness(&self) -> f64 {
        self.fitness.unwrap_or(f64::NEG_INFINITY)
    }

    /// Convert to snapshot for serialization.
    pub fn to_snapshot(&self) -> CandidateSnapshot {
        CandidateSnapshot {
            id: self.id,
            tour: self.tour.clone(),
            distance: self.distance.unwrap_or(f64::NAN),
            fitness: self.fitness.unwrap_or(f64::NAN),
            generation: self.generation,
            parents: self.parents.clone(),
        }
    }
}
