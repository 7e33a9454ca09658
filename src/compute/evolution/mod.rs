//! Evolutionary search for short foraging tours.
//!
//! A bee is a [`Candidate`]: a tour visiting every flower once between two
//! stops at the hive. The engine evolves a population of bees with elitist
//! truncation, order crossover and swap mutation, and records every bee it
//! creates so the ancestry of the final best tour can be rebuilt.
//!
//! # Overview
//!
//! - **Candidates** (`candidate`): tours, lineage metadata, per-run IDs
//! - **Tour Operations** (`tour`): seeded random tours, crossover, mutation
//! - **Fitness** (`fitness`): closed tour length and `1 / distance`
//! - **Operators** (`operators`): population creation, ranking, selection
//! - **Lineage** (`lineage`): genealogy registry and ancestry graphs
//! - **Engine** (`engine`): the generational loop for one configuration
//! - **Sweep** (`sweep`): one run per mutation rate
//!
//! # Example
//!
//! ```rust,no_run
//! use beehive::schema::{Problem, RunConfig};
//! use beehive::compute::evolution::EvolutionEngine;
//!
//! let config = RunConfig {
//!     random_seed: Some(42),
//!     ..Default::default()
//! };
//!
//! let mut engine = EvolutionEngine::new(Problem::default(), config)?;
//! let result = engine.run_with_callback(|stat| {
//!     println!("Generation {}: best distance = {:.2}",
//!         stat.generation, stat.best_distance);
//! })?;
//!
//! println!("Best tour: {:?} ({:.2})", result.best.tour, result.best.distance);
//! # Ok::<(), beehive::compute::evolution::EvolutionError>(())
//! ```

mod candidate;
mod engine;
mod fitness;
mod lineage;
mod operators;
mod sweep;
mod tour;

pub use candidate::{Candidate, IdAllocator};
pub use engine::EvolutionEngine;
pub use fitness::{FitnessEvaluator, tour_length};
pub use lineage::{Lineage, LineageEntry};
pub use operators::{create_population, crossover, mutate, rank, select};
pub use sweep::{sweep, sweep_with_callback};
pub use tour::{TourRng, is_permutation, order_crossover};

use crate::schema::ConfigError;

/// Errors that abort an evolutionary run.
#[derive(Debug, thiserror::Error)]
pub enum EvolutionError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("Candidate {id} has a zero-length tour")]
    DegenerateTour { id: u64 },
    #[error("Candidate {id} tour is not a permutation of {expected} flowers (length {found})")]
    InvalidTour {
        id: u64,
        expected: usize,
        found: usize,
    },
    #[error("Candidate {id} was ranked before being evaluated")]
    Unevaluated { id: u64 },
    #[error("Population is empty")]
    EmptyPopulation,
}
