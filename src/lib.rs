//! Beehive - evolutionary search for short foraging tours.
//!
//! A colony of bees looks for the shortest closed tour that leaves the hive,
//! visits every flower exactly once and returns, a small travelling salesman
//! problem solved with a genetic algorithm.
//!
//! # Architecture
//!
//! The crate is split into three main modules:
//!
//! - `schema`: Problem, run and sweep configuration plus result records
//! - `compute`: Geometry and the evolutionary engine
//! - `export`: Statistics tables and JSON result files
//!
//! # Example
//!
//! ```rust,no_run
//! use beehive::{
//!     compute::evolution::sweep,
//!     schema::{Problem, RunConfig, SweepConfig},
//! };
//!
//! let problem = Problem::default();
//! let base = RunConfig {
//!     random_seed: Some(7),
//!     ..Default::default()
//! };
//!
//! let result = sweep(&problem, &base, &SweepConfig::default())?;
//! for run in &result.runs {
//!     println!("rate {}: {:.2}", run.mutation_rate, run.best.distance);
//! }
//! # Ok::<(), beehive::compute::evolution::EvolutionError>(())
//! ```

pub mod compute;
pub mod export;
pub mod schema;

// Re-export commonly used types
pub use compute::evolution::{EvolutionEngine, EvolutionError};
pub use schema::{ExperimentConfig, GenerationStat, Point, Problem, RunConfig, SweepConfig};
