//! Compute module - Geometry and evolutionary search.

pub mod evolution;
mod geometry;

pub use geometry::*;
