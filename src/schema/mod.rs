//! Schema module - Configuration and result types for beehive runs.

mod config;
mod evolution;

pub use config::*;
pub use evolution::*;
