//! Export module - Files consumed by dashboards and comparison tooling.
//!
//! - `stats`: the per-generation statistics table
//! - `json`: pretty-printed run and sweep results

mod json;
mod stats;

pub use json::*;
pub use stats::*;

/// Errors raised while writing or reading exported files.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
