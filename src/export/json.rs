//! JSON export of result records.

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::ExportError;

/// Pretty-print `value` to `path`.
pub fn write_json<P: AsRef<Path>, T: Serialize>(path: P, value: &T) -> Result<(), ExportError> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    Ok(())
}

/// Load a value written by [`write_json`].
pub fn read_json<P: AsRef<Path>, T: DeserializeOwned>(path: P) -> Result<T, ExportError> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{AncestryGraph, AncestryNode, CandidateSnapshot, RunResult};
    use tempfile::tempdir;

    #[test]
    fn test_run_result_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("run.json");

        let result = RunResult {
            mutation_rate: 0.25,
            seed: 42,
            history: vec![],
            best: CandidateSnapshot {
                id: 3,
                tour: vec![1, 0],
                distance: 8.0,
                fitness: 0.125,
                generation: 2,
                parents: vec![2],
            },
            ancestry: Some(AncestryGraph {
                root: 3,
                nodes: vec![AncestryNode::new(3, 2)],
                edges: vec![(2, 3)],
                missing: vec![2],
            }),
            candidates_created: 4,
        };

        write_json(&path, &result).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("\"label\": \"#3 (gen 2)\""));

        let loaded: RunResult = read_json(&path).unwrap();
        assert_eq!(loaded, result);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let result: Result<RunResult, _> = read_json(dir.path().join("absent.json"));
        assert!(matches!(result, Err(ExportError::Io(_))));
    }
}
