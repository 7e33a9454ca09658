//! Result records produced by evolutionary runs.
//!
//! These are the artifacts consumed outside the engine: the per-generation
//! statistics series, the final best candidate, and its ancestry graph.

use serde::{Deserialize, Serialize};

/// Statistics recorded once per generation, after ranking.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationStat {
    /// Generation index, starting at 0.
    pub generation: usize,
    /// Tour length of the best candidate.
    pub best_distance: f64,
    /// Fitness of the best candidate.
    pub best_fitness: f64,
    /// Mean fitness over the whole population.
    pub average_fitness: f64,
}

/// Exported view of a candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateSnapshot {
    /// Unique identifier within the run.
    pub id: u64,
    /// Visiting order of flower indices.
    pub tour: Vec<usize>,
    /// Closed tour length from and back to the hive.
    pub distance: f64,
    /// `1 / distance`.
    pub fitness: f64,
    /// Lineage depth.
    pub generation: usize,
    /// Parent IDs (for genealogy).
    pub parents: Vec<u64>,
}

/// A node of an ancestry graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AncestryNode {
    pub id: u64,
    pub generation: usize,
    /// Display label, `#id (gen g)`.
    pub label: String,
}

impl AncestryNode {
    pub fn new(id: u64, generation: usize) -> Self {
        Self {
            id,
            generation,
            label: format!("#{id} (gen {generation})"),
        }
    }
}

/// Ancestry of one candidate as a directed graph of `parent -> child` edges.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AncestryGraph {
    /// Candidate the traversal started from.
    pub root: u64,
    /// Every visited candidate, in traversal order.
    pub nodes: Vec<AncestryNode>,
    /// `(parent_id, child_id)` pairs.
    pub edges: Vec<(u64, u64)>,
    /// Parent IDs referenced by a visited candidate but absent from the registry.
    pub missing: Vec<u64>,
}

impl AncestryGraph {
    pub fn node(&self, id: u64) -> Option<&AncestryNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn contains(&self, id: u64) -> bool {
        self.node(id).is_some()
    }

    /// IDs of the generation-0 candidates the root descends from.
    pub fn founders(&self) -> Vec<u64> {
        self.nodes
            .iter()
            .filter(|n| n.generation == 0)
            .map(|n| n.id)
            .collect()
    }
}

/// Outcome of one evolutionary run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunResult {
    /// Mutation rate the run used.
    pub mutation_rate: f64,
    /// Seed the run's random source was created from.
    pub seed: u64,
    /// One entry per generation, in generation order.
    pub history: Vec<GenerationStat>,
    /// Best candidate after the final ranking.
    pub best: CandidateSnapshot,
    /// Ancestry of `best`, when tracked.
    pub ancestry: Option<AncestryGraph>,
    /// Total number of candidates created during the run.
    pub candidates_created: u64,
}

/// Outcome of a mutation-rate sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepResult {
    /// Rate whose run carries ancestry.
    pub primary_rate: Option<f64>,
    /// One run per rate, in the order the rates were given.
    pub runs: Vec<RunResult>,
}

impl SweepResult {
    /// Look up the run for a mutation rate.
    pub fn get(&self, rate: f64) -> Option<&RunResult> {
        self.runs.iter().find(|r| r.mutation_rate == rate)
    }

    /// The primary run, if one was designated.
    pub fn primary(&self) -> Option<&RunResult> {
        self.primary_rate.and_then(|rate| self.get(rate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_label() {
        let node = AncestryNode::new(42, 7);
        assert_eq!(node.label, "#42 (gen 7)");
    }

    #[test]
    fn test_founders() {
        let graph = AncestryGraph {
            root: 3,
            nodes: vec![
                AncestryNode::new(3, 1),
                AncestryNode::new(1, 0),
                AncestryNode::new(2, 0),
            ],
            edges: vec![(1, 3), (2, 3)],
            missing: vec![],
        };
        assert_eq!(graph.founders(), vec![1, 2]);
        assert!(graph.contains(2));
        assert!(!graph.contains(9));
    }
}
