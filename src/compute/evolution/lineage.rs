//! Genealogy registry for every candidate created during a run.

use std::collections::{HashMap, HashSet};

use crate::schema::{AncestryGraph, AncestryNode};

use super::candidate::Candidate;

/// Lineage data kept for a registered candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct LineageEntry {
    pub id: u64,
    pub generation: usize,
    pub parents: Vec<u64>,
    pub tour: Vec<usize>,
    pub distance: Option<f64>,
}

impl From<&Candidate> for LineageEntry {
    fn from(candidate: &Candidate) -> Self {
        Self {
            id: candidate.id,
            generation: candidate.generation,
            parents: candidate.parents.clone(),
            tour: candidate.tour.clone(),
            distance: candidate.distance,
        }
    }
}

/// Registry of all candidates of a run, indexed by ID.
///
/// Outlives the population, so the ancestry of the final best candidate can
/// be rebuilt after its ancestors have been replaced.
#[derive(Debug, Default)]
pub struct Lineage {
    entries: HashMap<u64, LineageEntry>,
}

impl Lineage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a candidate. Re-registering an ID refreshes its entry.
    pub fn record(&mut self, candidate: &Candidate) {
        self.entries.insert(candidate.id, LineageEntry::from(candidate));
    }

    pub fn get(&self, id: u64) -> Option<&LineageEntry> {
        self.entries.get(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rebuild the ancestry of `id` by walking parent links.
    ///
    /// Uses an explicit stack and a visited set. Parent IDs absent from the
    /// registry end their branch and are listed in `missing`. An unknown root
    /// yields a graph with no nodes and the root in `missing`.
    pub fn ancestry_of(&self, id: u64) -> AncestryGraph {
        let mut graph = AncestryGraph {
            root: id,
            ..Default::default()
        };
        let mut visited = HashSet::new();
        let mut stack = vec![id];

        while let Some(current) = stack.pop() {
            if !visited.insert(current) {
                continue;
            }
            let Some(entry) = self.entries.get(&current) else {
                graph.missing.push(current);
                continue;
            };

            graph.nodes.push(AncestryNode::new(entry.id, entry.generation));
            for &parent in &entry.parents {
                graph.edges.push((parent, current));
                if !visited.contains(&parent) {
                    stack.push(parent);
                }
            }
        }

        graph
    }
}
