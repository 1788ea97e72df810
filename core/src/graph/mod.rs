pub mod interchange;

use crate::graph_config::GraphConfig;
use crate::records::{Record, RecordField};
use rustc_hash::{FxHashMap, FxHashSet};

pub use interchange::{AdjacencyLists, load_graph, save_graph};

pub type Neighbors = FxHashSet<String>;

/// Undirected co-credit graph keyed by person name.
///
/// Names are case-sensitive and kept exactly as credited. The adjacency
/// relation is symmetric: every edge is stored on both endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollaborationGraph {
    adjacency: FxHashMap<String, Neighbors>,
}

impl CollaborationGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the graph for `field` with default options.
    pub fn from_records<'a, I>(records: I, field: RecordField) -> Self
    where
        I: IntoIterator<Item = &'a Record>,
    {
        build_graph(records, field, &GraphConfig::default())
    }

    /// Folds one record's co-credits into the graph.
    pub fn merge_record(&mut self, record: &Record, field: RecordField, config: &GraphConfig) {
        let members = record.members(field);

        for &name in &members {
            let neighbors = self.adjacency.entry(name.to_string()).or_default();
            for &other in &members {
                if other != name || config.self_loops {
                    neighbors.insert(other.to_string());
                }
            }
        }
    }

    /// Inserts `a`-`b` on both endpoints. `a == b` stores a single self-loop.
    pub fn add_edge(&mut self, a: &str, b: &str) {
        self.adjacency
            .entry(a.to_string())
            .or_default()
            .insert(b.to_string());
        self.adjacency
            .entry(b.to_string())
            .or_default()
            .insert(a.to_string());
    }

    /// Inserts a node with no collaborators, keeping existing edges.
    pub fn add_node(&mut self, name: &str) {
        self.adjacency.entry(name.to_string()).or_default();
    }

    pub fn contains(&self, name: &str) -> bool {
        self.adjacency.contains_key(name)
    }

    pub fn neighbors(&self, name: &str) -> Option<&Neighbors> {
        self.adjacency.get(name)
    }

    /// The graph's own copy of `name`, so lookups can borrow from the graph
    /// rather than from the caller's query string.
    pub(crate) fn node_key(&self, name: &str) -> Option<&str> {
        self.adjacency
            .get_key_value(name)
            .map(|(key, _)| key.as_str())
    }

    pub(crate) fn neighbor_names<'g>(&'g self, name: &str) -> impl Iterator<Item = &'g str> + use<'g> {
        self.adjacency
            .get(name)
            .into_iter()
            .flat_map(|neighbors| neighbors.iter().map(String::as_str))
    }

    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Neighbors)> {
        self.adjacency
            .iter()
            .map(|(name, neighbors)| (name.as_str(), neighbors))
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Undirected edge count; a self-loop counts once.
    pub fn edge_count(&self) -> usize {
        let mut endpoints = 0;
        let mut loops = 0;

        for (name, neighbors) in &self.adjacency {
            endpoints += neighbors.len();
            if neighbors.contains(name) {
                loops += 1;
            }
        }

        (endpoints - loops) / 2 + loops
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}

/// Builds the co-credit graph of `field` over `records`.
///
/// Cost is quadratic in the size of each record's credit list.
pub fn build_graph<'a, I>(records: I, field: RecordField, config: &GraphConfig) -> CollaborationGraph
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut graph = CollaborationGraph::new();
    for record in records {
        graph.merge_record(record, field, config);
    }
    graph
}
