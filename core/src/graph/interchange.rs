use super::CollaborationGraph;
use crate::error::{CoreError, Result};
use crate::files::read_json_file;
use std::{
    collections::BTreeMap,
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

/// JSON interchange form: person name to a sorted, deduplicated list of
/// collaborators.
pub type AdjacencyLists = BTreeMap<String, Vec<String>>;

impl CollaborationGraph {
    /// Adjacency lists for the first `limit` nodes in name order, or every
    /// node when `limit` is `None`.
    ///
    /// A capped export still lists neighbors that fall outside the cap.
    pub fn to_adjacency_lists(&self, limit: Option<usize>) -> AdjacencyLists {
        let mut names: Vec<&String> = self.adjacency.keys().collect();
        names.sort_unstable();
        names.truncate(limit.unwrap_or(usize::MAX));

        names
            .into_iter()
            .map(|name| {
                let mut neighbors: Vec<String> = self.adjacency[name].iter().cloned().collect();
                neighbors.sort_unstable();
                (name.clone(), neighbors)
            })
            .collect()
    }

    /// Rebuilds a graph from adjacency lists.
    ///
    /// Every listed neighbor gets the reverse edge, so lists that only cover
    /// part of a graph still load as an undirected graph.
    pub fn from_adjacency_lists<I>(lists: I) -> Self
    where
        I: IntoIterator<Item = (String, Vec<String>)>,
    {
        let mut graph = CollaborationGraph::new();
        for (name, neighbors) in lists {
            graph.add_node(&name);
            for neighbor in neighbors {
                graph.add_edge(&name, &neighbor);
            }
        }
        graph
    }
}

/// Writes `graph` as JSON adjacency lists and returns how many nodes were
/// written.
pub fn save_graph(output_path: &Path, graph: &CollaborationGraph, limit: Option<usize>) -> Result<usize> {
    let lists = graph.to_adjacency_lists(limit);

    let file = File::create(output_path).map_err(|e| CoreError::io(e, output_path))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, &lists).map_err(|e| CoreError::json(e, output_path))?;
    writer.flush().map_err(|e| CoreError::io(e, output_path))?;

    tracing::debug!(
        path = %output_path.display(),
        nodes = lists.len(),
        total_nodes = graph.node_count(),
        "saved graph"
    );
    Ok(lists.len())
}

pub fn load_graph(graph_path: &Path) -> Result<CollaborationGraph> {
    let lists: AdjacencyLists = read_json_file(graph_path)?;
    let listed_nodes = lists.len();
    let graph = CollaborationGraph::from_adjacency_lists(lists);

    tracing::debug!(
        path = %graph_path.display(),
        listed_nodes,
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "loaded graph"
    );
    Ok(graph)
}
