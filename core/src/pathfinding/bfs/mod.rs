mod state;

use super::utils::{ParentMap, PathResult, PathSearch, reconstruct_path};
use crate::error::{CoreError, Result};
use crate::graph::CollaborationGraph;
use rustc_hash::FxHashMap;
use state::BfsState;
use std::time::Instant;

/// Result of a full breadth-first traversal from one root.
#[derive(Debug, Clone)]
pub struct BfsTree<'g> {
    root: &'g str,
    parent: ParentMap<'g>,
    depth: FxHashMap<&'g str, usize>,
    visit_order: Vec<(&'g str, usize)>,
    mean_distance: f64,
}

impl<'g> BfsTree<'g> {
    pub fn root(&self) -> &'g str {
        self.root
    }

    /// Parent pointers of every reached node; the root maps to `None`.
    pub fn parents(&self) -> &ParentMap<'g> {
        &self.parent
    }

    pub fn parent(&self, name: &str) -> Option<Option<&'g str>> {
        self.parent.get(name).copied()
    }

    pub fn reaches(&self, name: &str) -> bool {
        self.parent.contains_key(name)
    }

    pub fn reached_count(&self) -> usize {
        self.visit_order.len()
    }

    /// Hop distances of reached nodes in the order they were dequeued.
    pub fn distances(&self) -> Vec<usize> {
        self.visit_order.iter().map(|&(_, distance)| distance).collect()
    }

    /// Reached nodes paired with their distance, in dequeue order.
    pub fn visit_order(&self) -> &[(&'g str, usize)] {
        &self.visit_order
    }

    pub fn distance_to(&self, name: &str) -> Option<usize> {
        self.depth.get(name).copied()
    }

    /// Mean hop distance over every reached node, the root included.
    pub fn mean_distance(&self) -> f64 {
        self.mean_distance
    }

    pub fn mean_distance_rounded(&self) -> f64 {
        (self.mean_distance * 1000.0).round() / 1000.0
    }

    /// Eccentricity of the root within its component.
    pub fn max_distance(&self) -> usize {
        self.visit_order
            .iter()
            .map(|&(_, distance)| distance)
            .max()
            .unwrap_or(0)
    }

    pub fn path_to(&self, target: &str) -> PathResult<'g> {
        match self.parent.get_key_value(target) {
            Some((&target, _)) => PathResult::Found(reconstruct_path(&self.parent, target)),
            None => PathResult::NoPath,
        }
    }
}

fn resolve_node<'g>(graph: &'g CollaborationGraph, name: &str) -> Result<&'g str> {
    graph
        .node_key(name)
        .ok_or_else(|| CoreError::NodeNotFound(name.to_string()))
}

/// Traverses everything reachable from `start`.
pub fn bfs<'g>(graph: &'g CollaborationGraph, start: &str) -> Result<BfsTree<'g>> {
    let root = resolve_node(graph, start)?;

    let mut bfs_state = BfsState::new(graph, root);
    bfs_state.run_to_completion();

    let mean_distance = bfs_state.mean_distance();
    Ok(BfsTree {
        root,
        parent: bfs_state.parent_map,
        depth: bfs_state.depth,
        visit_order: bfs_state.visit_order,
        mean_distance,
    })
}

/// Shortest path by hop count from `start` to `end`.
///
/// When several shortest paths exist, which one comes back depends on
/// neighbor iteration order.
pub fn shortest_path<'g>(graph: &'g CollaborationGraph, start: &str, end: &str) -> Result<PathResult<'g>> {
    resolve_node(graph, start)?;
    resolve_node(graph, end)?;

    Ok(bfs(graph, start)?.path_to(end))
}

/// Like [`shortest_path`], but stops as soon as `end` is dequeued and
/// reports search statistics.
pub fn bfs_find_path<'g>(graph: &'g CollaborationGraph, start: &str, end: &str) -> Result<PathSearch<'g>> {
    let search_timer = Instant::now();

    let root = resolve_node(graph, start)?;
    resolve_node(graph, end)?;

    let mut bfs_state = BfsState::new(graph, root);
    let result = match bfs_state.find_path_to_target(end) {
        Some(path) => PathResult::Found(path),
        None => PathResult::NoPath,
    };

    Ok(PathSearch {
        result,
        nodes_visited: bfs_state.visited_count(),
        elapsed_secs: search_timer.elapsed().as_secs_f64(),
    })
}
