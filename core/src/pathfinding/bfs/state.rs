use super::super::utils::{ParentMap, reconstruct_path};
use crate::graph::CollaborationGraph;
use rustc_hash::FxHashMap;
use std::collections::{VecDeque, hash_map::Entry};

pub struct BfsState<'g> {
    graph: &'g CollaborationGraph,
    queue: VecDeque<(&'g str, usize)>,
    pub parent_map: ParentMap<'g>,
    pub depth: FxHashMap<&'g str, usize>,
    pub visit_order: Vec<(&'g str, usize)>,
    total_distance: usize,
}

impl<'g> BfsState<'g> {
    /// `start` must already be borrowed from `graph`.
    pub fn new(graph: &'g CollaborationGraph, start: &'g str) -> Self {
        let mut queue = VecDeque::new();
        let mut parent_map = FxHashMap::default();
        let mut depth = FxHashMap::default();

        queue.push_back((start, 0));
        parent_map.insert(start, None);
        depth.insert(start, 0);

        Self {
            graph,
            queue,
            parent_map,
            depth,
            visit_order: Vec::new(),
            total_distance: 0,
        }
    }

    pub fn visited_count(&self) -> usize {
        self.parent_map.len()
    }

    /// Running mean over every node dequeued so far.
    pub fn mean_distance(&self) -> f64 {
        if self.visit_order.is_empty() {
            0.0
        } else {
            self.total_distance as f64 / self.visit_order.len() as f64
        }
    }

    // Marked on enqueue so each node enters the queue once.
    fn visit_neighbor(&mut self, neighbor: &'g str, current: &'g str, distance: usize) {
        if let Entry::Vacant(slot) = self.parent_map.entry(neighbor) {
            slot.insert(Some(current));
            self.depth.insert(neighbor, distance);
            self.queue.push_back((neighbor, distance));
        }
    }

    /// Dequeues one node, records its distance and enqueues its unvisited
    /// neighbors.
    fn step(&mut self) -> Option<&'g str> {
        let (current, distance) = self.queue.pop_front()?;

        self.visit_order.push((current, distance));
        self.total_distance += distance;

        let graph = self.graph;
        for neighbor in graph.neighbor_names(current) {
            self.visit_neighbor(neighbor, current, distance + 1);
        }

        Some(current)
    }

    pub fn run_to_completion(&mut self) {
        while self.step().is_some() {}
    }

    pub fn find_path_to_target(&mut self, target: &str) -> Option<Vec<&'g str>> {
        while let Some(current) = self.step() {
            if current == target {
                return Some(reconstruct_path(&self.parent_map, current));
            }
        }

        None
    }
}
