//! Single-source shortest paths over positive edge weights.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::types::Weight;

use super::DirectedGraph;

/// Dijkstra distances from `source` to every vertex.
///
/// Entry `i` is `Some(distance)` if vertex `i` is reachable and `None`
/// otherwise. An absent source yields an empty vector. Distances saturate at
/// `Weight::MAX` instead of overflowing.
pub fn shortest_paths(graph: &DirectedGraph, source: usize) -> Vec<Option<Weight>> {
    let count = graph.vertex_count();
    if source >= count {
        log::debug!("shortest_paths: source {} not in graph", source);
        return Vec::new();
    }

    let mut distances: Vec<Option<Weight>> = vec![None; count];
    let mut settled = vec![false; count];
    let mut heap: BinaryHeap<Reverse<(Weight, usize)>> = BinaryHeap::new();
    distances[source] = Some(0);
    heap.push(Reverse((0, source)));

    while let Some(Reverse((distance, vertex))) = heap.pop() {
        if settled[vertex] {
            continue;
        }
        settled[vertex] = true;

        for (target, weight) in graph.out_edges(vertex) {
            let candidate = distance.saturating_add(weight);
            let improves = distances[target].map_or(true, |known| candidate < known);
            if !settled[target] && improves {
                distances[target] = Some(candidate);
                heap.push(Reverse((candidate, target)));
            }
        }
    }

    distances
}
