//! Cycle detection over possibly disconnected graphs.
//!
//! Detection runs one component-scoped scan per uncovered vertex. A scan
//! either finds a cycle or reports the vertices it reached, which are then
//! skipped as future scan roots.

use std::collections::{HashSet, VecDeque};

use crate::types::MIN_CYCLE_VERTICES;

use super::traversal::Neighbors;

/// Outcome of scanning a single component for a cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome<V> {
    /// A cycle was found; the scan stopped early.
    Cycle,
    /// No cycle was found; holds every vertex the scan reached, in visit order.
    NoCycle(Vec<V>),
}

impl<V> ScanOutcome<V> {
    /// Whether this scan found a cycle.
    pub fn is_cycle(&self) -> bool {
        matches!(self, Self::Cycle)
    }
}

/// Run `scan` over every component of `graph` and report whether any has a cycle.
///
/// Graphs with fewer than [`MIN_CYCLE_VERTICES`] vertices never report one.
pub fn detect_cycle<G, F>(graph: &G, mut scan: F) -> bool
where
    G: Neighbors + ?Sized,
    F: FnMut(&G, &G::Vertex) -> ScanOutcome<G::Vertex>,
{
    let vertices = graph.vertex_list();
    if vertices.len() < MIN_CYCLE_VERTICES {
        return false;
    }

    let mut covered: HashSet<G::Vertex> = HashSet::new();
    for root in &vertices {
        if covered.contains(root) {
            continue;
        }
        match scan(graph, root) {
            ScanOutcome::Cycle => {
                log::debug!("cycle found in component rooted at {:?}", root);
                return true;
            }
            ScanOutcome::NoCycle(reached) => covered.extend(reached),
        }
    }

    false
}

/// Modified DFS for directed graphs.
///
/// Each stack frame records the vertex that pushed it. Popping a frame rewinds
/// the current path to that predecessor, so the path always holds exactly the
/// ancestor chain of the vertex being expanded. An edge into that chain is a
/// back edge.
pub fn scan_directed<G>(graph: &G, start: &G::Vertex) -> ScanOutcome<G::Vertex>
where
    G: Neighbors + ?Sized,
{
    let mut seen: HashSet<G::Vertex> = HashSet::new();
    let mut visited_order: Vec<G::Vertex> = Vec::new();
    let mut path: Vec<G::Vertex> = Vec::new();
    let mut on_path: HashSet<G::Vertex> = HashSet::new();
    let mut stack: Vec<(G::Vertex, Option<G::Vertex>)> = vec![(start.clone(), None)];

    while let Some((current, predecessor)) = stack.pop() {
        // Backtrack to the frame's predecessor.
        while let Some(top) = path.last() {
            if predecessor.as_ref() == Some(top) {
                break;
            }
            if let Some(popped) = path.pop() {
                on_path.remove(&popped);
            }
        }

        if !seen.insert(current.clone()) {
            continue;
        }
        visited_order.push(current.clone());
        path.push(current.clone());
        on_path.insert(current.clone());

        let neighbors = graph.sorted_neighbors(&current);
        if let Some(ancestor) = neighbors.iter().find(|n| on_path.contains(*n)) {
            log::trace!("back edge {:?} -> {:?}", current, ancestor);
            return ScanOutcome::Cycle;
        }
        stack.extend(
            neighbors
                .into_iter()
                .rev()
                .map(|n| (n, Some(current.clone()))),
        );
    }

    ScanOutcome::NoCycle(visited_order)
}

/// Modified BFS for undirected graphs.
///
/// Each queued vertex carries the vertex that discovered it. The edge back to
/// that discoverer is ignored; any other edge to an already visited vertex
/// closes a cycle.
pub fn scan_undirected<G>(graph: &G, start: &G::Vertex) -> ScanOutcome<G::Vertex>
where
    G: Neighbors + ?Sized,
{
    let mut seen: HashSet<G::Vertex> = HashSet::new();
    let mut visited_order: Vec<G::Vertex> = Vec::new();
    let mut queue: VecDeque<(G::Vertex, Option<G::Vertex>)> = VecDeque::new();
    queue.push_back((start.clone(), None));

    while let Some((current, discoverer)) = queue.pop_front() {
        if !seen.insert(current.clone()) {
            continue;
        }
        visited_order.push(current.clone());

        for neighbor in graph.sorted_neighbors(&current) {
            if discoverer.as_ref() == Some(&neighbor) {
                continue;
            }
            if seen.contains(&neighbor) {
                log::trace!("edge {:?} -- {:?} closes a cycle", current, neighbor);
                return ScanOutcome::Cycle;
            }
            queue.push_back((neighbor, Some(current.clone())));
        }
    }

    ScanOutcome::NoCycle(visited_order)
}
