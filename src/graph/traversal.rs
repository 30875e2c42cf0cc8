//! Graph traversal algorithms (DFS, BFS) and the queries built on them.
//!
//! Every algorithm here is written once against [`Neighbors`], which both
//! graph variants implement. Neighbors are always expanded in ascending
//! vertex order, so the visit order of a walk is fully determined by the
//! graph and the start vertex.

use std::collections::{HashSet, VecDeque};
use std::fmt::Debug;
use std::hash::Hash;

/// Read-only neighbor lookup over a graph.
pub trait Neighbors {
    /// Vertex identifier type.
    type Vertex: Clone + Eq + Hash + Ord + Debug;

    /// All vertices, in the graph's natural listing order.
    fn vertex_list(&self) -> Vec<Self::Vertex>;

    /// Whether the vertex exists.
    fn contains_vertex(&self, vertex: &Self::Vertex) -> bool;

    /// Vertices reachable over one edge from `vertex`, ascending.
    /// Empty for an absent vertex.
    fn sorted_neighbors(&self, vertex: &Self::Vertex) -> Vec<Self::Vertex>;

    /// Whether an edge leads from `from` to `to`.
    fn has_edge(&self, from: &Self::Vertex, to: &Self::Vertex) -> bool;
}

/// Depth-first walk from `start`, optionally stopping at `end`.
///
/// Returns vertices in the order they were first popped from the stack.
/// When `end` is popped it is appended and the walk stops at once, so it is
/// always the last entry. An absent `start` yields an empty walk.
pub fn dfs<G>(graph: &G, start: &G::Vertex, end: Option<&G::Vertex>) -> Vec<G::Vertex>
where
    G: Neighbors + ?Sized,
{
    if !graph.contains_vertex(start) {
        log::debug!("dfs: start vertex {:?} not in graph", start);
        return Vec::new();
    }

    let mut seen: HashSet<G::Vertex> = HashSet::new();
    let mut visited_order: Vec<G::Vertex> = Vec::new();
    let mut stack: Vec<G::Vertex> = vec![start.clone()];

    while let Some(current) = stack.pop() {
        if end == Some(&current) {
            visited_order.push(current);
            return visited_order;
        }
        if !seen.insert(current.clone()) {
            continue;
        }
        log::trace!("dfs: visit {:?}", current);

        // Pushed in reverse so the smallest neighbor is popped first.
        stack.extend(graph.sorted_neighbors(&current).into_iter().rev());
        visited_order.push(current);
    }

    visited_order
}

/// Breadth-first walk from `start`, optionally stopping at `end`.
///
/// Same early-return contract as [`dfs`]. Neighbors already visited at the
/// time their parent is expanded are not enqueued.
pub fn bfs<G>(graph: &G, start: &G::Vertex, end: Option<&G::Vertex>) -> Vec<G::Vertex>
where
    G: Neighbors + ?Sized,
{
    if !graph.contains_vertex(start) {
        log::debug!("bfs: start vertex {:?} not in graph", start);
        return Vec::new();
    }

    let mut seen: HashSet<G::Vertex> = HashSet::new();
    let mut visited_order: Vec<G::Vertex> = Vec::new();
    let mut queue: VecDeque<G::Vertex> = VecDeque::new();
    queue.push_back(start.clone());

    while let Some(current) = queue.pop_front() {
        if end == Some(&current) {
            visited_order.push(current);
            return visited_order;
        }
        if !seen.insert(current.clone()) {
            continue;
        }
        log::trace!("bfs: visit {:?}", current);

        for neighbor in graph.sorted_neighbors(&current) {
            if !seen.contains(&neighbor) {
                queue.push_back(neighbor);
            }
        }
        visited_order.push(current);
    }

    visited_order
}

/// Whether `path` names existing vertices joined by consecutive edges.
///
/// The empty path is valid; a single vertex is valid iff it exists.
pub fn is_valid_path<G>(graph: &G, path: &[G::Vertex]) -> bool
where
    G: Neighbors + ?Sized,
{
    if let Some(missing) = path.iter().find(|v| !graph.contains_vertex(v)) {
        log::debug!("path rejected: vertex {:?} not in graph", missing);
        return false;
    }
    path.windows(2).all(|pair| graph.has_edge(&pair[0], &pair[1]))
}

/// Number of components found by repeated DFS from the first uncovered vertex.
///
/// For an undirected graph these are its connected components.
pub fn count_components<G>(graph: &G) -> usize
where
    G: Neighbors + ?Sized,
{
    let mut covered: HashSet<G::Vertex> = HashSet::new();
    let mut components = 0;

    for vertex in graph.vertex_list() {
        if covered.contains(&vertex) {
            continue;
        }
        covered.extend(dfs(graph, &vertex, None));
        components += 1;
    }

    components
}
