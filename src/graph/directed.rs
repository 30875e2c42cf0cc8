//! Weighted directed graph backed by a dense adjacency matrix.

use std::fmt;

use crate::types::{Weight, WeightedEdge};

use super::cycle::{detect_cycle, scan_directed};
use super::shortest::shortest_paths;
use super::traversal::{self, Neighbors};

/// A weighted directed graph over the vertices `0..vertex_count()`.
///
/// Cell `(i, j)` of the matrix holds the weight of edge `i -> j`, or 0 when
/// there is none. The diagonal is always 0. Vertices are only ever appended.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectedGraph {
    matrix: Vec<Vec<Weight>>,
}

impl DirectedGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self { matrix: Vec::new() }
    }

    /// Build a graph from an edge list.
    ///
    /// Allocates vertices `0..=max_id` over every referenced endpoint first,
    /// then adds each edge in order with [`DirectedGraph::add_edge`].
    pub fn from_edges<I, E>(edges: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<WeightedEdge>,
    {
        let edges: Vec<WeightedEdge> = edges.into_iter().map(Into::into).collect();
        let mut graph = Self::new();

        if let Some(max_id) = edges.iter().map(|e| e.source.max(e.target)).max() {
            for _ in 0..=max_id {
                graph.add_vertex();
            }
        }
        for edge in &edges {
            graph.add_edge(edge.source, edge.target, edge.weight);
        }

        graph
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.matrix.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.matrix
            .iter()
            .map(|row| row.iter().filter(|&&w| w != 0).count())
            .sum()
    }

    /// Whether the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.matrix.is_empty()
    }

    /// Append a vertex and return its id.
    pub fn add_vertex(&mut self) -> usize {
        let id = self.matrix.len();
        for row in &mut self.matrix {
            row.push(0);
        }
        self.matrix.push(vec![0; id + 1]);
        id
    }

    /// Add or reweight the edge `src -> dst`.
    ///
    /// Ignored when `weight < 1`, when `src == dst`, or when either endpoint
    /// is not a vertex.
    pub fn add_edge(&mut self, src: usize, dst: usize, weight: Weight) {
        if weight < 1 {
            log::debug!("add_edge({}, {}): ignoring weight {}", src, dst, weight);
            return;
        }
        if src == dst {
            log::debug!("add_edge({}, {}): self loop ignored", src, dst);
            return;
        }
        if !self.in_range(src, dst) {
            log::debug!("add_edge({}, {}): endpoint out of range", src, dst);
            return;
        }
        self.matrix[src][dst] = weight;
    }

    /// Remove the edge `src -> dst` if both endpoints exist.
    pub fn remove_edge(&mut self, src: usize, dst: usize) {
        if !self.in_range(src, dst) {
            log::debug!("remove_edge({}, {}): endpoint out of range", src, dst);
            return;
        }
        self.matrix[src][dst] = 0;
    }

    /// Weight of `src -> dst`, if that edge exists.
    pub fn weight(&self, src: usize, dst: usize) -> Option<Weight> {
        self.matrix
            .get(src)
            .and_then(|row| row.get(dst))
            .copied()
            .filter(|&w| w != 0)
    }

    /// All vertices, ascending.
    pub fn vertices(&self) -> Vec<usize> {
        (0..self.matrix.len()).collect()
    }

    /// All edges, ascending by source then destination.
    pub fn edges(&self) -> Vec<WeightedEdge> {
        self.matrix
            .iter()
            .enumerate()
            .flat_map(|(src, row)| {
                row.iter()
                    .enumerate()
                    .filter(|&(_, &w)| w != 0)
                    .map(move |(dst, &w)| WeightedEdge::new(src, dst, w))
            })
            .collect()
    }

    /// Outgoing `(destination, weight)` pairs of `vertex`, ascending.
    pub fn out_edges(&self, vertex: usize) -> impl Iterator<Item = (usize, Weight)> + '_ {
        self.matrix
            .get(vertex)
            .into_iter()
            .flat_map(|row| row.iter().copied().enumerate())
            .filter(|&(_, w)| w != 0)
    }

    /// Whether `path` is a sequence of vertices joined by edges in order.
    pub fn is_valid_path(&self, path: &[usize]) -> bool {
        traversal::is_valid_path(self, path)
    }

    /// Depth-first walk from `start`, stopping early at `end` if given.
    pub fn dfs(&self, start: usize, end: Option<usize>) -> Vec<usize> {
        traversal::dfs(self, &start, end.as_ref())
    }

    /// Breadth-first walk from `start`, stopping early at `end` if given.
    pub fn bfs(&self, start: usize, end: Option<usize>) -> Vec<usize> {
        traversal::bfs(self, &start, end.as_ref())
    }

    /// Whether the graph contains a directed cycle.
    ///
    /// Graphs with fewer than three vertices always report `false`, so a
    /// two-vertex pair `a -> b -> a` on its own is not detected.
    pub fn has_cycle(&self) -> bool {
        detect_cycle(self, scan_directed)
    }

    /// Shortest distances from `src`; see [`shortest_paths`].
    pub fn shortest_paths(&self, src: usize) -> Vec<Option<Weight>> {
        shortest_paths(self, src)
    }

    fn in_range(&self, src: usize, dst: usize) -> bool {
        src < self.matrix.len() && dst < self.matrix.len()
    }
}

impl Neighbors for DirectedGraph {
    type Vertex = usize;

    fn vertex_list(&self) -> Vec<usize> {
        self.vertices()
    }

    fn contains_vertex(&self, vertex: &usize) -> bool {
        *vertex < self.matrix.len()
    }

    fn sorted_neighbors(&self, vertex: &usize) -> Vec<usize> {
        self.out_edges(*vertex).map(|(dst, _)| dst).collect()
    }

    fn has_edge(&self, from: &usize, to: &usize) -> bool {
        self.weight(*from, *to).is_some()
    }
}

impl fmt::Display for DirectedGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.matrix.len();
        if count == 0 {
            return writeln!(f, "EMPTY GRAPH");
        }

        writeln!(f, "GRAPH ({} vertices):", count)?;
        let header: Vec<String> = (0..count).map(|i| format!("{:2}", i)).collect();
        writeln!(f, "   |{}", header.join(" "))?;
        writeln!(f, "{}", "-".repeat(count * 3 + 3))?;
        for (i, row) in self.matrix.iter().enumerate() {
            let cells: Vec<String> = row.iter().map(|w| format!("{:2}", w)).collect();
            writeln!(f, "{:2} |{}", i, cells.join(" "))?;
        }
        Ok(())
    }
}
