//! Unweighted undirected graph backed by an insertion-ordered adjacency map.

use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

use indexmap::IndexMap;

use crate::types::UndirectedEdge;

use super::cycle::{detect_cycle, scan_undirected};
use super::traversal::{self, Neighbors};

/// An unweighted undirected graph keyed by arbitrary orderable identifiers.
///
/// The adjacency map is kept symmetric: `v` is in `u`'s neighbor list exactly
/// when `u` is in `v`'s, and each appears there once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndirectedGraph<V = String>
where
    V: Hash + Eq,
{
    adjacency: IndexMap<V, Vec<V>>,
}

impl<V> Default for UndirectedGraph<V>
where
    V: Hash + Eq,
{
    fn default() -> Self {
        Self {
            adjacency: IndexMap::new(),
        }
    }
}

impl<V> UndirectedGraph<V>
where
    V: Clone + Eq + Hash + Ord + fmt::Debug,
{
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph by adding each `(u, v)` pair in order.
    pub fn from_edges<I, E>(edges: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<(V, V)>,
    {
        let mut graph = Self::new();
        for edge in edges {
            let (u, v) = edge.into();
            graph.add_edge(u, v);
        }
        graph
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum::<usize>() / 2
    }

    /// Whether the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Whether `vertex` exists.
    pub fn contains(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    /// Neighbors of `vertex` in insertion order; empty if absent.
    pub fn neighbors(&self, vertex: &V) -> &[V] {
        self.adjacency
            .get(vertex)
            .map(|list| list.as_slice())
            .unwrap_or(&[])
    }

    /// Add a vertex with no edges. Does nothing if it already exists.
    pub fn add_vertex(&mut self, vertex: V) {
        if self.adjacency.contains_key(&vertex) {
            log::debug!("add_vertex({:?}): already present", vertex);
            return;
        }
        self.adjacency.insert(vertex, Vec::new());
    }

    /// Add the edge `u -- v`, creating either endpoint if needed.
    ///
    /// Does nothing for a self loop or an edge that already exists.
    pub fn add_edge(&mut self, u: V, v: V) {
        if u == v {
            log::debug!("add_edge({:?}, {:?}): self loop ignored", u, v);
            return;
        }

        let u_list = self.adjacency.entry(u.clone()).or_default();
        if !u_list.contains(&v) {
            u_list.push(v.clone());
        }
        let v_list = self.adjacency.entry(v).or_default();
        if !v_list.contains(&u) {
            v_list.push(u);
        }
    }

    /// Remove the edge `u -- v`. Does nothing if it does not exist.
    pub fn remove_edge(&mut self, u: &V, v: &V) {
        if u == v || !self.has_edge(u, v) {
            log::debug!("remove_edge({:?}, {:?}): no such edge", u, v);
            return;
        }
        if let Some(list) = self.adjacency.get_mut(u) {
            list.retain(|n| n != v);
        }
        if let Some(list) = self.adjacency.get_mut(v) {
            list.retain(|n| n != u);
        }
    }

    /// Remove `vertex` and every edge incident to it.
    pub fn remove_vertex(&mut self, vertex: &V) {
        let Some(incident) = self.adjacency.shift_remove(vertex) else {
            log::debug!("remove_vertex({:?}): not present", vertex);
            return;
        };
        for neighbor in &incident {
            if let Some(list) = self.adjacency.get_mut(neighbor) {
                list.retain(|n| n != vertex);
            }
        }
    }

    /// Whether the edge `u -- v` exists.
    pub fn has_edge(&self, u: &V, v: &V) -> bool {
        self.neighbors(u).contains(v)
    }

    /// All vertices in insertion order.
    pub fn vertices(&self) -> Vec<V> {
        self.adjacency.keys().cloned().collect()
    }

    /// Every edge exactly once, smaller endpoint first.
    pub fn edges(&self) -> Vec<UndirectedEdge<V>> {
        let mut seen: HashSet<UndirectedEdge<V>> = HashSet::new();
        let mut edges = Vec::new();
        for (vertex, list) in &self.adjacency {
            for neighbor in list {
                let edge = UndirectedEdge::new(vertex.clone(), neighbor.clone());
                if seen.insert(edge.clone()) {
                    edges.push(edge);
                }
            }
        }
        edges
    }

    /// Whether `path` is a sequence of vertices joined by edges.
    pub fn is_valid_path(&self, path: &[V]) -> bool {
        traversal::is_valid_path(self, path)
    }

    /// Depth-first walk from `start`, stopping early at `end` if given.
    pub fn dfs(&self, start: &V, end: Option<&V>) -> Vec<V> {
        traversal::dfs(self, start, end)
    }

    /// Breadth-first walk from `start`, stopping early at `end` if given.
    pub fn bfs(&self, start: &V, end: Option<&V>) -> Vec<V> {
        traversal::bfs(self, start, end)
    }

    /// Number of connected components.
    pub fn count_connected_components(&self) -> usize {
        traversal::count_components(self)
    }

    /// Whether the graph contains a cycle.
    pub fn has_cycle(&self) -> bool {
        detect_cycle(self, scan_undirected)
    }
}

impl UndirectedGraph<String> {
    /// Build a string-keyed graph from two-character edge names such as `"AB"`.
    ///
    /// Names that are not exactly two characters are skipped.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut graph = Self::new();
        for pair in pairs {
            let mut chars = pair.chars();
            match (chars.next(), chars.next(), chars.next()) {
                (Some(u), Some(v), None) => graph.add_edge(u.to_string(), v.to_string()),
                _ => log::debug!("from_pairs: skipping {:?}", pair),
            }
        }
        graph
    }
}

impl<V> Neighbors for UndirectedGraph<V>
where
    V: Clone + Eq + Hash + Ord + fmt::Debug,
{
    type Vertex = V;

    fn vertex_list(&self) -> Vec<V> {
        self.vertices()
    }

    fn contains_vertex(&self, vertex: &V) -> bool {
        self.contains(vertex)
    }

    fn sorted_neighbors(&self, vertex: &V) -> Vec<V> {
        let mut sorted = self.neighbors(vertex).to_vec();
        sorted.sort();
        sorted
    }

    fn has_edge(&self, from: &V, to: &V) -> bool {
        self.neighbors(from).contains(to)
    }
}

impl<V> fmt::Display for UndirectedGraph<V>
where
    V: Hash + Eq + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<String> = self
            .adjacency
            .iter()
            .map(|(vertex, list)| {
                let names: Vec<String> = list.iter().map(ToString::to_string).collect();
                format!("{}: [{}]", vertex, names.join(", "))
            })
            .collect();

        let body = lines.join("\n  ");
        if body.len() < 70 {
            write!(f, "GRAPH: {{{}}}", lines.join(", "))
        } else {
            write!(f, "GRAPH: {{\n  {}}}", body)
        }
    }
}
