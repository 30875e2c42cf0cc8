//! graph-walk: weighted directed and unweighted undirected graphs.
//!
//! Both graph types share one traversal engine: ordered DFS/BFS walks, path
//! validation, component counting and cycle detection. Mutations with invalid
//! arguments are silent no-ops, and queries from an absent vertex return
//! empty results.

pub mod cli;
pub mod format;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use format::{EdgeListFormat, EdgeListReader};
pub use graph::{DirectedGraph, Neighbors, ScanOutcome, UndirectedGraph};
pub use types::{
    GraphError, GraphResult, UndirectedEdge, Weight, WeightedEdge, DEFAULT_WEIGHT,
    MAX_LOADED_VERTEX_ID, MIN_CYCLE_VERTICES,
};
