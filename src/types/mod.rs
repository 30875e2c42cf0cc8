//! Shared data types for both graph variants.

pub mod edge;
pub mod error;

pub use edge::{UndirectedEdge, WeightedEdge};
pub use error::{GraphError, GraphResult};

/// Edge weight in a directed graph. Only positive values denote an edge.
pub type Weight = i64;

/// Weight given to edges loaded without an explicit weight.
pub const DEFAULT_WEIGHT: Weight = 1;

/// Largest directed vertex id accepted by the edge-list reader.
pub const MAX_LOADED_VERTEX_ID: usize = 4095;

/// A graph with fewer vertices than this never reports a cycle.
pub const MIN_CYCLE_VERTICES: usize = 3;
