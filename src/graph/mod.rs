//! In-memory graph types and the traversal engine they share.

pub mod cycle;
pub mod directed;
pub mod shortest;
pub mod traversal;
pub mod undirected;

pub use cycle::{detect_cycle, scan_directed, scan_undirected, ScanOutcome};
pub use directed::DirectedGraph;
pub use shortest::shortest_paths;
pub use traversal::{bfs, count_components, dfs, is_valid_path, Neighbors};
pub use undirected::UndirectedGraph;
