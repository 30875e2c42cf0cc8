//! Error types for the graph-walk library.
//!
//! Graph mutation and queries never fail; these errors only surface at the
//! edge-list loading boundary and in the command-line tool.

use thiserror::Error;

/// All errors that can occur in the graph-walk library.
#[derive(Error, Debug)]
pub enum GraphError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A line of a text edge list could not be parsed.
    #[error("Malformed edge list at line {line}: {reason}")]
    MalformedLine { line: usize, reason: String },

    /// An edge list names a directed vertex id too large to allocate.
    #[error("Vertex id {id} exceeds the limit of {limit}")]
    VertexLimit { id: usize, limit: usize },

    /// JSON could not be parsed or produced.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A vertex argument could not be interpreted for this graph kind.
    #[error("Invalid vertex: {0}")]
    InvalidVertex(String),

    /// The operation does not apply to this graph kind.
    #[error("Unsupported operation: {0}")]
    Unsupported(&'static str),
}

/// Convenience result type for graph-walk operations.
pub type GraphResult<T> = Result<T, GraphError>;
