//! Edge value types returned by `edges()` and accepted by bulk loaders.

use serde::{Deserialize, Serialize};

use super::{Weight, DEFAULT_WEIGHT};

/// A directed, weighted edge between two integer vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeightedEdge {
    /// Source vertex.
    pub source: usize,
    /// Destination vertex.
    pub target: usize,
    /// Edge weight; edges loaded without one get `DEFAULT_WEIGHT`.
    #[serde(default = "default_weight")]
    pub weight: Weight,
}

fn default_weight() -> Weight {
    DEFAULT_WEIGHT
}

impl WeightedEdge {
    /// Create a new weighted edge.
    pub fn new(source: usize, target: usize, weight: Weight) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// The edge as a `(source, target, weight)` triple.
    pub fn as_tuple(&self) -> (usize, usize, Weight) {
        (self.source, self.target, self.weight)
    }
}

impl From<(usize, usize, Weight)> for WeightedEdge {
    fn from((source, target, weight): (usize, usize, Weight)) -> Self {
        Self::new(source, target, weight)
    }
}

impl From<(usize, usize)> for WeightedEdge {
    fn from((source, target): (usize, usize)) -> Self {
        Self::new(source, target, DEFAULT_WEIGHT)
    }
}

impl std::fmt::Display for WeightedEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {} ({})", self.source, self.target, self.weight)
    }
}

/// An unordered pair of distinct vertices.
///
/// Built through [`UndirectedEdge::new`], the smaller endpoint is always
/// stored in `u`, so `(a, b)` and `(b, a)` compare equal. JSON input also
/// accepts `source`/`target` for the two endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UndirectedEdge<V = String> {
    /// Smaller endpoint.
    #[serde(alias = "source")]
    pub u: V,
    /// Larger endpoint.
    #[serde(alias = "target")]
    pub v: V,
}

impl<V: Ord> UndirectedEdge<V> {
    /// Create a canonically ordered edge.
    pub fn new(a: V, b: V) -> Self {
        if b < a {
            Self { u: b, v: a }
        } else {
            Self { u: a, v: b }
        }
    }

    /// The edge as a `(smaller, larger)` pair.
    pub fn into_pair(self) -> (V, V) {
        (self.u, self.v)
    }
}

impl<V: std::fmt::Display> std::fmt::Display for UndirectedEdge<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -- {}", self.u, self.v)
    }
}
