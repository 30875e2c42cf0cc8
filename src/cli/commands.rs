//! CLI command implementations.
//!
//! Every command writes its report to `out`, either as plain text or as a
//! single JSON document.

use std::io::Write;
use std::path::Path;

use crate::format::{EdgeListFormat, EdgeListReader};
use crate::graph::{DirectedGraph, UndirectedGraph};
use crate::types::{GraphError, GraphResult};

/// A graph loaded from an edge-list file.
#[derive(Debug, Clone)]
pub enum LoadedGraph {
    /// Weighted directed graph with integer vertices.
    Directed(DirectedGraph),
    /// Unweighted undirected graph with string vertices.
    Undirected(UndirectedGraph),
}

/// Traversal strategy for [`cmd_walk`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkKind {
    /// Depth-first.
    Dfs,
    /// Breadth-first.
    Bfs,
}

impl WalkKind {
    /// Lowercase name of the walk.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Dfs => "dfs",
            Self::Bfs => "bfs",
        }
    }
}

/// Load an edge-list file as a directed or undirected graph.
pub fn load_graph(path: &Path, undirected: bool, format: EdgeListFormat) -> GraphResult<LoadedGraph> {
    if undirected {
        EdgeListReader::read_undirected_file(path, format).map(LoadedGraph::Undirected)
    } else {
        EdgeListReader::read_directed_file(path, format).map(LoadedGraph::Directed)
    }
}

/// Summary counts and cycle status.
pub fn cmd_info(out: &mut impl Write, graph: &LoadedGraph, json: bool) -> GraphResult<()> {
    let (kind, vertices, edges, has_cycle) = match graph {
        LoadedGraph::Directed(g) => ("directed", g.vertex_count(), g.edge_count(), g.has_cycle()),
        LoadedGraph::Undirected(g) => {
            ("undirected", g.vertex_count(), g.edge_count(), g.has_cycle())
        }
    };

    if json {
        let info = serde_json::json!({
            "kind": kind,
            "vertices": vertices,
            "edges": edges,
            "has_cycle": has_cycle,
        });
        writeln!(out, "{}", serde_json::to_string_pretty(&info)?)?;
    } else {
        writeln!(out, "Kind: {}", kind)?;
        writeln!(out, "Vertices: {}", vertices)?;
        writeln!(out, "Edges: {}", edges)?;
        writeln!(out, "Has cycle: {}", has_cycle)?;
        match graph {
            LoadedGraph::Directed(g) => write!(out, "{}", g)?,
            LoadedGraph::Undirected(g) => writeln!(out, "{}", g)?,
        }
    }
    Ok(())
}

/// List every edge.
pub fn cmd_edges(out: &mut impl Write, graph: &LoadedGraph, json: bool) -> GraphResult<()> {
    match graph {
        LoadedGraph::Directed(g) => {
            let edges = g.edges();
            if json {
                writeln!(out, "{}", serde_json::to_string(&edges)?)?;
            } else {
                for edge in &edges {
                    writeln!(out, "{}", edge)?;
                }
            }
        }
        LoadedGraph::Undirected(g) => {
            let edges = g.edges();
            if json {
                writeln!(out, "{}", serde_json::to_string(&edges)?)?;
            } else {
                for edge in &edges {
                    writeln!(out, "{}", edge)?;
                }
            }
        }
    }
    Ok(())
}

/// Check whether `vertices` forms a valid path.
pub fn cmd_path(
    out: &mut impl Write,
    graph: &LoadedGraph,
    vertices: &[String],
    json: bool,
) -> GraphResult<()> {
    let valid = match graph {
        LoadedGraph::Directed(g) => {
            let path = vertices
                .iter()
                .map(|v| parse_directed_vertex(v))
                .collect::<GraphResult<Vec<usize>>>()?;
            g.is_valid_path(&path)
        }
        LoadedGraph::Undirected(g) => g.is_valid_path(vertices),
    };

    if json {
        writeln!(out, "{}", serde_json::json!({"path": vertices, "valid": valid}))?;
    } else {
        writeln!(out, "[{}] {}", vertices.join(", "), valid)?;
    }
    Ok(())
}

/// Run a depth-first or breadth-first walk.
pub fn cmd_walk(
    out: &mut impl Write,
    graph: &LoadedGraph,
    kind: WalkKind,
    start: &str,
    end: Option<&str>,
    json: bool,
) -> GraphResult<()> {
    let visited: Vec<String> = match graph {
        LoadedGraph::Directed(g) => {
            let start = parse_directed_vertex(start)?;
            let end = end.map(parse_directed_vertex).transpose()?;
            let order = match kind {
                WalkKind::Dfs => g.dfs(start, end),
                WalkKind::Bfs => g.bfs(start, end),
            };
            order.iter().map(ToString::to_string).collect()
        }
        LoadedGraph::Undirected(g) => {
            let start = start.to_string();
            let end = end.map(str::to_string);
            match kind {
                WalkKind::Dfs => g.dfs(&start, end.as_ref()),
                WalkKind::Bfs => g.bfs(&start, end.as_ref()),
            }
        }
    };

    if json {
        writeln!(out, "{}", serde_json::json!({"walk": kind.name(), "visited": visited}))?;
    } else {
        writeln!(out, "{}: [{}]", kind.name().to_uppercase(), visited.join(", "))?;
    }
    Ok(())
}

/// Report whether the graph has a cycle.
pub fn cmd_cycle(out: &mut impl Write, graph: &LoadedGraph, json: bool) -> GraphResult<()> {
    let has_cycle = match graph {
        LoadedGraph::Directed(g) => g.has_cycle(),
        LoadedGraph::Undirected(g) => g.has_cycle(),
    };

    if json {
        writeln!(out, "{}", serde_json::json!({"has_cycle": has_cycle}))?;
    } else {
        writeln!(out, "Has cycle: {}", has_cycle)?;
    }
    Ok(())
}

/// Count connected components of an undirected graph.
pub fn cmd_components(out: &mut impl Write, graph: &LoadedGraph, json: bool) -> GraphResult<()> {
    let LoadedGraph::Undirected(g) = graph else {
        return Err(GraphError::Unsupported(
            "components requires an undirected graph",
        ));
    };
    let components = g.count_connected_components();

    if json {
        writeln!(out, "{}", serde_json::json!({"components": components}))?;
    } else {
        writeln!(out, "Components: {}", components)?;
    }
    Ok(())
}

/// Shortest distances from `source` in a directed graph.
pub fn cmd_shortest(
    out: &mut impl Write,
    graph: &LoadedGraph,
    source: &str,
    json: bool,
) -> GraphResult<()> {
    let LoadedGraph::Directed(g) = graph else {
        return Err(GraphError::Unsupported(
            "shortest requires a directed graph",
        ));
    };
    let source = parse_directed_vertex(source)?;
    let distances = g.shortest_paths(source);

    if json {
        writeln!(
            out,
            "{}",
            serde_json::json!({"source": source, "distances": distances})
        )?;
    } else {
        for (vertex, distance) in distances.iter().enumerate() {
            match distance {
                Some(d) => writeln!(out, "{} -> {}: {}", source, vertex, d)?,
                None => writeln!(out, "{} -> {}: unreachable", source, vertex)?,
            }
        }
    }
    Ok(())
}

fn parse_directed_vertex(text: &str) -> GraphResult<usize> {
    text.trim()
        .parse()
        .map_err(|_| GraphError::InvalidVertex(text.to_string()))
}
