//! Reads edge lists into in-memory graphs.
//!
//! Text edge lists hold one edge per line with whitespace-separated fields.
//! `#` starts a comment and blank lines are skipped. Directed lines are
//! `src dst [weight]`; undirected lines are `u v`.
//!
//! JSON edge lists are arrays of [`WeightedEdge`] or [`UndirectedEdge`]
//! objects.
//!
//! Directed vertex ids above [`MAX_LOADED_VERTEX_ID`] are rejected.

use std::io::Read;
use std::path::Path;

use crate::graph::{DirectedGraph, UndirectedGraph};
use crate::types::error::{GraphError, GraphResult};
use crate::types::{UndirectedEdge, Weight, WeightedEdge, DEFAULT_WEIGHT, MAX_LOADED_VERTEX_ID};

/// Layout of an edge-list source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeListFormat {
    /// Whitespace-separated fields, one edge per line.
    Text,
    /// A JSON array of edge objects.
    Json,
}

impl EdgeListFormat {
    /// Pick a format from a file extension: `.json` is JSON, anything else text.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Reader for edge-list files.
pub struct EdgeListReader;

impl EdgeListReader {
    /// Read a directed graph from a file.
    pub fn read_directed_file(path: &Path, format: EdgeListFormat) -> GraphResult<DirectedGraph> {
        let mut file = std::fs::File::open(path)?;
        Self::read_directed(&mut file, format)
    }

    /// Read an undirected graph from a file.
    pub fn read_undirected_file(
        path: &Path,
        format: EdgeListFormat,
    ) -> GraphResult<UndirectedGraph> {
        let mut file = std::fs::File::open(path)?;
        Self::read_undirected(&mut file, format)
    }

    /// Read a directed graph from any reader.
    pub fn read_directed(reader: &mut impl Read, format: EdgeListFormat) -> GraphResult<DirectedGraph> {
        let text = read_text(reader)?;
        let edges = match format {
            EdgeListFormat::Text => Self::parse_weighted(&text)?,
            EdgeListFormat::Json => serde_json::from_str::<Vec<WeightedEdge>>(&text)?,
        };
        // The matrix is sized by the largest id, so bound it before allocating.
        if let Some(id) = edges
            .iter()
            .map(|e| e.source.max(e.target))
            .find(|&id| id > MAX_LOADED_VERTEX_ID)
        {
            return Err(GraphError::VertexLimit {
                id,
                limit: MAX_LOADED_VERTEX_ID,
            });
        }
        log::debug!("loaded {} directed edges", edges.len());
        Ok(DirectedGraph::from_edges(edges))
    }

    /// Read an undirected graph from any reader.
    pub fn read_undirected(
        reader: &mut impl Read,
        format: EdgeListFormat,
    ) -> GraphResult<UndirectedGraph> {
        let text = read_text(reader)?;
        let pairs = match format {
            EdgeListFormat::Text => Self::parse_unweighted(&text)?,
            EdgeListFormat::Json => serde_json::from_str::<Vec<UndirectedEdge>>(&text)?
                .into_iter()
                .map(UndirectedEdge::into_pair)
                .collect(),
        };
        log::debug!("loaded {} undirected edges", pairs.len());
        Ok(UndirectedGraph::from_edges(pairs))
    }

    /// Parse `src dst [weight]` lines.
    pub fn parse_weighted(text: &str) -> GraphResult<Vec<WeightedEdge>> {
        let mut edges = Vec::new();
        for (line, fields) in data_lines(text) {
            let (source, target, weight) = match fields.as_slice() {
                [s, t] => (*s, *t, None),
                [s, t, w] => (*s, *t, Some(*w)),
                _ => return Err(malformed(line, "expected `src dst [weight]`")),
            };
            let weight: Weight = match weight {
                Some(w) => w
                    .parse()
                    .map_err(|_| malformed(line, &format!("bad weight {:?}", w)))?,
                None => DEFAULT_WEIGHT,
            };
            edges.push(WeightedEdge::new(
                parse_vertex(line, source)?,
                parse_vertex(line, target)?,
                weight,
            ));
        }
        Ok(edges)
    }

    /// Parse `u v` lines.
    pub fn parse_unweighted(text: &str) -> GraphResult<Vec<(String, String)>> {
        let mut pairs = Vec::new();
        for (line, fields) in data_lines(text) {
            match fields.as_slice() {
                [u, v] => pairs.push((u.to_string(), v.to_string())),
                _ => return Err(malformed(line, "expected `u v`")),
            }
        }
        Ok(pairs)
    }
}

fn read_text(reader: &mut impl Read) -> GraphResult<String> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(text)
}

/// Non-empty lines with comments stripped, paired with their 1-based number.
fn data_lines<'a>(text: &'a str) -> impl Iterator<Item = (usize, Vec<&'a str>)> + 'a {
    text.lines().enumerate().filter_map(|(i, raw)| {
        let content = raw.split('#').next().unwrap_or("");
        let fields: Vec<&str> = content.split_whitespace().collect();
        (!fields.is_empty()).then_some((i + 1, fields))
    })
}

fn parse_vertex(line: usize, field: &str) -> GraphResult<usize> {
    let id: usize = field
        .parse()
        .map_err(|_| malformed(line, &format!("bad vertex id {:?}", field)))?;
    if id > MAX_LOADED_VERTEX_ID {
        return Err(malformed(
            line,
            &format!("vertex id {} exceeds {}", id, MAX_LOADED_VERTEX_ID),
        ));
    }
    Ok(id)
}

fn malformed(line: usize, reason: &str) -> GraphError {
    GraphError::MalformedLine {
        line,
        reason: reason.to_string(),
    }
}
