//! Phase 1 tests: vertex and edge storage for both graph variants.

use graph_walk::graph::{DirectedGraph, UndirectedGraph};
use graph_walk::types::{UndirectedEdge, WeightedEdge};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// ==================== Helper ====================

fn sample_directed() -> DirectedGraph {
    DirectedGraph::from_edges([
        (0, 1, 10),
        (4, 0, 12),
        (1, 4, 15),
        (4, 3, 3),
        (3, 1, 5),
        (2, 1, 23),
        (3, 2, 7),
    ])
}

fn triples(graph: &DirectedGraph) -> Vec<(usize, usize, i64)> {
    graph.edges().iter().map(WeightedEdge::as_tuple).collect()
}

fn pairs(graph: &UndirectedGraph) -> Vec<(String, String)> {
    graph
        .edges()
        .into_iter()
        .map(UndirectedEdge::into_pair)
        .collect()
}

fn s(v: &str) -> String {
    v.to_string()
}

/// Every neighbor relation appears in both directions, exactly once each.
fn assert_symmetric(graph: &UndirectedGraph) {
    for u in graph.vertices() {
        let list = graph.neighbors(&u);
        for v in list {
            let back = graph.neighbors(v);
            assert_eq!(
                back.iter().filter(|x| **x == u).count(),
                1,
                "{} missing from {}'s neighbors",
                u,
                v
            );
        }
        let mut dedup = list.to_vec();
        dedup.sort();
        dedup.dedup();
        assert_eq!(dedup.len(), list.len(), "duplicate neighbor of {}", u);
    }
}

// ==================== Directed Storage Tests ====================

#[test]
fn test_add_vertex_returns_sequential_ids() {
    let mut graph = DirectedGraph::new();
    assert!(graph.is_empty());
    for expected in 0..5 {
        assert_eq!(graph.add_vertex(), expected);
    }
    assert_eq!(graph.vertex_count(), 5);
    assert_eq!(graph.vertices(), vec![0, 1, 2, 3, 4]);
    assert!(graph.edges().is_empty());
}

#[test]
fn test_directed_edges_sorted_by_source_then_destination() {
    let graph = sample_directed();
    assert_eq!(
        triples(&graph),
        vec![
            (0, 1, 10),
            (1, 4, 15),
            (2, 1, 23),
            (3, 1, 5),
            (3, 2, 7),
            (4, 0, 12),
            (4, 3, 3),
        ]
    );
    assert_eq!(graph.edge_count(), 7);
    assert_eq!(graph.vertices(), vec![0, 1, 2, 3, 4]);
}

#[test]
fn test_from_edges_allocates_up_to_max_id() {
    let graph = DirectedGraph::from_edges([(3, 1, 7), (7, 1, 5)]);
    assert_eq!(graph.vertex_count(), 8);
    assert_eq!(triples(&graph), vec![(3, 1, 7), (7, 1, 5)]);
}

#[test]
fn test_directed_invalid_edges_ignored() {
    let mut graph = sample_directed();
    let before = graph.clone();

    graph.add_edge(0, 2, 0);
    graph.add_edge(0, 2, -4);
    graph.add_edge(2, 2, 5);
    graph.add_edge(0, 5, 5);
    graph.add_edge(9, 0, 5);

    assert_eq!(graph, before);
}

#[test]
fn test_directed_add_edge_overwrites_weight() {
    let mut graph = sample_directed();
    graph.add_edge(4, 3, 99);
    assert_eq!(graph.weight(4, 3), Some(99));
    assert_eq!(graph.edge_count(), 7);
}

#[test]
fn test_directed_remove_edge_idempotent() {
    let mut graph = sample_directed();
    graph.remove_edge(3, 1);
    let once = graph.clone();
    graph.remove_edge(3, 1);
    assert_eq!(graph, once);
    assert_eq!(graph.weight(3, 1), None);
    assert_eq!(graph.edge_count(), 6);

    // Out of range is a no-op.
    graph.remove_edge(5, 0);
    graph.remove_edge(0, 100);
    assert_eq!(graph, once);
}

#[test]
fn test_directed_diagonal_stays_zero() {
    let mut graph = DirectedGraph::new();
    for _ in 0..4 {
        graph.add_vertex();
    }
    for v in 0..4 {
        graph.add_edge(v, v, 3);
        assert_eq!(graph.weight(v, v), None);
    }
}

#[test]
fn test_directed_display() {
    assert_eq!(DirectedGraph::new().to_string(), "EMPTY GRAPH\n");

    let graph = DirectedGraph::from_edges([(0, 1, 10), (1, 0, 3)]);
    let expected = "GRAPH (2 vertices):\n   | 0  1\n---------\n 0 | 0 10\n 1 | 3  0\n";
    assert_eq!(graph.to_string(), expected);
}

#[test]
fn test_directed_edges_match_storage_after_random_ops() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut graph = DirectedGraph::new();
    let mut model = vec![vec![0i64; 8]; 8];
    for _ in 0..8 {
        graph.add_vertex();
    }

    for _ in 0..500 {
        let src = rng.gen_range(0..10);
        let dst = rng.gen_range(0..10);
        if rng.gen_bool(0.6) {
            let weight = rng.gen_range(-2..20);
            graph.add_edge(src, dst, weight);
            if weight >= 1 && src != dst && src < 8 && dst < 8 {
                model[src][dst] = weight;
            }
        } else {
            graph.remove_edge(src, dst);
            if src < 8 && dst < 8 {
                model[src][dst] = 0;
            }
        }
    }

    let mut expected = Vec::new();
    for (src, row) in model.iter().enumerate() {
        for (dst, &w) in row.iter().enumerate() {
            if w != 0 {
                expected.push((src, dst, w));
            }
        }
    }
    assert_eq!(triples(&graph), expected);
}

// ==================== Undirected Storage Tests ====================

#[test]
fn test_add_vertex_ignores_duplicates() {
    let mut graph = UndirectedGraph::new();
    for v in ["A", "B", "C", "D", "E"] {
        graph.add_vertex(s(v));
    }
    graph.add_vertex(s("A"));
    assert_eq!(graph.vertex_count(), 5);
    assert_eq!(graph.vertices(), vec!["A", "B", "C", "D", "E"]);
}

#[test]
fn test_add_edge_creates_endpoints_and_skips_duplicates() {
    let mut graph = UndirectedGraph::new();
    graph.add_edge(s("A"), s("B"));
    graph.add_edge(s("B"), s("A"));
    graph.add_edge(s("C"), s("C"));

    assert_eq!(graph.vertices(), vec!["A", "B"]);
    assert_eq!(graph.neighbors(&s("A")), &[s("B")]);
    assert_eq!(graph.neighbors(&s("B")), &[s("A")]);
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_undirected_edges_canonical_and_unique() {
    let graph = UndirectedGraph::from_pairs(["AB", "AC", "BC", "BD", "CD", "CE"]);
    assert_eq!(
        pairs(&graph),
        vec![
            (s("A"), s("B")),
            (s("A"), s("C")),
            (s("B"), s("C")),
            (s("B"), s("D")),
            (s("C"), s("D")),
            (s("C"), s("E")),
        ]
    );
    assert_eq!(graph.vertices(), vec!["A", "B", "C", "D", "E"]);

    let reversed = UndirectedGraph::from_pairs(["BA", "DC"]);
    assert_eq!(pairs(&reversed), vec![(s("A"), s("B")), (s("C"), s("D"))]);
}

#[test]
fn test_remove_edge_and_vertex() {
    let mut graph = UndirectedGraph::from_pairs(["AB", "AC", "BC", "BD", "CD", "CE", "DE"]);
    graph.remove_vertex(&s("DOES NOT EXIST"));
    graph.remove_edge(&s("A"), &s("B"));
    graph.remove_edge(&s("X"), &s("B"));

    assert_eq!(graph.neighbors(&s("A")), &[s("C")]);
    assert_eq!(graph.neighbors(&s("B")), &[s("C"), s("D")]);
    assert_eq!(graph.edge_count(), 6);

    graph.remove_vertex(&s("D"));
    assert_eq!(graph.vertices(), vec!["A", "B", "C", "E"]);
    assert_eq!(graph.neighbors(&s("B")), &[s("C")]);
    assert_eq!(graph.neighbors(&s("C")), &[s("A"), s("B"), s("E")]);
    assert_eq!(graph.neighbors(&s("E")), &[s("C")]);
    assert_symmetric(&graph);
}

#[test]
fn test_undirected_remove_edge_idempotent() {
    let mut graph = UndirectedGraph::from_pairs(["AB", "BC"]);
    graph.remove_edge(&s("B"), &s("A"));
    let once = graph.clone();
    graph.remove_edge(&s("A"), &s("B"));
    assert_eq!(graph, once);
    graph.remove_edge(&s("C"), &s("C"));
    assert_eq!(graph, once);
}

#[test]
fn test_removed_vertex_can_be_recreated() {
    let mut graph = UndirectedGraph::from_pairs(["AB", "BC"]);
    graph.remove_vertex(&s("B"));
    assert!(!graph.contains(&s("B")));
    assert_eq!(graph.edge_count(), 0);

    graph.add_edge(s("B"), s("A"));
    assert_eq!(pairs(&graph), vec![(s("A"), s("B"))]);
}

#[test]
fn test_undirected_display() {
    let graph = UndirectedGraph::from_pairs(["AB", "AC"]);
    assert_eq!(graph.to_string(), "GRAPH: {A: [B, C], B: [A], C: [A]}");

    let empty: UndirectedGraph = UndirectedGraph::new();
    assert_eq!(empty.to_string(), "GRAPH: {}");

    let long = UndirectedGraph::from_pairs(["AB", "AC", "AD", "AE", "AF", "AG", "BC", "BD"]);
    let text = long.to_string();
    assert!(text.starts_with("GRAPH: {\n  A: [B, C, D, E, F, G]\n  B: [A, C, D]\n  "));
    assert!(text.ends_with("G: [A]}"));
}

#[test]
fn test_undirected_display_line_break_threshold() {
    // Body is 69 characters: stays on one line.
    let short = UndirectedGraph::from_pairs(["AB", "AC", "BC", "BD", "CD", "CE", "DE"]);
    assert_eq!(
        short.to_string(),
        "GRAPH: {A: [B, C], B: [A, C, D], C: [A, B, D, E], D: [B, C, E], E: [C, D]}"
    );

    let mut long = short.clone();
    long.add_edge(s("E"), s("F"));
    assert_eq!(
        long.to_string(),
        "GRAPH: {\n  A: [B, C]\n  B: [A, C, D]\n  C: [A, B, D, E]\n  D: [B, C, E]\n  E: [C, D, F]\n  F: [E]}"
    );
}

#[test]
fn test_symmetry_after_random_ops() {
    let mut rng = StdRng::seed_from_u64(42);
    let names = ["A", "B", "C", "D", "E", "F"];
    let mut graph = UndirectedGraph::new();

    for _ in 0..1000 {
        let u = s(names[rng.gen_range(0..names.len())]);
        let v = s(names[rng.gen_range(0..names.len())]);
        match rng.gen_range(0..4) {
            0 | 1 => graph.add_edge(u, v),
            2 => graph.remove_edge(&u, &v),
            _ => graph.remove_vertex(&u),
        }
        assert_symmetric(&graph);
    }

    let edges = graph.edges();
    let unique: std::collections::HashSet<_> = edges.iter().cloned().collect();
    assert_eq!(unique.len(), edges.len());
    assert_eq!(edges.len(), graph.edge_count());
    for edge in &edges {
        assert!(edge.u < edge.v);
    }
}
