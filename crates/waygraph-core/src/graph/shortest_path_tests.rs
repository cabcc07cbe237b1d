//! Tests for the Dijkstra shortest-path engine.

use super::shortest_path::{dijkstra, WeightedAdjacency};
use super::store::Graph;
use super::types::EdgeSpec;

fn weighted(graph: &mut Graph, source: &str, destination: &str, weight: f64) {
    graph
        .add_edge(source, destination, EdgeSpec::weighted(weight))
        .unwrap();
}

/// Build a linear graph: a → b → c → d (weight 1 each)
fn build_linear_graph() -> Graph {
    let mut graph = Graph::new();
    graph.add_vertices(["a", "b", "c", "d"]).unwrap();
    weighted(&mut graph, "a", "b", 1.0);
    weighted(&mut graph, "b", "c", 1.0);
    weighted(&mut graph, "c", "d", 1.0);
    graph
}

/// Build a graph with a cycle: a → b → c → a
fn build_cyclic_graph() -> Graph {
    let mut graph = Graph::new();
    graph.add_vertices(["a", "b", "c"]).unwrap();
    weighted(&mut graph, "a", "b", 1.0);
    weighted(&mut graph, "b", "c", 1.0);
    weighted(&mut graph, "c", "a", 1.0);
    graph
}

#[test]
fn test_linear_path() {
    let graph = build_linear_graph();
    let path = dijkstra(&graph, "a", "d").unwrap();
    assert_eq!(path.vertices, vec!["a", "b", "c", "d"]);
    assert_eq!(path.total_weight, 3.0);
    assert_eq!(path.hops(), 3);
    assert_eq!(path.source(), Some("a"));
    assert_eq!(path.target(), Some("d"));
}

#[test]
fn test_start_equals_end() {
    let graph = build_linear_graph();
    let path = dijkstra(&graph, "c", "c").unwrap();
    assert_eq!(path.vertices, vec!["c"]);
    assert_eq!(path.total_weight, 0.0);
    assert_eq!(path.hops(), 0);
}

#[test]
fn test_start_equals_end_with_self_loop() {
    let mut graph = Graph::new();
    graph.add_vertex("a").unwrap();
    weighted(&mut graph, "a", "a", 5.0);
    assert_eq!(graph.get_shortest_path("a", "a"), vec!["a"]);
}

#[test]
fn test_against_edge_direction_is_empty() {
    let graph = build_linear_graph();
    assert!(dijkstra(&graph, "d", "a").is_none());
    assert!(graph.get_shortest_path("d", "a").is_empty());
    assert!(!graph.has_path("d", "a"));
}

#[test]
fn test_unknown_endpoints_are_empty() {
    let graph = build_linear_graph();
    assert!(graph.get_shortest_path("a", "zz").is_empty());
    assert!(graph.get_shortest_path("zz", "a").is_empty());
    assert!(graph.get_shortest_path("zz", "zz").is_empty());
    assert!(!graph.has_path("zz", "zz"));
}

#[test]
fn test_cycle_terminates() {
    let graph = build_cyclic_graph();
    assert_eq!(graph.get_shortest_path("b", "a"), vec!["b", "c", "a"]);
}

#[test]
fn test_zero_weight_cycle_terminates() {
    let mut graph = Graph::new();
    graph.add_vertices(["a", "b", "c", "x"]).unwrap();
    weighted(&mut graph, "a", "b", 0.0);
    weighted(&mut graph, "b", "a", 0.0);
    weighted(&mut graph, "b", "b", 0.0);
    weighted(&mut graph, "b", "c", 0.0);
    assert_eq!(graph.get_shortest_path("a", "c"), vec!["a", "b", "c"]);
    assert!(graph.get_shortest_path("a", "x").is_empty());
}

#[test]
fn test_missing_weight_costs_zero() {
    let mut graph = Graph::new();
    graph.add_vertices(["s", "m", "t"]).unwrap();
    weighted(&mut graph, "s", "t", 1.0);
    graph.add_edge("s", "m", EdgeSpec::new()).unwrap();
    graph.add_edge("m", "t", EdgeSpec::new()).unwrap();

    let path = graph.shortest_path("s", "t").unwrap();
    assert_eq!(path.vertices, vec!["s", "m", "t"]);
    assert_eq!(path.total_weight, 0.0);
}

#[test]
fn test_global_minimum_selection_beats_local_greedy() {
    // Greedy by cheapest out-edge would walk s → a → ... and miss s → b → t.
    let mut graph = Graph::new();
    graph.add_vertices(["s", "a", "a2", "b", "t"]).unwrap();
    weighted(&mut graph, "s", "a", 1.0);
    weighted(&mut graph, "a", "a2", 10.0);
    weighted(&mut graph, "a2", "t", 10.0);
    weighted(&mut graph, "s", "b", 2.0);
    weighted(&mut graph, "b", "t", 2.0);

    let path = graph.shortest_path("s", "t").unwrap();
    assert_eq!(path.vertices, vec!["s", "b", "t"]);
    assert_eq!(path.total_weight, 4.0);
}

#[test]
fn test_relaxation_updates_longer_first_discovery() {
    // t is first discovered through the direct edge (10), then improved via m.
    let mut graph = Graph::new();
    graph.add_vertices(["s", "m", "t"]).unwrap();
    weighted(&mut graph, "s", "t", 10.0);
    weighted(&mut graph, "s", "m", 1.0);
    weighted(&mut graph, "m", "t", 1.0);

    let path = graph.shortest_path("s", "t").unwrap();
    assert_eq!(path.vertices, vec!["s", "m", "t"]);
    assert_eq!(path.total_weight, 2.0);
}

#[test]
fn test_ties_prefer_first_discovered() {
    // Two equal-cost routes; the one discovered first wins.
    let mut graph = Graph::new();
    graph.add_vertices(["s", "a", "b", "t"]).unwrap();
    weighted(&mut graph, "s", "a", 1.0);
    weighted(&mut graph, "s", "b", 1.0);
    weighted(&mut graph, "a", "t", 1.0);
    weighted(&mut graph, "b", "t", 1.0);

    assert_eq!(graph.get_shortest_path("s", "t"), vec!["s", "a", "t"]);
}

#[test]
fn test_path_after_vertex_removal() {
    let mut graph = build_linear_graph();
    weighted(&mut graph, "a", "c", 5.0);
    graph.remove_vertex("b");
    let path = graph.shortest_path("a", "d").unwrap();
    assert_eq!(path.vertices, vec!["a", "c", "d"]);
    assert_eq!(path.total_weight, 6.0);
}

#[test]
fn test_path_reflects_redefined_edge() {
    let mut graph = build_linear_graph();
    weighted(&mut graph, "a", "d", 4.0);
    assert_eq!(graph.get_shortest_path("a", "d"), vec!["a", "b", "c", "d"]);

    weighted(&mut graph, "a", "d", 2.0);
    assert_eq!(graph.get_shortest_path("a", "d"), vec!["a", "d"]);
}

#[test]
fn test_overflowing_weights_still_reach_target() {
    let mut graph = Graph::new();
    graph.add_vertices(["a", "b", "c"]).unwrap();
    weighted(&mut graph, "a", "b", f64::MAX);
    weighted(&mut graph, "b", "c", f64::MAX);

    assert_eq!(graph.get_shortest_path("a", "c"), vec!["a", "b", "c"]);
    assert!(graph.has_path("a", "c"));
    let path = graph.shortest_path("a", "c").unwrap();
    assert!(path.total_weight.is_infinite());
}

#[test]
fn test_finite_route_beats_saturated_route() {
    let mut graph = Graph::new();
    graph.add_vertices(["a", "b", "c", "d"]).unwrap();
    weighted(&mut graph, "a", "b", f64::MAX);
    weighted(&mut graph, "b", "d", f64::MAX);
    weighted(&mut graph, "a", "c", 1.0);
    weighted(&mut graph, "c", "d", 1.0);

    assert_eq!(graph.get_shortest_path("a", "d"), vec!["a", "c", "d"]);
}

#[test]
fn test_disjoint_islands() {
    let mut graph = Graph::new();
    graph.add_vertices(["a1", "a2", "b1", "b2"]).unwrap();
    weighted(&mut graph, "a1", "a2", 1.0);
    weighted(&mut graph, "b1", "b2", 1.0);

    assert!(graph.has_path("a1", "a2"));
    assert!(graph.has_path("b1", "b2"));
    assert!(!graph.has_path("a1", "b2"));
    assert!(graph.get_shortest_path("b1", "a1").is_empty());
}

/// Minimal adjacency over a fixed list, to check the engine only needs the trait.
struct FixedAdjacency {
    edges: Vec<(&'static str, &'static str, f64)>,
}

impl WeightedAdjacency for FixedAdjacency {
    fn contains(&self, id: &str) -> bool {
        self.edges.iter().any(|(s, d, _)| *s == id || *d == id)
    }

    fn vertex_count(&self) -> usize {
        self.edges.len() * 2
    }

    fn weighted_successors(&self, id: &str) -> Vec<(&str, f64)> {
        self.edges
            .iter()
            .filter(|(s, _, _)| *s == id)
            .map(|(_, d, w)| (*d, *w))
            .collect()
    }
}

#[test]
fn test_engine_works_on_any_weighted_adjacency() {
    let graph = FixedAdjacency {
        edges: vec![("x", "y", 2.0), ("y", "z", 2.0), ("x", "z", 5.0)],
    };
    let path = dijkstra(&graph, "x", "z").unwrap();
    assert_eq!(path.vertices, vec!["x", "y", "z"]);
    assert_eq!(path.total_weight, 4.0);
}
