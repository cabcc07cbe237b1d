//! Single-source, single-target shortest path (Dijkstra).
//!
//! The engine only sees a graph through [`WeightedAdjacency`], so any store
//! exposing weighted successors can be searched without reimplementation.
//!
//! Vertex selection always takes the global minimum-distance unvisited
//! vertex from a binary min-heap. Stale heap entries are skipped on pop
//! (lazy deletion), and ties are broken by discovery order so results are
//! deterministic for a given insertion history.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

/// Read access the shortest-path engine needs from a graph.
pub trait WeightedAdjacency {
    /// Returns true if `id` names a vertex of the graph.
    fn contains(&self, id: &str) -> bool;

    /// Number of vertices, used as a capacity hint.
    fn vertex_count(&self) -> usize;

    /// Returns outgoing edges of `id` as `(destination, cost)` pairs.
    ///
    /// Costs are non-negative; an unweighted edge reports 0.
    fn weighted_successors(&self, id: &str) -> Vec<(&str, f64)>;
}

/// A lowest-cost path between two vertices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortestPath {
    /// Vertex identities from start to end, both inclusive.
    pub vertices: Vec<String>,
    /// Sum of edge costs along the path.
    pub total_weight: f64,
}

impl ShortestPath {
    /// Number of edges traversed.
    #[must_use]
    pub fn hops(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }

    /// Start vertex identity.
    #[must_use]
    pub fn source(&self) -> Option<&str> {
        self.vertices.first().map(String::as_str)
    }

    /// End vertex identity.
    #[must_use]
    pub fn target(&self) -> Option<&str> {
        self.vertices.last().map(String::as_str)
    }
}

/// Totally ordered distance for the priority queue.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Distance(f64);

impl Eq for Distance {}

impl PartialOrd for Distance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Distance {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Computes the lowest-cost path from `start` to `end`.
///
/// Returns `None` if either endpoint is unknown or `end` cannot be reached.
/// `start == end` yields the single-vertex path with weight 0.
///
/// # Example
///
/// ```rust
/// use waygraph_core::graph::shortest_path::dijkstra;
/// use waygraph_core::{EdgeSpec, Graph};
///
/// let mut graph = Graph::new();
/// graph.add_vertices(["a", "b", "c"]).unwrap();
/// graph.add_edge("a", "b", EdgeSpec::weighted(5.0)).unwrap();
/// graph.add_edge("a", "c", EdgeSpec::weighted(1.0)).unwrap();
/// graph.add_edge("c", "b", EdgeSpec::weighted(1.0)).unwrap();
///
/// let path = dijkstra(&graph, "a", "b").unwrap();
/// assert_eq!(path.vertices, vec!["a", "c", "b"]);
/// assert_eq!(path.total_weight, 2.0);
/// ```
#[must_use]
pub fn dijkstra<'a, G>(graph: &'a G, start: &'a str, end: &'a str) -> Option<ShortestPath>
where
    G: WeightedAdjacency + ?Sized,
{
    if !graph.contains(start) || !graph.contains(end) {
        tracing::debug!(start, end, "shortest path: unknown endpoint");
        return None;
    }

    let capacity = graph.vertex_count();
    let mut distance: FxHashMap<&str, f64> = FxHashMap::default();
    let mut via: FxHashMap<&str, &str> = FxHashMap::default();
    let mut visited: FxHashSet<&str> = FxHashSet::default();
    distance.reserve(capacity);
    visited.reserve(capacity);

    // (distance, discovery sequence, vertex); the sequence breaks ties.
    let mut frontier: BinaryHeap<Reverse<(Distance, u64, &str)>> = BinaryHeap::new();
    let mut sequence = 0u64;
    distance.insert(start, 0.0);
    frontier.push(Reverse((Distance(0.0), sequence, start)));

    while let Some(Reverse((Distance(current_distance), _, current))) = frontier.pop() {
        if !visited.insert(current) {
            continue;
        }
        tracing::trace!(vertex = current, distance = current_distance, "finalized");

        if current == end {
            let vertices = reconstruct(&via, start, end)?;
            tracing::debug!(
                start,
                end,
                hops = vertices.len() - 1,
                total_weight = current_distance,
                visited = visited.len(),
                "shortest path found"
            );
            return Some(ShortestPath {
                vertices,
                total_weight: current_distance,
            });
        }

        for (neighbor, cost) in graph.weighted_successors(current) {
            if visited.contains(neighbor) {
                continue;
            }
            let candidate = current_distance + cost;
            // Sums of large finite weights can saturate to +inf; a first
            // discovery is still recorded so the vertex stays reachable.
            let improves = match distance.get(neighbor) {
                Some(&known) => candidate < known,
                None => true,
            };
            if improves {
                distance.insert(neighbor, candidate);
                via.insert(neighbor, current);
                sequence += 1;
                frontier.push(Reverse((Distance(candidate), sequence, neighbor)));
            }
        }
    }

    tracing::debug!(start, end, visited = visited.len(), "shortest path: unreachable");
    None
}

/// Walks `via` back from `end` to `start` and returns the forward path.
fn reconstruct(via: &FxHashMap<&str, &str>, start: &str, end: &str) -> Option<Vec<String>> {
    let mut path = vec![end.to_string()];
    let mut current = end;
    while current != start {
        current = *via.get(current)?;
        path.push(current.to_string());
    }
    path.reverse();
    Some(path)
}
