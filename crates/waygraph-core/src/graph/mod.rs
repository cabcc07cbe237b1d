//! In-memory directed, weighted graph.
//!
//! Provides the vertex/edge store with bidirectional adjacency and the
//! Dijkstra shortest-path engine that reads it through
//! [`WeightedAdjacency`](shortest_path::WeightedAdjacency).
//!
//! # Example
//!
//! ```rust
//! use waygraph_core::graph::{EdgeSpec, Graph};
//!
//! let mut graph = Graph::new();
//! graph.add_vertices(["Home", "A", "B", "Target"]).unwrap();
//! graph.add_edge("Home", "A", EdgeSpec::weighted(3.0)).unwrap();
//! graph.add_edge("Home", "B", EdgeSpec::weighted(2.0)).unwrap();
//! graph.add_edge("A", "Target", EdgeSpec::weighted(1.0)).unwrap();
//! graph.add_edge("B", "Target", EdgeSpec::weighted(4.0)).unwrap();
//!
//! let path = graph.shortest_path("Home", "Target").unwrap();
//! assert_eq!(path.vertices, vec!["Home", "A", "Target"]);
//! assert_eq!(path.total_weight, 4.0);
//! ```

mod arena;
pub mod shortest_path;
mod store;
mod types;

#[cfg(test)]
mod shortest_path_tests;

pub use shortest_path::{dijkstra, ShortestPath, WeightedAdjacency};
pub use store::Graph;
pub use types::{Edge, EdgeSpec, Vertex, WriteMode};
