//! # `Waygraph` Core
//!
//! A small in-memory directed, weighted graph with an embedded
//! single-source, single-target shortest-path query.
//!
//! ## Features
//!
//! - **String identities**: vertices are addressed by unique names
//! - **Opaque payloads**: vertices and edges carry `serde_json::Value`
//! - **Cascade delete**: removing a vertex removes every edge touching it
//! - **Explicit writes**: `WriteMode::{Insert, Upsert, UpdateOnly}`
//! - **Dijkstra**: global minimum selection over non-negative weights
//!
//! ## Quick Start
//!
//! ```rust
//! use waygraph_core::{EdgeSpec, Graph};
//!
//! fn main() -> Result<(), waygraph_core::Error> {
//!     let mut graph = Graph::new();
//!     graph.add_vertices(["Home", "B", "D", "Target"])?;
//!     graph.add_edge("Home", "B", EdgeSpec::weighted(2.0))?;
//!     graph.add_edge("B", "D", EdgeSpec::weighted(1.0))?;
//!     graph.add_edge("D", "Target", EdgeSpec::weighted(6.0))?;
//!
//!     let route = graph.get_shortest_path("Home", "Target");
//!     assert_eq!(route, vec!["Home", "B", "D", "Target"]);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![cfg_attr(test, allow(clippy::float_cmp, clippy::doc_markdown))]

pub mod config;
pub mod error;
pub mod graph;

pub use config::GraphConfig;
pub use error::{Error, Result};
pub use graph::{Edge, EdgeSpec, Graph, ShortestPath, Vertex, WeightedAdjacency, WriteMode};
