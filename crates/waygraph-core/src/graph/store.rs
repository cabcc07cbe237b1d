//! In-memory graph store with bidirectional adjacency.
//!
//! Vertices and edges live in generational arenas. Each vertex record keeps
//! its outgoing and incoming adjacency as `neighbor key -> edge key` maps, so
//! both views are derived from the single edge arena and cannot drift from it.

use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use serde_json::Value;

use crate::config::GraphConfig;
use crate::error::{Error, Result};

use super::arena::{Arena, ArenaKey};
use super::shortest_path::{self, ShortestPath, WeightedAdjacency};
use super::types::{Edge, EdgeSpec, Vertex, WriteMode};

#[derive(Debug, Clone)]
struct VertexRecord {
    vertex: Vertex,
    /// destination vertex -> edge
    outgoing: IndexMap<ArenaKey, ArenaKey>,
    /// source vertex -> edge
    incoming: IndexMap<ArenaKey, ArenaKey>,
}

impl VertexRecord {
    fn new(vertex: Vertex) -> Self {
        Self {
            vertex,
            outgoing: IndexMap::new(),
            incoming: IndexMap::new(),
        }
    }
}

#[derive(Debug, Clone)]
struct EdgeRecord {
    edge: Edge,
    source: ArenaKey,
    destination: ArenaKey,
}

/// A directed, weighted graph keyed by string identities.
///
/// Each `Graph` is an independent value; mutation needs `&mut self`, so
/// sharing one across threads requires an external lock.
///
/// # Example
///
/// ```rust
/// use waygraph_core::{EdgeSpec, Graph};
///
/// let mut graph = Graph::new();
/// graph.add_vertices(["Home", "Shop", "Park"]).unwrap();
/// graph.add_edge("Home", "Shop", EdgeSpec::weighted(4.0)).unwrap();
/// graph.add_edge("Shop", "Park", EdgeSpec::weighted(1.0)).unwrap();
///
/// assert_eq!(graph.get_shortest_path("Home", "Park"), vec!["Home", "Shop", "Park"]);
/// assert!(!graph.has_path("Park", "Home"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Graph {
    config: GraphConfig,
    ids: FxHashMap<String, ArenaKey>,
    vertices: Arena<VertexRecord>,
    edges: Arena<EdgeRecord>,
}

impl Graph {
    /// Creates an empty graph with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty graph using `config` for validation and pre-allocation.
    #[must_use]
    pub fn with_config(config: GraphConfig) -> Self {
        let mut ids = FxHashMap::default();
        ids.reserve(config.vertex_capacity);
        Self {
            ids,
            vertices: Arena::with_capacity(config.vertex_capacity),
            edges: Arena::with_capacity(config.edge_capacity),
            config,
        }
    }

    /// Creates an empty graph with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(expected_vertices: usize, expected_edges: usize) -> Self {
        Self::with_config(GraphConfig::default().with_capacity(expected_vertices, expected_edges))
    }

    /// Returns the configuration this graph was built with.
    #[must_use]
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    fn validate_identity(&self, id: &str) -> Result<()> {
        if id.trim().is_empty() {
            return Err(Error::InvalidIdentity(
                "vertex identity cannot be empty or whitespace-only".to_string(),
            ));
        }
        if id.len() > self.config.max_identity_len {
            return Err(Error::InvalidIdentity(format!(
                "vertex identity is {} bytes, limit is {}",
                id.len(),
                self.config.max_identity_len
            )));
        }
        if id.chars().any(char::is_control) {
            return Err(Error::InvalidIdentity(format!(
                "vertex identity {id:?} contains control characters"
            )));
        }
        Ok(())
    }

    fn key_of(&self, id: &str) -> Option<ArenaKey> {
        self.ids.get(id).copied()
    }

    fn record(&self, id: &str) -> Option<&VertexRecord> {
        self.vertices.get(self.key_of(id)?)
    }

    fn insert_vertex(&mut self, id: String, payload: Value) -> ArenaKey {
        let key = self
            .vertices
            .insert(VertexRecord::new(Vertex::new(id.clone(), payload)));
        self.ids.insert(id, key);
        key
    }

    // ── Vertex CRUD ────────────────────────────────────────────────────

    /// Adds a vertex with no payload.
    ///
    /// # Errors
    ///
    /// - `Error::InvalidIdentity` if `id` is empty, whitespace-only, contains
    ///   control characters or exceeds `max_identity_len`.
    /// - `Error::DuplicateVertex` if `id` is already registered.
    pub fn add_vertex(&mut self, id: impl Into<String>) -> Result<()> {
        self.put_vertex(id, Value::Null, WriteMode::Insert)
    }

    /// Adds a vertex carrying `payload`. Fails like [`Graph::add_vertex`].
    pub fn add_vertex_with(&mut self, id: impl Into<String>, payload: Value) -> Result<()> {
        self.put_vertex(id, payload, WriteMode::Insert)
    }

    /// Adds each vertex in order, stopping at the first failure.
    ///
    /// Vertices added before the failing one stay in the graph.
    pub fn add_vertices<I, S>(&mut self, ids: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for id in ids {
            self.add_vertex(id)?;
        }
        Ok(())
    }

    /// Writes a vertex payload according to `mode`.
    ///
    /// # Errors
    ///
    /// - `Error::DuplicateVertex` for `Insert` on an existing vertex.
    /// - `Error::UnknownVertex` for `UpdateOnly` on a missing vertex.
    /// - `Error::InvalidIdentity` when a vertex would be created with a
    ///   malformed identity.
    pub fn put_vertex(
        &mut self,
        id: impl Into<String>,
        payload: Value,
        mode: WriteMode,
    ) -> Result<()> {
        let id = id.into();
        match (self.key_of(&id), mode) {
            (Some(_), WriteMode::Insert) => Err(Error::DuplicateVertex(id)),
            (Some(key), WriteMode::Upsert | WriteMode::UpdateOnly) => {
                if let Some(record) = self.vertices.get_mut(key) {
                    record.vertex.set_payload(payload);
                }
                Ok(())
            }
            (None, WriteMode::UpdateOnly) => Err(Error::UnknownVertex(id)),
            (None, WriteMode::Insert | WriteMode::Upsert) => {
                self.validate_identity(&id)?;
                self.insert_vertex(id, payload);
                Ok(())
            }
        }
    }

    /// Returns true if a vertex with the given identity exists.
    #[must_use]
    pub fn has_vertex(&self, id: impl AsRef<str>) -> bool {
        self.ids.contains_key(id.as_ref())
    }

    /// Gets a vertex by identity.
    #[must_use]
    pub fn get_vertex(&self, id: impl AsRef<str>) -> Option<&Vertex> {
        self.record(id.as_ref()).map(|r| &r.vertex)
    }

    /// Gets a vertex payload, or `None` if the vertex does not exist.
    #[must_use]
    pub fn get_vertex_value(&self, id: impl AsRef<str>) -> Option<&Value> {
        self.get_vertex(id).map(Vertex::payload)
    }

    /// Sets a vertex payload, creating the vertex if it is missing.
    ///
    /// Only fails when creating a vertex with a malformed identity.
    pub fn set_vertex_value(&mut self, id: impl Into<String>, payload: Value) -> Result<()> {
        self.put_vertex(id, payload, WriteMode::Upsert)
    }

    /// Removes a vertex and every edge touching it (cascade delete).
    ///
    /// Returns `None` without touching the graph if the vertex is absent.
    pub fn remove_vertex(&mut self, id: impl AsRef<str>) -> Option<Vertex> {
        let id = id.as_ref();
        let key = self.ids.remove(id)?;
        let record = self.vertices.remove(key)?;

        let mut removed = 0usize;
        for (dest_key, edge_key) in record.outgoing {
            if self.edges.remove(edge_key).is_some() {
                removed += 1;
            }
            if let Some(dest) = self.vertices.get_mut(dest_key) {
                dest.incoming.shift_remove(&key);
            }
        }
        for (source_key, edge_key) in record.incoming {
            // Self-loops were already dropped with the outgoing side.
            if self.edges.remove(edge_key).is_some() {
                removed += 1;
            }
            if let Some(source) = self.vertices.get_mut(source_key) {
                source.outgoing.shift_remove(&key);
            }
        }

        if removed > 0 {
            tracing::debug!(vertex = id, edges = removed, "cascade-removed edges");
        }
        Some(record.vertex)
    }

    /// Returns all vertices. Order is not significant.
    #[must_use]
    pub fn vertices(&self) -> Vec<&Vertex> {
        self.vertices.values().map(|r| &r.vertex).collect()
    }

    /// Returns the total number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    // ── Edge CRUD ──────────────────────────────────────────────────────

    /// Adds the directed edge `source -> destination`, redefining it if it
    /// already exists.
    ///
    /// # Errors
    ///
    /// - `Error::UnknownVertex` if either endpoint is not registered.
    /// - `Error::InvalidWeight` if the weight is negative or not finite.
    pub fn add_edge(
        &mut self,
        source: impl AsRef<str>,
        destination: impl AsRef<str>,
        spec: EdgeSpec,
    ) -> Result<()> {
        self.put_edge(source, destination, spec, WriteMode::Upsert)
    }

    /// Writes the directed edge `source -> destination` according to `mode`.
    ///
    /// Both endpoints must exist. An existing edge is redefined: its weight
    /// and payload are replaced by `spec`.
    ///
    /// # Errors
    ///
    /// - `Error::UnknownVertex` if either endpoint is not registered.
    /// - `Error::InvalidWeight` if the weight is negative or not finite.
    /// - `Error::DuplicateEdge` for `Insert` on an existing edge.
    /// - `Error::UnknownEdge` for `UpdateOnly` on a missing edge.
    pub fn put_edge(
        &mut self,
        source: impl AsRef<str>,
        destination: impl AsRef<str>,
        spec: EdgeSpec,
        mode: WriteMode,
    ) -> Result<()> {
        let (source, destination) = (source.as_ref(), destination.as_ref());
        let source_key = self
            .key_of(source)
            .ok_or_else(|| Error::UnknownVertex(source.to_string()))?;
        let dest_key = self
            .key_of(destination)
            .ok_or_else(|| Error::UnknownVertex(destination.to_string()))?;
        spec.validate()?;

        match (self.edge_key(source_key, dest_key), mode) {
            (Some(_), WriteMode::Insert) => Err(Error::DuplicateEdge {
                from: source.to_string(),
                to: destination.to_string(),
            }),
            (Some(edge_key), WriteMode::Upsert | WriteMode::UpdateOnly) => {
                if let Some(record) = self.edges.get_mut(edge_key) {
                    tracing::debug!(source, destination, "redefining edge");
                    record.edge.redefine(spec);
                }
                Ok(())
            }
            (None, WriteMode::UpdateOnly) => Err(Error::UnknownEdge {
                from: source.to_string(),
                to: destination.to_string(),
            }),
            (None, WriteMode::Insert | WriteMode::Upsert) => {
                let edge = Edge::new(source.to_string(), destination.to_string(), spec);
                self.insert_edge(source_key, dest_key, edge);
                Ok(())
            }
        }
    }

    fn edge_key(&self, source_key: ArenaKey, dest_key: ArenaKey) -> Option<ArenaKey> {
        self.vertices
            .get(source_key)?
            .outgoing
            .get(&dest_key)
            .copied()
    }

    fn insert_edge(&mut self, source_key: ArenaKey, dest_key: ArenaKey, edge: Edge) {
        let edge_key = self.edges.insert(EdgeRecord {
            edge,
            source: source_key,
            destination: dest_key,
        });
        if let Some(source) = self.vertices.get_mut(source_key) {
            source.outgoing.insert(dest_key, edge_key);
        }
        if let Some(dest) = self.vertices.get_mut(dest_key) {
            dest.incoming.insert(source_key, edge_key);
        }
    }

    /// Gets the full edge record for `source -> destination`.
    #[must_use]
    pub fn edge(&self, source: impl AsRef<str>, destination: impl AsRef<str>) -> Option<&Edge> {
        let source_key = self.key_of(source.as_ref())?;
        let dest_key = self.key_of(destination.as_ref())?;
        let edge_key = self.edge_key(source_key, dest_key)?;
        self.edges.get(edge_key).map(|r| &r.edge)
    }

    /// Gets the payload of the edge `source -> destination`.
    ///
    /// Accepts identities or `&Vertex` handles.
    #[must_use]
    pub fn get_edge(
        &self,
        source: impl AsRef<str>,
        destination: impl AsRef<str>,
    ) -> Option<&Value> {
        self.edge(source, destination).map(Edge::payload)
    }

    /// Alias of [`Graph::get_edge`].
    #[must_use]
    pub fn get_edge_value(
        &self,
        source: impl AsRef<str>,
        destination: impl AsRef<str>,
    ) -> Option<&Value> {
        self.get_edge(source, destination)
    }

    /// Checks if the edge `source -> destination` exists.
    #[must_use]
    pub fn has_edge(&self, source: impl AsRef<str>, destination: impl AsRef<str>) -> bool {
        self.edge(source, destination).is_some()
    }

    /// Sets an edge payload, creating missing endpoints and the edge itself.
    ///
    /// An existing edge keeps its weight. A created edge has no weight.
    /// Only fails when a vertex would be created with a malformed identity;
    /// in that case nothing is written.
    pub fn set_edge_value(
        &mut self,
        source: impl AsRef<str>,
        destination: impl AsRef<str>,
        payload: Value,
    ) -> Result<()> {
        let (source, destination) = (source.as_ref(), destination.as_ref());
        for id in [source, destination] {
            if !self.has_vertex(id) {
                self.validate_identity(id)?;
            }
        }
        let source_key = match self.key_of(source) {
            Some(key) => key,
            None => self.insert_vertex(source.to_string(), Value::Null),
        };
        let dest_key = match self.key_of(destination) {
            Some(key) => key,
            None => self.insert_vertex(destination.to_string(), Value::Null),
        };

        match self.edge_key(source_key, dest_key) {
            Some(edge_key) => {
                if let Some(record) = self.edges.get_mut(edge_key) {
                    record.edge.set_payload(payload);
                }
            }
            None => {
                let spec = EdgeSpec::new().with_payload(payload);
                let edge = Edge::new(source.to_string(), destination.to_string(), spec);
                self.insert_edge(source_key, dest_key, edge);
            }
        }
        Ok(())
    }

    /// Removes the edge `source -> destination`, cleaning up both adjacency views.
    pub fn remove_edge(
        &mut self,
        source: impl AsRef<str>,
        destination: impl AsRef<str>,
    ) -> Option<Edge> {
        let source_key = self.key_of(source.as_ref())?;
        let dest_key = self.key_of(destination.as_ref())?;
        let edge_key = self.edge_key(source_key, dest_key)?;
        let record = self.edges.remove(edge_key)?;

        if let Some(source) = self.vertices.get_mut(record.source) {
            source.outgoing.shift_remove(&record.destination);
        }
        if let Some(dest) = self.vertices.get_mut(record.destination) {
            dest.incoming.shift_remove(&record.source);
        }
        Some(record.edge)
    }

    /// Returns all edges. Order is not significant.
    #[must_use]
    pub fn edges(&self) -> Vec<&Edge> {
        self.edges.values().map(|r| &r.edge).collect()
    }

    /// Returns the total number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    // ── Adjacency ──────────────────────────────────────────────────────

    fn adjacency<'a>(
        &'a self,
        view: &'a IndexMap<ArenaKey, ArenaKey>,
    ) -> IndexMap<&'a str, &'a Edge> {
        view.iter()
            .filter_map(|(&neighbor, &edge_key)| {
                let neighbor = self.vertices.get(neighbor)?;
                let edge = self.edges.get(edge_key)?;
                Some((neighbor.vertex.id(), &edge.edge))
            })
            .collect()
    }

    /// Outgoing adjacency: `destination id -> edge`, in insertion order.
    ///
    /// Empty when `id` is unknown.
    #[must_use]
    pub fn get_vertices_from(&self, id: impl AsRef<str>) -> IndexMap<&str, &Edge> {
        self.record(id.as_ref())
            .map(|r| self.adjacency(&r.outgoing))
            .unwrap_or_default()
    }

    /// Incoming adjacency: `source id -> edge`, in insertion order.
    ///
    /// Empty when `id` is unknown.
    #[must_use]
    pub fn get_vertices_to(&self, id: impl AsRef<str>) -> IndexMap<&str, &Edge> {
        self.record(id.as_ref())
            .map(|r| self.adjacency(&r.incoming))
            .unwrap_or_default()
    }

    /// Returns the out-degree of a vertex (0 if unknown).
    #[must_use]
    pub fn out_degree(&self, id: impl AsRef<str>) -> usize {
        self.record(id.as_ref()).map_or(0, |r| r.outgoing.len())
    }

    /// Returns the in-degree of a vertex (0 if unknown).
    #[must_use]
    pub fn in_degree(&self, id: impl AsRef<str>) -> usize {
        self.record(id.as_ref()).map_or(0, |r| r.incoming.len())
    }

    /// Clears all vertices and edges. Configuration is kept.
    pub fn clear(&mut self) {
        self.ids.clear();
        self.vertices.clear();
        self.edges.clear();
    }

    // ── Paths ──────────────────────────────────────────────────────────

    /// Returns the lowest-cost path from `start` to `end`, both inclusive.
    ///
    /// Empty if either endpoint is unknown or `end` is unreachable.
    #[must_use]
    pub fn get_shortest_path(&self, start: impl AsRef<str>, end: impl AsRef<str>) -> Vec<String> {
        self.shortest_path(start, end)
            .map(|path| path.vertices)
            .unwrap_or_default()
    }

    /// Like [`Graph::get_shortest_path`], also reporting the total weight.
    #[must_use]
    pub fn shortest_path(
        &self,
        start: impl AsRef<str>,
        end: impl AsRef<str>,
    ) -> Option<ShortestPath> {
        shortest_path::dijkstra(self, start.as_ref(), end.as_ref())
    }

    /// Returns true if some path leads from `start` to `end`.
    #[must_use]
    pub fn has_path(&self, start: impl AsRef<str>, end: impl AsRef<str>) -> bool {
        !self.get_shortest_path(start, end).is_empty()
    }
}

impl WeightedAdjacency for Graph {
    fn contains(&self, id: &str) -> bool {
        self.has_vertex(id)
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn weighted_successors(&self, id: &str) -> Vec<(&str, f64)> {
        self.get_vertices_from(id)
            .into_iter()
            .map(|(dest, edge)| (dest, edge.cost()))
            .collect()
    }
}
