//! Graph value types: vertices, edges and write modes.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};

/// A named vertex carrying an opaque payload.
///
/// Vertices are owned by a [`Graph`](crate::Graph); callers get shared
/// references back from lookups. A `&Vertex` can be passed anywhere the graph
/// accepts an identity.
///
/// # Example
///
/// ```rust
/// use waygraph_core::Graph;
/// use serde_json::json;
///
/// let mut graph = Graph::new();
/// graph.add_vertex_with("Home", json!({"floor": 1})).unwrap();
///
/// let home = graph.get_vertex("Home").unwrap();
/// assert_eq!(home.id(), "Home");
/// assert_eq!(home.payload(), &json!({"floor": 1}));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Vertex {
    id: String,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    payload: Value,
}

impl Vertex {
    pub(crate) fn new(id: String, payload: Value) -> Self {
        Self { id, payload }
    }

    /// Returns the vertex identity.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the payload (`Value::Null` when none was set).
    #[must_use]
    pub fn payload(&self) -> &Value {
        &self.payload
    }

    pub(crate) fn set_payload(&mut self, payload: Value) {
        self.payload = payload;
    }
}

impl AsRef<str> for Vertex {
    fn as_ref(&self) -> &str {
        &self.id
    }
}

/// A directed, optionally weighted edge between two vertices.
///
/// A missing weight costs 0 during shortest-path relaxation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Edge {
    source: String,
    destination: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    payload: Value,
}

impl Edge {
    pub(crate) fn new(source: String, destination: String, spec: EdgeSpec) -> Self {
        Self {
            source,
            destination,
            weight: spec.weight,
            payload: spec.payload,
        }
    }

    /// Returns the source vertex identity.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the destination vertex identity.
    #[must_use]
    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Returns the declared weight, if any.
    #[must_use]
    pub fn weight(&self) -> Option<f64> {
        self.weight
    }

    /// Returns the traversal cost: the declared weight, or 0.
    #[must_use]
    pub fn cost(&self) -> f64 {
        self.weight.unwrap_or(0.0)
    }

    /// Returns the payload (`Value::Null` when none was set).
    #[must_use]
    pub fn payload(&self) -> &Value {
        &self.payload
    }

    pub(crate) fn set_payload(&mut self, payload: Value) {
        self.payload = payload;
    }

    pub(crate) fn redefine(&mut self, spec: EdgeSpec) {
        self.weight = spec.weight;
        self.payload = spec.payload;
    }
}

/// Weight and payload of an edge to be written.
///
/// # Example
///
/// ```rust
/// use waygraph_core::EdgeSpec;
/// use serde_json::json;
///
/// let spec = EdgeSpec::weighted(3.0).with_payload(json!({"road": "A1"}));
/// assert_eq!(spec.weight, Some(3.0));
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EdgeSpec {
    /// Traversal cost; `None` costs 0.
    #[serde(default)]
    pub weight: Option<f64>,
    /// Opaque caller payload.
    #[serde(default)]
    pub payload: Value,
}

impl EdgeSpec {
    /// An edge with no weight and no payload.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// An edge with the given weight.
    #[must_use]
    pub fn weighted(weight: f64) -> Self {
        Self {
            weight: Some(weight),
            payload: Value::Null,
        }
    }

    /// Sets the payload (builder pattern).
    #[must_use]
    pub fn with_payload(mut self, payload: Value) -> Self {
        self.payload = payload;
        self
    }

    /// Rejects negative, NaN and infinite weights.
    pub(crate) fn validate(&self) -> Result<()> {
        match self.weight {
            Some(w) if !w.is_finite() || w < 0.0 => Err(Error::InvalidWeight(w)),
            _ => Ok(()),
        }
    }
}

/// How a write treats an existing or missing target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WriteMode {
    /// Create only; fail if the target already exists.
    Insert,
    /// Create if missing, overwrite otherwise.
    Upsert,
    /// Overwrite only; fail if the target is missing.
    UpdateOnly,
}
