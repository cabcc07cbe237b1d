//! Error types for waygraph-core.
//!
//! Only mutations fail. Lookups of absent vertices, edges or paths return
//! `None` or an empty collection instead of an error.

use thiserror::Error;

/// Graph error types.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A vertex with this identity is already registered.
    #[error("Vertex '{0}' already exists")]
    DuplicateVertex(String),

    /// The identity is not an acceptable vertex key.
    #[error("Invalid vertex identity: {0}")]
    InvalidIdentity(String),

    /// An edge endpoint (or an update target) is not a registered vertex.
    #[error("Unknown vertex '{0}'")]
    UnknownVertex(String),

    /// An edge for this ordered pair exists and the write refused to redefine it.
    #[error("Edge '{from}' -> '{to}' already exists")]
    DuplicateEdge {
        /// Source vertex identity.
        from: String,
        /// Destination vertex identity.
        to: String,
    },

    /// No edge exists for this ordered pair.
    #[error("Unknown edge '{from}' -> '{to}'")]
    UnknownEdge {
        /// Source vertex identity.
        from: String,
        /// Destination vertex identity.
        to: String,
    },

    /// Edge weights must be finite and non-negative.
    #[error("Invalid edge weight {0}: weights must be finite and >= 0")]
    InvalidWeight(f64),

    /// Configuration could not be loaded or failed validation.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result type alias for graph operations.
pub type Result<T> = std::result::Result<T, Error>;
