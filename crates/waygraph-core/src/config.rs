//! Graph configuration.
//!
//! Values are layered with `figment`: built-in defaults, then an optional
//! `waygraph.toml`, then `WAYGRAPH_*` environment variables.
//!
//! # Example
//!
//! ```rust
//! use waygraph_core::GraphConfig;
//!
//! let config = GraphConfig::default().with_max_identity_len(64);
//! assert!(config.validate().is_ok());
//! ```

use std::path::Path;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default configuration file looked up by [`GraphConfig::load`].
pub const CONFIG_FILE_NAME: &str = "waygraph.toml";

/// Prefix of environment variables read by [`GraphConfig::load`].
pub const ENV_PREFIX: &str = "WAYGRAPH_";

/// Default upper bound on vertex identity length, in bytes.
pub const DEFAULT_MAX_IDENTITY_LEN: usize = 256;

/// Tunables for a [`Graph`](crate::Graph).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Longest accepted vertex identity, in bytes.
    pub max_identity_len: usize,
    /// Number of vertices to pre-allocate room for.
    pub vertex_capacity: usize,
    /// Number of edges to pre-allocate room for.
    pub edge_capacity: usize,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            max_identity_len: DEFAULT_MAX_IDENTITY_LEN,
            vertex_capacity: 0,
            edge_capacity: 0,
        }
    }
}

impl GraphConfig {
    /// Loads configuration from defaults, `./waygraph.toml` and the environment.
    ///
    /// A missing file is not an error.
    pub fn load() -> Result<Self> {
        Self::extract(
            Figment::from(Serialized::defaults(Self::default()))
                .merge(Toml::file(CONFIG_FILE_NAME))
                .merge(Env::prefixed(ENV_PREFIX)),
        )
    }

    /// Loads configuration from a specific TOML file layered over defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::Config(format!(
                "config file not found: {}",
                path.display()
            )));
        }
        Self::extract(
            Figment::from(Serialized::defaults(Self::default())).merge(Toml::file(path)),
        )
    }

    fn extract(figment: Figment) -> Result<Self> {
        let config: Self = figment.extract()?;
        config.validate()?;
        tracing::debug!(?config, "graph configuration loaded");
        Ok(config)
    }

    /// Sets the maximum identity length (builder pattern).
    #[must_use]
    pub fn with_max_identity_len(mut self, len: usize) -> Self {
        self.max_identity_len = len;
        self
    }

    /// Sets pre-allocation hints (builder pattern).
    #[must_use]
    pub fn with_capacity(mut self, vertices: usize, edges: usize) -> Self {
        self.vertex_capacity = vertices;
        self.edge_capacity = edges;
        self
    }

    /// Checks that the values are usable.
    pub fn validate(&self) -> Result<()> {
        if self.max_identity_len == 0 {
            return Err(Error::Config(
                "max_identity_len must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}
