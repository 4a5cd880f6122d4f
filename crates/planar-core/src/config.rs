//! Configuration for planar
//!
//! Configuration is an optional TOML file; every field has a default, so an
//! empty file (or no file at all) yields [`PlanarConfig::default`].

pub mod types;

use std::fs;
use std::path::Path;

use crate::error::{PlanarError, Result};

pub use types::{
    GraphConfig, PlanarConfig, RouteConfig, SearchConfig, CONFIG_FORMAT_VERSION,
    DEFAULT_SIZE_HINT,
};

impl PlanarConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: PlanarConfig = toml::from_str(&content)?;
        config.validate()?;

        if config.version != CONFIG_FORMAT_VERSION {
            tracing::warn!(
                version = config.version,
                expected = CONFIG_FORMAT_VERSION,
                "config version mismatch"
            );
        }

        Ok(config)
    }

    /// Load configuration from an optional path, falling back to defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| PlanarError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Reject values that would make lookups or traversal meaningless
    pub fn validate(&self) -> Result<()> {
        let tolerance = self.graph.lookup_tolerance;
        if !tolerance.is_finite() || tolerance < 0.0 {
            crate::bail_invalid!("graph.lookup_tolerance", tolerance);
        }
        if self.search.size_hint == 0 {
            crate::bail_invalid!("search.size_hint", self.search.size_hint);
        }
        Ok(())
    }
}
