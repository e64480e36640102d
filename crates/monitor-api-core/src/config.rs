//! Configuration for model discovery and payload inspection.
//!
//! This module defines the `Config` struct that selects where model schemas
//! come from and how decoded payloads are rendered. The configuration can be
//! loaded from a YAML file or created programmatically.
//!
//! # Examples
//!
//! ```no_run
//! use monitor_api_core::config::Config;
//!
//! # #[tokio::main]
//! # async fn main() -> monitor_api_core::Result<()> {
//! // Create a new config programmatically
//! let mut config = Config::new("openapi.yaml");
//! config.models = vec!["LogsQueryFilter".to_string()];
//! config.pretty = true;
//!
//! // Or load from a config file
//! let config = Config::from_file("monitor-api.yaml").await?;
//! # Ok(())
//! # }
//! ```

// Internal imports (std, crate)
use std::path::Path;

// External imports (alphabetized)
use serde::{Deserialize, Serialize};
use tokio::fs;

/// Configuration for model discovery
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Path or http(s) URL of the OpenAPI document; unset means built-in models only
    #[serde(default)]
    pub schema_source: Option<String>,

    /// Models to load from the document; empty loads every object schema
    #[serde(default)]
    pub models: Vec<String>,

    /// Pretty-print encoded payloads
    #[serde(default)]
    pub pretty: bool,
}

impl Config {
    /// Create a new Config reading models from `schema_source`
    pub fn new(schema_source: impl Into<String>) -> Self {
        Self {
            schema_source: Some(schema_source.into()),
            ..Self::default()
        }
    }

    /// Load configuration from a file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let content = fs::read_to_string(path).await?;
        let config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a file
    pub async fn save<P: AsRef<Path>>(&self, path: P) -> crate::Result<()> {
        let content = serde_yaml::to_string(self)?;
        fs::write(path, content).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_config_roundtrip() -> crate::Result<()> {
        let dir = tempdir()?;
        let file_path = dir.path().join("config.yaml");

        let mut config = Config::new("openapi.json");
        config.models = vec!["LogsQueryFilter".to_string()];
        config.save(&file_path).await?;

        let loaded = Config::from_file(&file_path).await?;
        assert_eq!(loaded, config);
        assert_eq!(loaded.schema_source.as_deref(), Some("openapi.json"));
        assert!(!loaded.pretty);
        Ok(())
    }

    #[tokio::test]
    async fn test_config_defaults() -> crate::Result<()> {
        let dir = tempdir()?;
        let file_path = dir.path().join("config.yaml");
        tokio::fs::write(&file_path, "pretty: true\n").await?;

        let loaded = Config::from_file(&file_path).await?;
        assert_eq!(loaded.schema_source, None);
        assert!(loaded.models.is_empty());
        assert!(loaded.pretty);
        Ok(())
    }
}
