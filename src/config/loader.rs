//! Configuration file loader.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::resolver::MAX_SEARCH_RESULTS;

/// Chat configuration loaded from TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Primary knowledge base file.
    pub kb_primary: PathBuf,
    /// Fallback knowledge base file, tried when the primary is unusable.
    pub kb_fallback: PathBuf,
    /// Cap on fallback full-text search results per reply.
    pub max_search_results: usize,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            kb_primary: PathBuf::from("data/reaper-knowledge-base.json"),
            kb_fallback: PathBuf::from("knowledge-base/reaper-knowledge-base.json"),
            max_search_results: MAX_SEARCH_RESULTS,
        }
    }
}

/// Configuration loader that searches multiple locations.
#[derive(Debug)]
pub struct ConfigLoader {
    /// Search paths in order of priority.
    search_paths: Vec<PathBuf>,
}

impl ConfigLoader {
    /// Create a new config loader with default search paths.
    #[must_use]
    pub fn new() -> Self {
        let mut search_paths = Vec::new();

        // 1. Current directory: .reaper-kb-chat.toml
        search_paths.push(PathBuf::from(".reaper-kb-chat.toml"));

        // 2. User config directory: ~/.config/reaper-kb-chat/config.toml
        if let Some(config_dir) = dirs::config_dir() {
            search_paths.push(config_dir.join("reaper-kb-chat").join("config.toml"));
        }

        Self { search_paths }
    }

    /// Create a config loader with a specific config file path.
    #[must_use]
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            search_paths: vec![path],
        }
    }

    /// Load configuration from the first available file, or return defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be parsed.
    pub fn load(&self) -> Result<ChatConfig, ConfigError> {
        for path in &self.search_paths {
            if path.exists() {
                tracing::debug!(path = %path.display(), "Loading config file");
                return Self::load_from_path(path);
            }
        }

        tracing::debug!("No config file found, using defaults");
        Ok(ChatConfig::default())
    }

    /// Load configuration from a specific path.
    fn load_from_path(path: &PathBuf) -> Result<ChatConfig, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.clone(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.clone(),
            source: e,
        })
    }

    /// Get the search paths for debugging.
    #[must_use]
    pub fn search_paths(&self) -> &[PathBuf] {
        &self.search_paths
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors that can occur during configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
}
