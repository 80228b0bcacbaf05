//! # Configuration
//!
//! Runtime settings for a [`CatalogSystem`](super::CatalogSystem), read from a TOML file.
//!
//! ```toml
//! buffer_size = 32
//! strict = false
//! seed = true
//!
//! # Optional: replaces the built-in seed entirely. `--no-seed` drops these too.
//! [[movies]]
//! id = 1
//! title = "Inception"
//! actors = ["Leonardo DiCaprio", "Joseph Gordon-Levitt"]
//! ```
//!
//! Every key is optional; a missing file section falls back to [`CatalogConfig::default`].

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::catalog::CatalogStore;
use crate::framework::Strictness;
use crate::model::Movie;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogConfig {
    /// Capacity of the actor's request channel.
    pub buffer_size: usize,
    /// Report misses as errors instead of silently ignoring them.
    pub strict: bool,
    /// Start from the built-in seed movies when `movies` is not given.
    pub seed: bool,
    /// Explicit initial movies, in display order.
    pub movies: Option<Vec<Movie>>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            buffer_size: 32,
            strict: false,
            seed: true,
            movies: None,
        }
    }
}

impl CatalogConfig {
    /// Loads and validates configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content, path)
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Self::parse(content, Path::new("<inline>"))
    }

    fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: CatalogConfig =
            toml::from_str(content).map_err(|e| ConfigError::ParseError {
                path: path.to_path_buf(),
                source: e,
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Checks:
    /// - The request channel has room for at least one message
    /// - Explicit movies have unique ids below `u32::MAX`
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.buffer_size == 0 {
            return Err(ConfigError::ValidationError {
                message: "buffer_size must be at least 1".to_string(),
            });
        }
        self.initial_store().map(|_| ())
    }

    /// Starts from an empty catalog, dropping both the built-in seed and any
    /// explicit `movies`.
    pub fn disable_seed(&mut self) {
        self.seed = false;
        self.movies = None;
    }

    pub fn strictness(&self) -> Strictness {
        Strictness::from(self.strict)
    }

    /// The collection state the catalog starts from.
    pub fn initial_store(&self) -> Result<CatalogStore, ConfigError> {
        match &self.movies {
            Some(movies) => CatalogStore::from_movies(movies.clone()).map_err(|e| {
                ConfigError::ValidationError {
                    message: e.to_string(),
                }
            }),
            None if self.seed => Ok(CatalogStore::seeded()),
            None => Ok(CatalogStore::new()),
        }
    }
}
