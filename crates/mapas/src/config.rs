//! Directory configuration loaded from TOML.
//!
//! ```toml
//! default_page_size = 3
//! pagination_radius = 1
//!
//! [page_sizes]
//! opportunity = 5
//! ```

use mapas_core::query::DEFAULT_PAGE_SIZE;
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, path::Path};
use thiserror::Error as ThisError;

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("failed to read config '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("page size for '{entity}' must be greater than zero")]
    ZeroPageSize { entity: String },
}

///
/// DirectoryConfig
///
/// `page_sizes` is keyed by entity name (`agent`, `space`, `event`,
/// `opportunity`, `project`); entities without an entry use
/// `default_page_size`.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct DirectoryConfig {
    pub default_page_size: u32,
    pub pagination_radius: u32,
    pub page_sizes: BTreeMap<String, u32>,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            pagination_radius: 1,
            page_sizes: BTreeMap::new(),
        }
    }
}

impl DirectoryConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;

        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_page_size == 0 {
            return Err(ConfigError::ZeroPageSize {
                entity: "default".to_string(),
            });
        }

        if let Some((entity, _)) = self.page_sizes.iter().find(|(_, size)| **size == 0) {
            return Err(ConfigError::ZeroPageSize {
                entity: entity.clone(),
            });
        }

        Ok(())
    }

    /// Page size for the entity named `entity_name`.
    #[must_use]
    pub fn page_size_for(&self, entity_name: &str) -> u32 {
        self.page_sizes
            .get(entity_name)
            .copied()
            .unwrap_or(self.default_page_size)
    }
}

///
/// TESTS
///
