//! Game configuration loaded from TOML.
//!
//! Every field has a default, so a config file only needs the values it
//! changes.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Inventory grid configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryConfig {
    /// Number of slots
    pub size: usize,
    /// Slots per row
    pub width: usize,
    pub cell_width: f32,
    pub cell_height: f32,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            size: 20,
            width: 5,
            cell_width: 100.0,
            cell_height: 100.0,
        }
    }
}

/// Where item definitions come from
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemsConfig {
    /// TOML or JSON definition file; built-in items are used when unset
    pub definitions: Option<PathBuf>,
}

/// Native pathfinding library location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathfindingConfig {
    pub enabled: bool,
    pub library_path: PathBuf,
}

impl Default for PathfindingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            library_path: PathBuf::from("native").join(libloading::library_filename("astar")),
        }
    }
}

/// Top-level game configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub inventory: InventoryConfig,
    pub items: ItemsConfig,
    pub pathfinding: PathfindingConfig,
}

impl GameConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let config = Self::from_toml_str(&source)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }
}
