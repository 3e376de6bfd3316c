//! Optional `menu.ron` next to the binary's working directory.
//!
//! Every field has a default, so a partial file only overrides what it names.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use menu_catalog::{CatalogSettings, DEFAULT_BASE_URL};
use menu_core::{BrowseSettings, DEFAULT_CATEGORY, DEFAULT_PLACEHOLDERS};
use menu_logging::menu_info;
use serde::Deserialize;

pub(crate) const CONFIG_FILENAME: &str = "menu.ron";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub(crate) struct AppConfig {
    pub base_url: String,
    pub default_category: String,
    pub debounce_ms: u64,
    pub placeholder_count: usize,
    pub log_file: PathBuf,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            default_category: DEFAULT_CATEGORY.to_string(),
            debounce_ms: 500,
            placeholder_count: DEFAULT_PLACEHOLDERS,
            log_file: PathBuf::from("menu.log"),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub(crate) fn catalog_settings(&self) -> CatalogSettings {
        CatalogSettings {
            base_url: self.base_url.clone(),
        }
    }

    pub(crate) fn browse_settings(&self) -> BrowseSettings {
        BrowseSettings {
            default_category: self.default_category.clone(),
            debounce: Duration::from_millis(self.debounce_ms),
            placeholder_count: self.placeholder_count,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub(crate) enum ConfigError {
    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: ron::error::SpannedError,
    },
}

/// Loads `menu.ron` from `dir`. A missing file yields the defaults.
pub(crate) fn load_config(dir: &Path) -> Result<AppConfig, ConfigError> {
    let path = dir.join(CONFIG_FILENAME);
    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(AppConfig::default());
        }
        Err(source) => return Err(ConfigError::Read { path, source }),
    };

    let config = ron::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.clone(),
        source,
    })?;
    menu_info!("Loaded config from {:?}", path);
    Ok(config)
}
