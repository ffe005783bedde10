//! Configuration management

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::browse::{DEFAULT_LOAD_MORE_STEP, DEFAULT_PAGE_SIZE, Pager};
use crate::theme::ThemeMode;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Light or dark appearance, remembered between runs
    #[serde(default)]
    pub theme: ThemeMode,

    /// JSON catalog to load instead of the built-in one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,

    /// Courses shown before "load more"
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Courses revealed by each "load more"
    #[serde(default = "default_load_more_step")]
    pub load_more_step: usize,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_load_more_step() -> usize {
    DEFAULT_LOAD_MORE_STEP
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: ThemeMode::default(),
            catalog_path: None,
            page_size: DEFAULT_PAGE_SIZE,
            load_more_step: DEFAULT_LOAD_MORE_STEP,
        }
    }
}

impl Config {
    /// Load configuration from disk, or create default if not exists
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from a specific file, writing defaults if missing.
    ///
    /// An unwritable config location is not fatal: the defaults are used.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {:?}", path))?;
            serde_json::from_str(&contents).with_context(|| "Failed to parse config.json")
        } else {
            let config = Self::default();
            if let Err(err) = config.save_to(path) {
                tracing::warn!("Using default config: {err:#}");
            }
            Ok(config)
        }
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to a specific file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }

        let contents =
            serde_json::to_string_pretty(self).with_context(|| "Failed to serialize config")?;

        std::fs::write(path, contents)
            .with_context(|| format!("Failed to write config to {:?}", path))?;

        Ok(())
    }

    fn project_dirs() -> Result<ProjectDirs> {
        ProjectDirs::from("", "", "course-catalog")
            .context("Failed to determine application directories")
    }

    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::project_dirs()?.config_dir().join("config.json"))
    }

    /// Get the data directory path
    pub fn data_dir() -> Result<PathBuf> {
        Ok(Self::project_dirs()?.data_dir().to_path_buf())
    }

    /// Get the log file path
    pub fn log_path() -> Result<PathBuf> {
        Ok(Self::data_dir()?.join("catalog.log"))
    }

    /// Reveal cursor configured with this config's page sizes
    pub fn pager(&self) -> Pager {
        Pager::new(self.page_size, self.load_more_step)
    }
}
