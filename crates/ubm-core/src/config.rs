//! Configuration and on-disk locations.
//!
//! Settings live in `config.toml` inside the config directory. The bookmark
//! store lives in the data directory, which defaults to the config directory.
//!
//! ## Resolution order
//!
//! 1. Explicit directories passed in by the caller (CLI flags or the
//!    `UBM_CONFIG_DIR` / `UBM_DATA_DIR` environment variables)
//! 2. The platform config directory from `directories::ProjectDirs`
//!
//! ## Example configuration file
//!
//! ```toml
//! browser = "firefox"
//! display_format = "tree"
//! auto_backup = true
//! max_backups = 5
//! page_size = 15
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{Error, Result};

/// File name of the settings file inside the config directory.
pub const CONFIG_FILENAME: &str = "config.toml";

const MIN_PAGE_SIZE: usize = 3;
const MAX_PAGE_SIZE: usize = 50;

/// Layout used by `show` when no flag overrides it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayFormat {
    /// Bookmarks nested under their category nodes.
    #[default]
    Tree,
    /// Bookmarks grouped by category path, one group after another.
    Flat,
}

/// User settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Command used to open URLs instead of the system default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub browser: Option<String>,
    /// Default layout for `show`.
    pub display_format: DisplayFormat,
    /// Keep a copy of the previous store before every write.
    pub auto_backup: bool,
    /// Number of rotated backups to retain.
    pub max_backups: usize,
    /// Visible rows in selection menus.
    pub page_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            browser: None,
            display_format: DisplayFormat::Tree,
            auto_backup: true,
            max_backups: 5,
            page_size: 15,
        }
    }
}

impl Config {
    /// Load `config.toml` from `config_dir`, falling back to defaults when the
    /// file does not exist.
    pub fn load_from(config_dir: &Path) -> Result<Self> {
        let path = config_dir.join(CONFIG_FILENAME);
        if !path.exists() {
            debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| Error::Config(format!("Failed to read config: {e}")))?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse {}: {e}", path.display())))?;
        Ok(config.sanitized())
    }

    /// Write this configuration to `config_dir/config.toml`.
    pub fn save_to(&self, config_dir: &Path) -> Result<()> {
        fs::create_dir_all(config_dir)
            .map_err(|e| Error::Config(format!("Failed to create config directory: {e}")))?;
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {e}")))?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)
            .map_err(|e| Error::Config(format!("Failed to write config: {e}")))?;
        Ok(())
    }

    /// Write the default configuration unless a file already exists.
    ///
    /// Returns whether a file was created.
    pub fn init(config_dir: &Path) -> Result<bool> {
        if config_dir.join(CONFIG_FILENAME).exists() {
            return Ok(false);
        }
        Self::default().save_to(config_dir)?;
        Ok(true)
    }

    fn sanitized(mut self) -> Self {
        if self.max_backups == 0 {
            warn!("max_backups must be at least 1; using default");
            self.max_backups = Self::default().max_backups;
        }
        if !(MIN_PAGE_SIZE..=MAX_PAGE_SIZE).contains(&self.page_size) {
            let clamped = self.page_size.clamp(MIN_PAGE_SIZE, MAX_PAGE_SIZE);
            warn!("page_size {} out of range; using {clamped}", self.page_size);
            self.page_size = clamped;
        }
        if self.browser.as_deref().is_some_and(|b| b.trim().is_empty()) {
            self.browser = None;
        }
        self
    }
}

/// Resolved config and data directories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    /// Directory holding `config.toml`.
    pub config_dir: PathBuf,
    /// Directory holding `bookmarks.json` and its backups.
    pub data_dir: PathBuf,
}

impl Paths {
    /// Resolve directories from optional overrides.
    pub fn resolve(config_dir: Option<PathBuf>, data_dir: Option<PathBuf>) -> Result<Self> {
        let config_dir = match config_dir.filter(|p| !p.as_os_str().is_empty()) {
            Some(dir) => dir,
            None => default_config_dir()?,
        };
        let data_dir = data_dir
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| config_dir.clone());
        Ok(Self {
            config_dir,
            data_dir,
        })
    }
}

fn default_config_dir() -> Result<PathBuf> {
    directories::ProjectDirs::from("dev", "ubm", "ubm")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| Error::Config("Failed to determine project directories".into()))
}
