/// Viewer configuration
///
/// Read from `config.toml` in the user's config directory:
/// - Linux: ~/.config/waifu-viewer/config.toml
/// - macOS: ~/Library/Application Support/waifu-viewer/config.toml
/// - Windows: %APPDATA%\waifu-viewer\config.toml
///
/// Every field has a default, so a missing or partial file is fine.
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, warn};

use crate::error::Result;

const APP_DIR: &str = "waifu-viewer";
const CONFIG_FILENAME: &str = "config.toml";
const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub ui: UiConfig,
}

/// Upstream image API settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base endpoint; requests go to `{endpoint}/{type}/{category}`
    pub endpoint: String,
    /// Per-request timeout, applied to API calls and image downloads.
    /// Values below 1 are raised to 1.
    pub request_timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.waifu.pics".to_string(),
            request_timeout_secs: 15,
        }
    }
}

impl ApiConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(MIN_REQUEST_TIMEOUT_SECS))
    }
}

/// Presentation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// How long the error banner stays up
    pub error_dismiss_secs: u64,
    /// Floating hearts in the background
    pub hearts: bool,
    /// Initial directory of the save dialog (falls back to the user's downloads)
    pub download_dir: Option<PathBuf>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            error_dismiss_secs: 5,
            hearts: true,
            download_dir: None,
        }
    }
}

impl UiConfig {
    pub fn error_dismiss(&self) -> Duration {
        Duration::from_secs(self.error_dismiss_secs)
    }
}

impl Config {
    /// Parse a TOML document
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load the config from the user's config directory
    pub fn load_default() -> Self {
        match Self::default_path() {
            Some(path) => Self::load(&path),
            None => {
                warn!("Could not determine config directory, using defaults");
                Self::default()
            }
        }
    }

    /// Load the config from `path`, falling back to defaults on any problem
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            debug!("No config file at {:?}, using defaults", path);
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::parse(&content) {
                Ok(config) => {
                    debug!("Loaded config from {:?}", path);
                    config
                }
                Err(e) => {
                    warn!("Failed to parse {:?}: {}", path, e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    fn default_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir().or_else(dirs::home_dir)?;
        path.push(APP_DIR);
        path.push(CONFIG_FILENAME);
        Some(path)
    }
}
