//! Configuration loading.
//!
//! Sources, lowest precedence first:
//! - `config.json` in the platform config directory
//! - `PERMALINK_*` environment variables and command-line flags, both read by
//!   clap and applied by the caller

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use permalink_slug::CodecConfig;
use serde::{Deserialize, Serialize};

/// Configuration file name.
const CONFIG_FILE: &str = "config.json";

/// Get the config directory path.
fn config_dir() -> Result<PathBuf> {
    ProjectDirs::from("com", "permalink", "permalink")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
}

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Slug codec settings.
    #[serde(flatten)]
    pub codec: CodecConfig,

    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            codec: CodecConfig::default(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load config from the config directory.
    pub fn load() -> Result<Self> {
        Self::load_file(&config_dir()?.join(CONFIG_FILE))
    }

    /// Load config from a file, or return default if it does not exist.
    pub fn load_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config from {:?}", path))
    }
}
