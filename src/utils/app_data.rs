use crate::sequence::LoadConfig;
use anyhow::{Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_NAME: &str = "dnatrie";
const CONFIG_FILE: &str = "config.json";

/// Application configuration stored in the user config directory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// How sequence files are read and normalized
    #[serde(default)]
    pub load: LoadConfig,

    /// Batch searches with more patterns than this run in parallel
    #[serde(default = "default_parallel_search_threshold")]
    pub parallel_search_threshold: usize,

    /// Threads used for parallel search
    /// If 0, uses the number of CPU cores
    #[serde(default = "default_search_threads")]
    pub search_threads: usize,
}

fn default_parallel_search_threshold() -> usize {
    64
}

fn default_search_threads() -> usize {
    0 // 0 means use CPU count
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            load: LoadConfig::default(),
            parallel_search_threshold: default_parallel_search_threshold(),
            search_threads: default_search_threads(),
        }
    }
}

impl AppConfig {
    /// Load config from the user config directory, or return default if not found
    pub fn load() -> Result<Self> {
        let config_path = get_config_path()?;
        Ok(Self::load_or_default(&config_path))
    }

    /// Load config from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: AppConfig = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Like [`load_from`](Self::load_from), but a missing or broken file gives defaults
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(path) {
            Ok(config) => config,
            Err(e) => {
                warn!("{:#}; using default configuration", e);
                Self::default()
            }
        }
    }

    /// Save config to the user config directory
    pub fn save(&self) -> Result<()> {
        let config_path = get_config_path()?;
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)
            .context("Failed to serialize config")?;
        fs::write(&config_path, content)
            .context("Failed to write config file")?;
        Ok(())
    }

    /// Get the effective search thread count (resolves 0 to CPU count)
    pub fn effective_search_threads(&self) -> usize {
        if self.search_threads == 0 {
            num_cpus()
        } else {
            self.search_threads
        }
    }
}

/// Get the number of CPUs available
fn num_cpus() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(4)
}

/// Get the path to the config file
pub fn get_config_path() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    Ok(base.join(APP_NAME).join(CONFIG_FILE))
}
