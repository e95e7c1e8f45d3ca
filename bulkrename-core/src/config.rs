use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// On-disk defaults, loaded from `.bulkrename/config.toml` when present.
/// CLI flags always win over config values.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Durable rename log location
    #[serde(default = "default_log_file")]
    pub log_file: PathBuf,

    /// Root directory for backup sessions
    #[serde(default = "default_backup_dir")]
    pub backup_dir: PathBuf,

    /// Whether to print per-file detail by default
    #[serde(default)]
    pub verbose: bool,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            log_file: default_log_file(),
            backup_dir: default_backup_dir(),
            verbose: false,
        }
    }
}

fn default_log_file() -> PathBuf {
    PathBuf::from("rename_log.json")
}

fn default_backup_dir() -> PathBuf {
    PathBuf::from(".rename_backup")
}

impl Config {
    /// Load config from `.bulkrename/config.toml` under the current
    /// directory, falling back to defaults when no file exists.
    pub fn load() -> Result<Self> {
        if let Ok(cwd) = std::env::current_dir() {
            let config_path = cwd.join(".bulkrename").join("config.toml");
            if config_path.exists() {
                return Self::load_from_path(&config_path);
            }
        }
        Ok(Self::default())
    }

    /// Load config from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }
}
