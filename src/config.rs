// Store configuration loaded from YAML

use eyre::{Context, Result, eyre};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const APP_NAME: &str = "todostore";

/// Where the database lives and how the connection is set up
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding the database file
    pub store_dir: PathBuf,
    /// Database file name inside `store_dir`
    pub db_file: String,
    /// How long SQLite waits on a locked database before failing
    pub busy_timeout_ms: u64,
    /// Use write-ahead logging for file-backed stores
    pub wal: bool,
}

impl Default for Config {
    fn default() -> Self {
        let store_dir = dirs::data_dir()
            .map(|d| d.join(APP_NAME))
            .unwrap_or_else(|| PathBuf::from(".todostore"));

        Self {
            store_dir,
            db_file: "tasks.db".to_string(),
            busy_timeout_ms: 5000,
            wal: true,
        }
    }
}

impl Config {
    /// Load configuration
    ///
    /// An explicit path must exist. Without one, the default config file is
    /// read if present, otherwise built-in defaults are returned.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => match Self::default_path() {
                Some(default) if default.exists() => Self::from_file(&default),
                _ => {
                    debug!("No config file found, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    /// Parse a YAML config file
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(eyre!("Config file not found: {}", path.display()));
        }

        let content = fs::read_to_string(path).context("Failed to read config file")?;
        let config: Config = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        debug!(path = ?path, "Loaded config");
        Ok(config)
    }

    /// `$XDG_CONFIG_HOME/todostore/config.yaml` or the platform equivalent
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_NAME).join("config.yaml"))
    }

    /// Full path of the database file
    pub fn db_path(&self) -> PathBuf {
        self.store_dir.join(&self.db_file)
    }

    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.db_file, "tasks.db");
        assert_eq!(config.busy_timeout_ms, 5000);
        assert!(config.wal);
        assert!(config.db_path().ends_with("tasks.db"));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yaml");
        fs::write(&path, "store_dir: /tmp/todo\nwal: false\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.store_dir, PathBuf::from("/tmp/todo"));
        assert!(!config.wal);
        assert_eq!(config.db_file, "tasks.db");
        assert_eq!(config.db_path(), PathBuf::from("/tmp/todo/tasks.db"));
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nope.yaml");
        assert!(Config::load(Some(&path)).is_err());
    }

    #[test]
    fn test_malformed_file_is_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yaml");
        fs::write(&path, "busy_timeout_ms: [not a number\n").unwrap();
        assert!(Config::from_file(&path).is_err());
    }

    #[test]
    fn test_yaml_roundtrip() {
        let config = Config {
            store_dir: PathBuf::from("/data"),
            db_file: "todo.db".to_string(),
            busy_timeout_ms: 100,
            wal: false,
        };
        let yaml = config.to_yaml().unwrap();
        let back: Config = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back, config);
    }
}
