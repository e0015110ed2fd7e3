//! Application config: `config.toml` under the user config dir.
//!
//! Every field has a default, so an absent file is not an error. A file that
//! exists but does not parse is reported, and the caller decides whether to
//! fall back.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

const APP_DIR: &str = "taleforge";
const DB_FILE: &str = "taleforge.db";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Directory holding the SQLite store.
    pub data_dir: PathBuf,
    /// JSON file with UI state restored across restarts.
    pub state_path: PathBuf,
    /// Diagnostic log file. The terminal is owned by the UI.
    pub log_file: PathBuf,
    /// Default `tracing` filter directive, e.g. `info` or `taleforge_core=debug`.
    pub log_level: String,
    /// Path the router opens on when none is given on the command line.
    pub start_path: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        let data_dir = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR);
        let config_dir = config_dir();
        Self {
            log_file: data_dir.join("taleforge.log"),
            data_dir,
            state_path: config_dir.join("state.json"),
            log_level: "info".to_string(),
            start_path: "/".to_string(),
        }
    }
}

fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

impl AppConfig {
    pub fn default_path() -> PathBuf {
        config_dir().join("config.toml")
    }

    /// Load from `path`; a missing file yields defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        Self::from_toml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join(DB_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let cfg = AppConfig::load(Path::new("/nonexistent/taleforge/config.toml")).unwrap();
        assert_eq!(cfg, AppConfig::default());
        assert_eq!(cfg.start_path, "/");
        assert!(cfg.db_path().ends_with("taleforge.db"));
    }

    #[test]
    fn partial_file_fills_defaults() {
        let cfg = AppConfig::from_toml(
            r#"
            data_dir = "/tmp/tf"
            start_path = "/tts"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.data_dir, PathBuf::from("/tmp/tf"));
        assert_eq!(cfg.db_path(), PathBuf::from("/tmp/tf/taleforge.db"));
        assert_eq!(cfg.start_path, "/tts");
        assert_eq!(cfg.log_level, "info");
    }

    #[test]
    fn malformed_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "data_dir = [[[").unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn unknown_key_is_rejected() {
        assert!(AppConfig::from_toml("colour = \"teal\"").is_err());
    }

    #[test]
    fn toml_roundtrip_preserves_fields() {
        let mut cfg = AppConfig::default();
        cfg.log_level = "debug".into();
        let text = cfg.to_toml().unwrap();
        assert_eq!(AppConfig::from_toml(&text).unwrap(), cfg);
    }
}
