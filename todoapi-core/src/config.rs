use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use crate::error::{CoreError, Result};

/// Default bind address for `todoapi serve`
pub const DEFAULT_BIND: ([u8; 4], u16) = ([127, 0, 0, 1], 8000);

/// Default per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default database file, relative to the working directory
pub const DEFAULT_DB_FILE: &str = "todos.db";

/// File-backed configuration for the todo API.
///
/// Every field has a default, so an absent file or a partial file is valid.
/// Command-line flags and environment variables override these values in
/// the binary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TodoConfig {
    pub server: ServerSection,
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSection {
    pub bind: SocketAddr,
    pub cors_permissive: bool,
    pub timeout_secs: u64,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(DEFAULT_BIND),
            cors_permissive: false,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub path: PathBuf,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_DB_FILE),
        }
    }
}

impl TodoConfig {
    /// Config file path: ~/.todoapi/config.toml
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".todoapi")
            .join("config.toml")
    }

    /// Load from the default location, falling back to defaults when the
    /// file does not exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load from `path`. A missing file yields the defaults; an unreadable
    /// or malformed file is an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(CoreError::ConfigRead {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let config = toml::from_str(&content).map_err(|source| CoreError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }

    /// Render as TOML (used by `todoapi config show`).
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = TodoConfig::load_from(&dir.path().join("absent.toml")).unwrap();

        assert_eq!(config, TodoConfig::default());
        assert_eq!(config.server.bind.port(), 8000);
        assert_eq!(config.database.path, PathBuf::from("todos.db"));
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
            [database]
            path = "/var/lib/todoapi/todos.db"
            "#,
        )
        .unwrap();

        let config = TodoConfig::load_from(&path).unwrap();
        assert_eq!(
            config.database.path,
            PathBuf::from("/var/lib/todoapi/todos.db")
        );
        assert_eq!(config.server, ServerSection::default());
    }

    #[test]
    fn full_file_overrides_everything() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
            [server]
            bind = "0.0.0.0:9090"
            cors_permissive = true
            timeout_secs = 5
            "#,
        )
        .unwrap();

        let config = TodoConfig::load_from(&path).unwrap();
        assert_eq!(config.server.bind, "0.0.0.0:9090".parse().unwrap());
        assert!(config.server.cors_permissive);
        assert_eq!(config.server.timeout_secs, 5);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[server]\nbind = 12").unwrap();

        let err = TodoConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, CoreError::ConfigParse { .. }));
    }

    #[test]
    fn toml_output_parses_back() {
        let rendered = TodoConfig::default().to_toml_string().unwrap();
        let parsed: TodoConfig = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed, TodoConfig::default());
    }
}
