// SPDX-License-Identifier: Apache-2.0

//! Configuration management for issuesync.
//!
//! Provides layered configuration from files and environment variables.
//! Uses XDG-compliant paths with environment variable support.
//!
//! # Configuration Sources (in priority order)
//!
//! 1. Environment variables (prefix: `ISSUESYNC_`)
//! 2. Config file: `~/.config/issuesync/config.toml`
//! 3. Built-in defaults
//!
//! # Examples
//!
//! ```bash
//! # Point the client at another server
//! ISSUESYNC_SERVER__ENDPOINT_URL=http://192.168.10.122:3000/graphql issuesync issue list
//! ```

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::SyncError;

/// Default GraphQL endpoint.
pub const DEFAULT_ENDPOINT_URL: &str = "http://localhost:3000/graphql";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// GraphQL server settings.
    pub server: ServerConfig,
}

/// GraphQL server settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// URL every GraphQL operation is posted to.
    pub endpoint_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            endpoint_url: DEFAULT_ENDPOINT_URL.to_string(),
        }
    }
}

/// Returns the issuesync configuration directory.
///
/// Respects the `XDG_CONFIG_HOME` environment variable if set,
/// otherwise defaults to `~/.config/issuesync`.
///
/// # Errors
///
/// Returns `SyncError::Config` if neither `XDG_CONFIG_HOME` nor a home
/// directory is available.
pub fn config_dir() -> Result<PathBuf, SyncError> {
    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME")
        && !xdg_config.is_empty()
    {
        return Ok(PathBuf::from(xdg_config).join("issuesync"));
    }
    let home = dirs::home_dir().ok_or_else(|| SyncError::Config {
        message: "could not determine home directory; set HOME or XDG_CONFIG_HOME".to_string(),
    })?;
    Ok(home.join(".config").join("issuesync"))
}

/// Returns the path to the configuration file.
pub fn config_file_path() -> Result<PathBuf, SyncError> {
    Ok(config_dir()?.join("config.toml"))
}

/// Load application configuration from the default file location.
///
/// Environment variables use the prefix `ISSUESYNC_` and double underscore
/// for nested keys (e.g., `ISSUESYNC_SERVER__ENDPOINT_URL`).
///
/// # Errors
///
/// Returns `SyncError::Config` if the config file exists but is invalid.
pub fn load_config() -> Result<AppConfig, SyncError> {
    load_config_from(&config_file_path()?)
}

/// Load application configuration from an explicit file path.
///
/// The file is optional; a missing file yields defaults plus environment
/// overrides.
///
/// # Errors
///
/// Returns `SyncError::Config` if the file exists but is invalid.
pub fn load_config_from(path: &Path) -> Result<AppConfig, SyncError> {
    let config = Config::builder()
        .add_source(File::from(path).required(false))
        .add_source(
            Environment::with_prefix("ISSUESYNC")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let app_config: AppConfig = config.try_deserialize()?;

    Ok(app_config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_load_config_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_from(&dir.path().join("missing.toml"))
            .expect("should load with defaults");

        assert_eq!(config.server.endpoint_url, DEFAULT_ENDPOINT_URL);
    }

    #[test]
    fn test_config_from_toml_string() {
        let config_str = r#"
[server]
endpoint_url = "http://192.168.10.122:3000/graphql"
"#;

        let config = Config::builder()
            .add_source(config::File::from_str(config_str, config::FileFormat::Toml))
            .build()
            .expect("should build config");

        let app_config: AppConfig = config.try_deserialize().expect("should deserialize");
        assert_eq!(
            app_config.server.endpoint_url,
            "http://192.168.10.122:3000/graphql"
        );
    }

    #[test]
    fn test_config_empty_server_section_uses_default() {
        let config = Config::builder()
            .add_source(config::File::from_str("[server]\n", config::FileFormat::Toml))
            .build()
            .expect("should build config");

        let app_config: AppConfig = config.try_deserialize().expect("should deserialize");
        assert_eq!(app_config.server.endpoint_url, DEFAULT_ENDPOINT_URL);
    }

    #[test]
    #[serial]
    fn test_load_config_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[server]\nendpoint_url = \"http://example.test/graphql\"\n",
        )
        .unwrap();

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.server.endpoint_url, "http://example.test/graphql");
    }

    #[test]
    #[serial]
    fn test_invalid_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[server\nendpoint_url = ").unwrap();

        let err = load_config_from(&path).unwrap_err();
        assert!(matches!(err, SyncError::Config { .. }));
    }

    #[test]
    #[serial]
    fn test_env_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[server]\nendpoint_url = \"http://from-file/graphql\"\n",
        )
        .unwrap();

        unsafe {
            std::env::set_var("ISSUESYNC_SERVER__ENDPOINT_URL", "http://from-env/graphql");
        }
        let config = load_config_from(&path);
        unsafe {
            std::env::remove_var("ISSUESYNC_SERVER__ENDPOINT_URL");
        }

        assert_eq!(
            config.unwrap().server.endpoint_url,
            "http://from-env/graphql"
        );
    }

    #[test]
    #[serial]
    fn test_config_file_path() {
        let path = config_file_path().unwrap();
        assert!(path.ends_with("config.toml"));
    }

    #[test]
    #[serial]
    fn test_load_config_reads_from_xdg_config_home() {
        let dir = tempfile::tempdir().unwrap();
        let config_home = dir.path().join("xdg");
        std::fs::create_dir_all(config_home.join("issuesync")).unwrap();
        std::fs::write(
            config_home.join("issuesync").join("config.toml"),
            "[server]\nendpoint_url = \"http://xdg-host/graphql\"\n",
        )
        .unwrap();

        let original = std::env::var("XDG_CONFIG_HOME").ok();
        unsafe {
            std::env::set_var("XDG_CONFIG_HOME", &config_home);
        }
        let config = load_config();
        unsafe {
            match original {
                Some(val) => std::env::set_var("XDG_CONFIG_HOME", val),
                None => std::env::remove_var("XDG_CONFIG_HOME"),
            }
        }

        assert_eq!(config.unwrap().server.endpoint_url, "http://xdg-host/graphql");
    }

    #[test]
    #[serial]
    fn test_config_dir_respects_xdg_config_home() {
        let original = std::env::var("XDG_CONFIG_HOME").ok();
        unsafe {
            std::env::set_var("XDG_CONFIG_HOME", "/custom/config");
        }

        let dir = config_dir();
        assert_eq!(dir, Ok(PathBuf::from("/custom/config/issuesync")));

        // Cleanup
        unsafe {
            match original {
                Some(val) => std::env::set_var("XDG_CONFIG_HOME", val),
                None => std::env::remove_var("XDG_CONFIG_HOME"),
            }
        }
    }

    #[test]
    #[serial]
    fn test_config_dir_ignores_empty_xdg_config_home() {
        let original = std::env::var("XDG_CONFIG_HOME").ok();
        unsafe {
            std::env::set_var("XDG_CONFIG_HOME", "");
        }

        let dir = config_dir();
        assert!(dir.is_ok_and(|d| d.ends_with("issuesync")));

        // Cleanup
        unsafe {
            match original {
                Some(val) => std::env::set_var("XDG_CONFIG_HOME", val),
                None => std::env::remove_var("XDG_CONFIG_HOME"),
            }
        }
    }
}
