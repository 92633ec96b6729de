//! Configuration Management
//!
//! This module resolves the database connection settings.
//!
//! # Resolution Precedence
//! 1. Explicit overrides (CLI flags / environment variables, highest priority)
//! 2. Config file (`~/.config/roster/config.json`)
//! 3. Built-in defaults (local MySQL, `employee_db`)
//!
//! # Password Indirection
//! The stored file may reference an environment variable via `password_env`
//! instead of holding the password directly. Resolution fails if the named
//! variable is not set.
//!
//! No core behavior depends on these values beyond establishing connectivity.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, RosterError};

/// Default connection values for a local development database
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3306;
pub const DEFAULT_USER: &str = "root";
pub const DEFAULT_DATABASE: &str = "employee_db";
pub const DEFAULT_POOL_SIZE: usize = 10;

/// Fully resolved connection settings
#[derive(Debug, Clone)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub user: String,
    /// WARNING: sensitive, never log or include in error messages
    pub password: String,
    pub database: String,
    pub pool_size: usize,
}

/// Explicit per-invocation overrides (CLI flags or environment variables)
///
/// Every field is optional; unset fields fall through to the config file and
/// then to defaults.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub database: Option<String>,
    pub pool_size: Option<usize>,
}

/// Connection settings as stored in the config file
///
/// Similar to [`Settings`] but every field is optional and the password may
/// be referenced through an environment variable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoredSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,

    /// Plaintext password (prefer `password_env`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    /// Environment variable name holding the password
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_env: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pool_size: Option<usize>,
}

impl StoredSettings {
    /// Resolve the stored password, honoring `password_env` indirection
    ///
    /// `password_env` takes precedence over a plaintext `password` field.
    pub fn resolve_password(&self) -> Result<Option<String>> {
        if let Some(env_var) = &self.password_env {
            return match std::env::var(env_var) {
                Ok(password) => Ok(Some(password)),
                Err(_) => Err(RosterError::config_error(format!(
                    "Environment variable {env_var} not found for password"
                ))),
            };
        }
        Ok(self.password.clone())
    }
}

/// Get path to the config file (`~/.config/roster/config.json`)
pub fn config_file_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| RosterError::config_error("Could not determine user config directory"))?;

    Ok(config_dir.join("roster").join("config.json"))
}

/// Load stored settings from a config file
///
/// A missing file is not an error; it yields empty stored settings so that
/// defaults apply.
pub fn load_stored(path: &Path) -> Result<StoredSettings> {
    if !path.exists() {
        return Ok(StoredSettings::default());
    }

    let contents = fs::read_to_string(path)
        .map_err(|e| RosterError::config_error(format!("Could not read config file: {e}")))?;

    serde_json::from_str::<StoredSettings>(&contents)
        .map_err(|e| RosterError::config_error(format!("Invalid config file format: {e}")))
}

/// Resolve final settings from overrides, stored settings, and defaults
pub fn resolve(overrides: &Overrides, stored: &StoredSettings) -> Result<Settings> {
    let stored_password = stored.resolve_password()?;

    Ok(Settings {
        host: overrides
            .host
            .clone()
            .or_else(|| stored.host.clone())
            .unwrap_or_else(|| DEFAULT_HOST.to_string()),
        port: overrides.port.or(stored.port).unwrap_or(DEFAULT_PORT),
        user: overrides
            .user
            .clone()
            .or_else(|| stored.user.clone())
            .unwrap_or_else(|| DEFAULT_USER.to_string()),
        password: overrides
            .password
            .clone()
            .or(stored_password)
            .unwrap_or_default(),
        database: overrides
            .database
            .clone()
            .or_else(|| stored.database.clone())
            .unwrap_or_else(|| DEFAULT_DATABASE.to_string()),
        pool_size: overrides.pool_size.or(stored.pool_size).unwrap_or(DEFAULT_POOL_SIZE),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults_apply_when_nothing_set() {
        let settings = resolve(&Overrides::default(), &StoredSettings::default()).unwrap();
        assert_eq!(settings.host, DEFAULT_HOST);
        assert_eq!(settings.port, DEFAULT_PORT);
        assert_eq!(settings.user, DEFAULT_USER);
        assert_eq!(settings.password, "");
        assert_eq!(settings.database, DEFAULT_DATABASE);
        assert_eq!(settings.pool_size, DEFAULT_POOL_SIZE);
    }

    #[test]
    fn test_stored_settings_override_defaults() {
        let stored = StoredSettings {
            host: Some("db.internal".to_string()),
            port: Some(3307),
            database: Some("org_db".to_string()),
            ..Default::default()
        };

        let settings = resolve(&Overrides::default(), &stored).unwrap();
        assert_eq!(settings.host, "db.internal");
        assert_eq!(settings.port, 3307);
        assert_eq!(settings.database, "org_db");
        // Unset fields still fall through to defaults
        assert_eq!(settings.user, DEFAULT_USER);
    }

    #[test]
    fn test_overrides_win_over_stored() {
        let stored = StoredSettings {
            host: Some("db.internal".to_string()),
            user: Some("app".to_string()),
            ..Default::default()
        };
        let overrides = Overrides {
            host: Some("localhost".to_string()),
            ..Default::default()
        };

        let settings = resolve(&overrides, &stored).unwrap();
        assert_eq!(settings.host, "localhost");
        assert_eq!(settings.user, "app");
    }

    #[test]
    fn test_password_env_resolution() {
        std::env::set_var("ROSTER_TEST_PW_SET", "s3cret");
        let stored = StoredSettings {
            password: Some("ignored".to_string()),
            password_env: Some("ROSTER_TEST_PW_SET".to_string()),
            ..Default::default()
        };

        let settings = resolve(&Overrides::default(), &stored).unwrap();
        assert_eq!(settings.password, "s3cret");
    }

    #[test]
    fn test_password_env_missing_is_config_error() {
        let stored = StoredSettings {
            password_env: Some("ROSTER_TEST_PW_DEFINITELY_UNSET".to_string()),
            ..Default::default()
        };

        let err = resolve(&Overrides::default(), &stored).unwrap_err();
        assert_eq!(err.error_code(), "CONFIG_ERROR");
    }

    #[test]
    fn test_load_stored_missing_file_yields_empty() {
        let path = std::env::temp_dir().join("roster_test_no_such_config.json");
        let _ = std::fs::remove_file(&path);

        let stored = load_stored(&path).unwrap();
        assert!(stored.host.is_none());
        assert!(stored.password_env.is_none());
    }

    #[test]
    fn test_load_stored_invalid_json_is_config_error() {
        let path = std::env::temp_dir().join("roster_test_bad_config.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = load_stored(&path).unwrap_err();
        assert_eq!(err.error_code(), "CONFIG_ERROR");

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_stored_settings_round_trip() {
        let stored = StoredSettings {
            host: Some("db.internal".to_string()),
            port: Some(3306),
            user: Some("app".to_string()),
            password_env: Some("DB_PASSWORD".to_string()),
            database: Some("employee_db".to_string()),
            pool_size: Some(4),
            ..Default::default()
        };

        let json = serde_json::to_string(&stored).unwrap();
        // Unset plaintext password must not appear in the file
        assert!(!json.contains("\"password\""));
        assert!(json.contains("password_env"));

        let back: StoredSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(back.host.as_deref(), Some("db.internal"));
        assert_eq!(back.pool_size, Some(4));
    }
}
