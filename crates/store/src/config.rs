//! Store configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `AURUM_DATA_DIR` - Directory holding the JSON storage slots
//!   (default: `data`)
//! - `AURUM_ADMIN_PASSWORD` - Shared admin password (default: the built-in
//!   development password)

use std::path::PathBuf;

use secrecy::SecretString;
use thiserror::Error;

/// Default storage directory, relative to the working directory.
const DEFAULT_DATA_DIR: &str = "data";

/// Development fallback for the shared admin secret. A stand-in, not a
/// credential system; deployments override it via `AURUM_ADMIN_PASSWORD`.
const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Insecure secret in {0}: {1}")]
    InsecureSecret(String, String),
}

/// Store configuration.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Directory holding one JSON file per storage slot.
    pub data_dir: PathBuf,
    /// Shared admin password.
    pub admin_password: SecretString,
}

impl StoreConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `AURUM_ADMIN_PASSWORD` is set to an empty
    /// string.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let data_dir = PathBuf::from(get_env_or_default("AURUM_DATA_DIR", DEFAULT_DATA_DIR));
        let admin_password = get_env_or_default("AURUM_ADMIN_PASSWORD", DEFAULT_ADMIN_PASSWORD);
        validate_password(&admin_password, "AURUM_ADMIN_PASSWORD")?;

        Ok(Self {
            data_dir,
            admin_password: SecretString::from(admin_password),
        })
    }

    /// Build a configuration directly, without touching the environment.
    ///
    /// Used by tests and tools that manage their own data directories.
    #[must_use]
    pub fn new(data_dir: impl Into<PathBuf>, admin_password: impl Into<String>) -> Self {
        Self {
            data_dir: data_dir.into(),
            admin_password: SecretString::from(admin_password.into()),
        }
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Validate that a configured password is usable.
fn validate_password(password: &str, var_name: &str) -> Result<(), ConfigError> {
    if password.is_empty() {
        return Err(ConfigError::InsecureSecret(
            var_name.to_string(),
            "must not be empty".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_password_empty() {
        let result = validate_password("", "TEST_VAR");
        assert!(matches!(result, Err(ConfigError::InsecureSecret(_, _))));
    }

    #[test]
    fn test_validate_password_nonempty() {
        assert!(validate_password("admin123", "TEST_VAR").is_ok());
    }

    #[test]
    fn test_new_sets_fields() {
        let config = StoreConfig::new("/tmp/aurum-test", "hunter2");
        assert_eq!(config.data_dir, PathBuf::from("/tmp/aurum-test"));
    }

    #[test]
    fn test_debug_redacts_password() {
        let config = StoreConfig::new("data", "hunter2");
        let debug_output = format!("{config:?}");
        assert!(!debug_output.contains("hunter2"));
    }
}
