//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `MAX_BATCH_SIZE` - Maximum URLs per batch resolve request (default: 100)
//! - `MAX_INPUT_LENGTH` - Maximum length in bytes of any URL, base URL or
//!   template accepted over HTTP (default: 8192)
//!
//! ```bash
//! export LISTEN="127.0.0.1:8080"
//! export LOG_FORMAT="json"
//! export MAX_BATCH_SIZE="500"
//! ```

use anyhow::Result;
use std::env;

use crate::api::dto::MAX_INPUT_HARD_LIMIT;

/// Default bind address.
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:3000";

/// Default limit for batch resolve requests.
pub const DEFAULT_MAX_BATCH_SIZE: usize = 100;

/// Default limit for a single URL or template.
pub const DEFAULT_MAX_INPUT_LENGTH: usize = 8192;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Maximum number of items accepted by `POST /api/resolve`.
    pub max_batch_size: usize,
    /// Maximum length in bytes of a URL, base URL or template in a request.
    pub max_input_length: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            max_batch_size: DEFAULT_MAX_BATCH_SIZE,
            max_input_length: DEFAULT_MAX_INPUT_LENGTH,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Unset or unparseable numeric variables fall back to their defaults.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let max_batch_size = env::var("MAX_BATCH_SIZE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_MAX_BATCH_SIZE);

        let max_input_length = env::var("MAX_INPUT_LENGTH")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_MAX_INPUT_LENGTH);

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            max_batch_size,
            max_input_length,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not in `host:port` form
    /// - `max_batch_size` is outside `1..=10000`
    /// - `max_input_length` is outside `16..=1048576`
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.max_batch_size == 0 || self.max_batch_size > 10_000 {
            anyhow::bail!(
                "MAX_BATCH_SIZE must be between 1 and 10000, got {}",
                self.max_batch_size
            );
        }

        if self.max_input_length < 16 || self.max_input_length > MAX_INPUT_HARD_LIMIT {
            anyhow::bail!(
                "MAX_INPUT_LENGTH must be between 16 and {}, got {}",
                MAX_INPUT_HARD_LIMIT,
                self.max_input_length
            );
        }

        Ok(())
    }

    /// Returns whether logs are emitted as JSON.
    pub fn is_json_logging(&self) -> bool {
        self.log_format == "json"
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Max batch size: {}", self.max_batch_size);
        tracing::info!("  Max input length: {}", self.max_input_length);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: &[&str] = &[
        "LISTEN",
        "RUST_LOG",
        "LOG_FORMAT",
        "MAX_BATCH_SIZE",
        "MAX_INPUT_LENGTH",
    ];

    fn clear_env() {
        // SAFETY: Tests touching the environment are run serially via #[serial]
        unsafe {
            for var in VARS {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());
        assert!(config.is_json_logging());

        config.listen_addr = "3000".to_string();
        assert!(config.validate().is_err());

        config.listen_addr = "0.0.0.0:3000".to_string();

        config.max_batch_size = 0;
        assert!(config.validate().is_err());

        config.max_batch_size = 10_001;
        assert!(config.validate().is_err());

        config.max_batch_size = 50;
        config.max_input_length = 8;
        assert!(config.validate().is_err());

        config.max_input_length = 2048;
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();

        let config = Config::from_env().unwrap();
        assert_eq!(config.listen_addr, DEFAULT_LISTEN_ADDR);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_format, "text");
        assert_eq!(config.max_batch_size, DEFAULT_MAX_BATCH_SIZE);
        assert_eq!(config.max_input_length, DEFAULT_MAX_INPUT_LENGTH);
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("LISTEN", "127.0.0.1:8080");
            env::set_var("LOG_FORMAT", "json");
            env::set_var("MAX_BATCH_SIZE", "500");
            env::set_var("MAX_INPUT_LENGTH", "not-a-number");
        }

        let config = load_from_env().unwrap();
        assert_eq!(config.listen_addr, "127.0.0.1:8080");
        assert_eq!(config.log_format, "json");
        assert_eq!(config.max_batch_size, 500);
        assert_eq!(config.max_input_length, DEFAULT_MAX_INPUT_LENGTH);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_load_from_env_rejects_invalid() {
        clear_env();
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("LOG_FORMAT", "xml");
        }

        assert!(load_from_env().is_err());

        clear_env();
    }
}
