//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `PORT` - Shorthand for `LISTEN=0.0.0.0:$PORT`, used only when `LISTEN` is unset
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `SNAPSHOT_PATH` - JSON snapshot file (default: `db.json`)
//! - `BEHIND_PROXY` - Trust `X-Forwarded-For` / `X-Real-IP` (default: `false`)
//! - `RATE_LIMIT_REPLENISH_SECONDS` - Seconds between token refills per client IP (default: 1)
//! - `RATE_LIMIT_BURST` - Bucket size per client IP (default: 10)
//!
//! Nothing is required; every variable has a default.

use anyhow::Result;
use std::env;
use std::path::PathBuf;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    pub snapshot_path: PathBuf,
    /// When true, the client address is read from X-Forwarded-For / X-Real-IP headers.
    /// Enable only when the service is behind a trusted reverse proxy.
    pub behind_proxy: bool,
    /// Seconds between token refills in each client's bucket.
    pub rate_limit_replenish_seconds: u64,
    pub rate_limit_burst: u32,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Currently infallible; returns `Result` so stricter variables can be
    /// added without changing callers.
    pub fn from_env() -> Result<Self> {
        let listen_addr = Self::load_listen_addr();
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let snapshot_path = env::var("SNAPSHOT_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("db.json"));

        let behind_proxy = env::var("BEHIND_PROXY")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        let rate_limit_replenish_seconds = env::var("RATE_LIMIT_REPLENISH_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(1);

        let rate_limit_burst = env::var("RATE_LIMIT_BURST")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            snapshot_path,
            behind_proxy,
            rate_limit_replenish_seconds,
            rate_limit_burst,
        })
    }

    /// Resolves the bind address.
    ///
    /// Priority:
    /// 1. `LISTEN` environment variable
    /// 2. `0.0.0.0:$PORT`
    /// 3. `0.0.0.0:3000`
    fn load_listen_addr() -> String {
        if let Ok(addr) = env::var("LISTEN") {
            return addr;
        }

        let port = env::var("PORT").unwrap_or_else(|_| "3000".to_string());
        format!("0.0.0.0:{}", port)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not in `host:port` form
    /// - `snapshot_path` is empty
    /// - either rate limit setting is zero
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

        if self.snapshot_path.as_os_str().is_empty() {
            anyhow::bail!("SNAPSHOT_PATH must not be empty");
        }

        if self.rate_limit_replenish_seconds == 0 {
            anyhow::bail!("RATE_LIMIT_REPLENISH_SECONDS must be greater than 0");
        }

        if self.rate_limit_burst == 0 {
            anyhow::bail!("RATE_LIMIT_BURST must be greater than 0");
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Snapshot: {}", self.snapshot_path.display());
        tracing::info!("  Behind proxy: {}", self.behind_proxy);
        tracing::info!(
            "  Rate limit: 1 token every {}s, burst {}",
            self.rate_limit_replenish_seconds,
            self.rate_limit_burst
        );
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
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

    fn valid_config() -> Config {
        Config {
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            snapshot_path: PathBuf::from("db.json"),
            behind_proxy: false,
            rate_limit_replenish_seconds: 1,
            rate_limit_burst: 10,
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = valid_config();
        assert!(config.validate().is_ok());

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.listen_addr = "3000".to_string();
        assert!(config.validate().is_err());

        config.listen_addr = "0.0.0.0:3000".to_string();
        config.snapshot_path = PathBuf::new();
        assert!(config.validate().is_err());

        config.snapshot_path = PathBuf::from("data/db.json");
        config.rate_limit_burst = 0;
        assert!(config.validate().is_err());

        config.rate_limit_burst = 10;
        config.rate_limit_replenish_seconds = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_listen_addr_from_port() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::remove_var("LISTEN");
            env::set_var("PORT", "8080");
        }

        assert_eq!(Config::load_listen_addr(), "0.0.0.0:8080");

        unsafe {
            env::remove_var("PORT");
        }
    }

    #[test]
    #[serial]
    fn test_listen_priority() {
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("LISTEN", "127.0.0.1:4000");
            env::set_var("PORT", "8080");
        }

        assert_eq!(Config::load_listen_addr(), "127.0.0.1:4000");

        unsafe {
            env::remove_var("LISTEN");
            env::remove_var("PORT");
        }
    }

    #[test]
    #[serial]
    fn test_defaults() {
        // SAFETY: Tests are run serially
        unsafe {
            for key in [
                "LISTEN",
                "PORT",
                "LOG_FORMAT",
                "SNAPSHOT_PATH",
                "BEHIND_PROXY",
                "RATE_LIMIT_REPLENISH_SECONDS",
                "RATE_LIMIT_BURST",
            ] {
                env::remove_var(key);
            }
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.listen_addr, "0.0.0.0:3000");
        assert_eq!(config.log_format, "text");
        assert_eq!(config.snapshot_path, PathBuf::from("db.json"));
        assert!(!config.behind_proxy);
        assert_eq!(config.rate_limit_replenish_seconds, 1);
        assert_eq!(config.rate_limit_burst, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_behind_proxy_flag() {
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("BEHIND_PROXY", "TRUE");
        }
        assert!(Config::from_env().unwrap().behind_proxy);

        unsafe {
            env::set_var("BEHIND_PROXY", "1");
        }
        assert!(Config::from_env().unwrap().behind_proxy);

        unsafe {
            env::set_var("BEHIND_PROXY", "no");
        }
        assert!(!Config::from_env().unwrap().behind_proxy);

        unsafe {
            env::remove_var("BEHIND_PROXY");
        }
    }

    #[test]
    #[serial]
    fn test_rate_limit_from_env() {
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("RATE_LIMIT_REPLENISH_SECONDS", "4");
            env::set_var("RATE_LIMIT_BURST", "20");
        }

        let config = Config::from_env().unwrap();
        assert_eq!(config.rate_limit_replenish_seconds, 4);
        assert_eq!(config.rate_limit_burst, 20);

        unsafe {
            env::remove_var("RATE_LIMIT_REPLENISH_SECONDS");
            env::remove_var("RATE_LIMIT_BURST");
        }
    }
}
