//! Configuration module for the Yasmina backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Search endpoint of the hosted booking engine.
pub const DEFAULT_BOOKING_ENGINE_URL: &str =
    "https://les-jardins-yasmina.hotelrunner.com/bv3/search";

/// Error raised when an environment variable holds an unusable value.
#[derive(Debug)]
pub struct ConfigError {
    pub variable: &'static str,
    pub value: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invalid {} value: {:?}", self.variable, self.value)
    }
}

impl std::error::Error for ConfigError {}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Pre-shared key guarding the admin API
    pub api_psk: Option<String>,
    /// Path to SQLite database file
    pub db_path: PathBuf,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Booking engine search URL the reservation flow redirects to
    pub booking_engine_url: String,
    /// Insert the showcase rooms when the rooms table is empty
    pub seed_demo: bool,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let api_psk = env::var("YASMINA_API_PSK").ok().filter(|k| !k.is_empty());

        let db_path = env::var("YASMINA_DB_PATH")
            .unwrap_or_else(|_| "./data/yasmina.sqlite".to_string())
            .into();

        let bind_raw =
            env::var("YASMINA_BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
        let bind_addr = bind_raw.parse().map_err(|_| ConfigError {
            variable: "YASMINA_BIND_ADDR",
            value: bind_raw.clone(),
        })?;

        let log_level = env::var("YASMINA_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let booking_engine_url = env::var("YASMINA_BOOKING_ENGINE_URL")
            .unwrap_or_else(|_| DEFAULT_BOOKING_ENGINE_URL.to_string());

        let seed_demo = env::var("YASMINA_SEED_DEMO")
            .map(|v| parse_flag(&v))
            .unwrap_or(false);

        Ok(Self {
            api_psk,
            db_path,
            bind_addr,
            log_level,
            booking_engine_url,
            seed_demo,
        })
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    // Both cases touch process-wide env vars, so they run in one test.
    #[test]
    fn test_config_from_env() {
        env::remove_var("YASMINA_API_PSK");
        env::remove_var("YASMINA_DB_PATH");
        env::remove_var("YASMINA_BIND_ADDR");
        env::remove_var("YASMINA_LOG_LEVEL");
        env::remove_var("YASMINA_BOOKING_ENGINE_URL");
        env::remove_var("YASMINA_SEED_DEMO");

        let config = Config::from_env().unwrap();

        assert!(config.api_psk.is_none());
        assert_eq!(config.db_path, PathBuf::from("./data/yasmina.sqlite"));
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.booking_engine_url, DEFAULT_BOOKING_ENGINE_URL);
        assert!(!config.seed_demo);

        env::set_var("YASMINA_BIND_ADDR", "not-an-address");
        let err = Config::from_env().unwrap_err();
        assert_eq!(err.variable, "YASMINA_BIND_ADDR");
        env::remove_var("YASMINA_BIND_ADDR");
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("true"));
        assert!(parse_flag(" YES "));
        assert!(parse_flag("1"));
        assert!(!parse_flag("false"));
        assert!(!parse_flag(""));
    }
}
