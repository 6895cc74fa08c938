//! Server configuration read from the environment

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use thiserror::Error;
use validator::Validate;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_CALCULATION_DELAY_MS: u64 = 500;
const DEFAULT_APP_ENV: &str = "development";
const DEFAULT_LOG_LEVEL: &str = "info";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },

    #[error("Configuration validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),
}

/// Runtime configuration of the API server
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct ServerConfig {
    /// Address to bind
    pub host: IpAddr,

    /// Port to listen on
    #[validate(range(min = 1, message = "Port must be between 1 and 65535"))]
    pub port: u16,

    /// Delay before a successful calculation is returned, in milliseconds
    #[validate(range(max = 10000, message = "Calculation delay cannot exceed 10000 ms"))]
    pub calculation_delay_ms: u64,

    /// Deployment environment reported by the health check
    #[validate(length(min = 1, message = "Environment name cannot be empty"))]
    pub environment: String,

    /// Default tracing filter when RUST_LOG is unset
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: DEFAULT_PORT,
            calculation_delay_ms: DEFAULT_CALCULATION_DELAY_MS,
            environment: DEFAULT_APP_ENV.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl ServerConfig {
    /// Read the configuration from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read the configuration through `lookup`, falling back to defaults for unset keys
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = parse_var(&lookup, "HOST", DEFAULT_HOST)?;
        let port = parse_var(&lookup, "PORT", &DEFAULT_PORT.to_string())?;
        let calculation_delay_ms =
            parse_var(&lookup, "CALCULATION_DELAY_MS", &DEFAULT_CALCULATION_DELAY_MS.to_string())?;

        let config = Self {
            host,
            port,
            calculation_delay_ms,
            environment: lookup("APP_ENV").unwrap_or_else(|| DEFAULT_APP_ENV.to_string()),
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
        };

        config.validate()?;
        Ok(config)
    }

    /// Socket address the server binds to
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Delay applied to successful calculations
    pub fn calculation_delay(&self) -> Duration {
        Duration::from_millis(self.calculation_delay_ms)
    }
}

fn parse_var<F, T>(lookup: &F, name: &'static str, default: &str) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    let value = lookup(name).unwrap_or_else(|| default.to_string());
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue { name, value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:3000");
        assert_eq!(config.calculation_delay(), Duration::from_millis(500));
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("CALCULATION_DELAY_MS", "0"),
            ("APP_ENV", "production"),
        ]))
        .unwrap();

        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8080");
        assert!(config.calculation_delay().is_zero());
        assert_eq!(config.environment, "production");
    }

    #[test]
    fn test_invalid_port() {
        let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "web")])).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for PORT: web");

        let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "0")])).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_delay_limit() {
        let err = ServerConfig::from_lookup(lookup_from(&[("CALCULATION_DELAY_MS", "10001")])).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }
}
