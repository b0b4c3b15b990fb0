//! Pricing API configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.

use std::env;

/// Default bind address.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0";

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 8080;

/// Default request body limit (1MB).
pub const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

/// Pricing API configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Interface to listen on
    pub bind_addr: String,

    /// HTTP port
    pub port: u16,

    /// Largest accepted request body in bytes
    pub max_body_bytes: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            port: DEFAULT_PORT,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable                   | Default   |
    /// |----------------------------|-----------|
    /// | `PRICEWISE_BIND_ADDR`      | `0.0.0.0` |
    /// | `PRICEWISE_PORT`           | `8080`    |
    /// | `PRICEWISE_MAX_BODY_BYTES` | `1048576` |
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup.
    ///
    /// `load` passes the process environment; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = ApiConfig {
            bind_addr: lookup("PRICEWISE_BIND_ADDR")
                .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),

            port: parse_or(&lookup, "PRICEWISE_PORT", DEFAULT_PORT)?,

            max_body_bytes: parse_or(&lookup, "PRICEWISE_MAX_BODY_BYTES", DEFAULT_MAX_BODY_BYTES)?,
        };

        if config.bind_addr.trim().is_empty() {
            return Err(ConfigError::InvalidValue("PRICEWISE_BIND_ADDR".to_string()));
        }

        if config.max_body_bytes == 0 {
            return Err(ConfigError::InvalidValue("PRICEWISE_MAX_BODY_BYTES".to_string()));
        }

        Ok(config)
    }

    /// Returns the `host:port` string to bind.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(key.to_string())),
        None => Ok(default),
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ApiConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, ApiConfig::default());
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
    }

    #[test]
    fn test_overrides() {
        let config = ApiConfig::from_lookup(lookup_from(&[
            ("PRICEWISE_BIND_ADDR", "127.0.0.1"),
            ("PRICEWISE_PORT", "3000"),
            ("PRICEWISE_MAX_BODY_BYTES", "4096"),
        ]))
        .unwrap();
        assert_eq!(config.bind_address(), "127.0.0.1:3000");
        assert_eq!(config.max_body_bytes, 4096);
    }

    #[test]
    fn test_invalid_values() {
        let err = ApiConfig::from_lookup(lookup_from(&[("PRICEWISE_PORT", "eighty")])).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for PRICEWISE_PORT");

        let err =
            ApiConfig::from_lookup(lookup_from(&[("PRICEWISE_MAX_BODY_BYTES", "0")])).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for PRICEWISE_MAX_BODY_BYTES");

        assert!(ApiConfig::from_lookup(lookup_from(&[("PRICEWISE_BIND_ADDR", " ")])).is_err());
    }
}
