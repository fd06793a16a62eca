use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use thiserror::Error;

use crate::pipeline::extraction::{ContextGating, ExtractorOptions};

/// Application-level constants
pub const APP_NAME: &str = "medterm";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const ENV_BIND_ADDR: &str = "MEDTERM_BIND_ADDR";
pub const ENV_MAX_TEXT_CHARS: &str = "MEDTERM_MAX_TEXT_CHARS";
pub const ENV_CONTEXT_GATING: &str = "MEDTERM_CONTEXT_GATING";

pub const DEFAULT_BIND_ADDR: SocketAddr =
    SocketAddr::new(IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1)), 8787);
/// Upper bound on a single text field accepted by the API.
pub const DEFAULT_MAX_TEXT_CHARS: usize = 20_000;

/// Log filter used when `RUST_LOG` is not set.
pub fn default_log_filter() -> &'static str {
    "medterm_lib=info,tower_http=info"
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid bind address '{value}': {reason}")]
    InvalidBindAddr { value: String, reason: String },

    #[error("Invalid value for {var}: '{value}'")]
    InvalidNumber { var: &'static str, value: String },

    #[error("Invalid context gating mode: {0}")]
    InvalidGating(String),
}

/// Runtime configuration for the extraction service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub bind_addr: SocketAddr,
    pub max_text_chars: usize,
    pub extractor: ExtractorOptions,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR,
            max_text_chars: DEFAULT_MAX_TEXT_CHARS,
            extractor: ExtractorOptions::default(),
        }
    }
}

impl ServiceConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from any key lookup. Unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = non_empty(lookup(ENV_BIND_ADDR)) {
            config.bind_addr = value
                .parse()
                .map_err(|e: std::net::AddrParseError| ConfigError::InvalidBindAddr {
                    value: value.clone(),
                    reason: e.to_string(),
                })?;
        }

        if let Some(value) = non_empty(lookup(ENV_MAX_TEXT_CHARS)) {
            config.max_text_chars = match value.parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::InvalidNumber {
                        var: ENV_MAX_TEXT_CHARS,
                        value,
                    })
                }
            };
        }

        if let Some(value) = non_empty(lookup(ENV_CONTEXT_GATING)) {
            config.extractor.gating = value
                .parse::<ContextGating>()
                .map_err(ConfigError::InvalidGating)?;
        }

        Ok(config)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
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
    fn defaults_when_nothing_set() {
        let config = ServiceConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, ServiceConfig::default());
        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8787");
        assert_eq!(config.extractor.gating, ContextGating::Permissive);
    }

    #[test]
    fn reads_all_overrides() {
        let config = ServiceConfig::from_lookup(lookup_from(&[
            (ENV_BIND_ADDR, "0.0.0.0:9000"),
            (ENV_MAX_TEXT_CHARS, "500"),
            (ENV_CONTEXT_GATING, "strict"),
        ]))
        .unwrap();
        assert_eq!(config.bind_addr.port(), 9000);
        assert_eq!(config.max_text_chars, 500);
        assert_eq!(config.extractor.gating, ContextGating::Strict);
    }

    #[test]
    fn blank_values_keep_defaults() {
        let config = ServiceConfig::from_lookup(lookup_from(&[(ENV_MAX_TEXT_CHARS, "  ")])).unwrap();
        assert_eq!(config.max_text_chars, DEFAULT_MAX_TEXT_CHARS);
    }

    #[test]
    fn rejects_bad_bind_addr() {
        let err = ServiceConfig::from_lookup(lookup_from(&[(ENV_BIND_ADDR, "localhost")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBindAddr { .. }));
    }

    #[test]
    fn rejects_zero_and_non_numeric_limits() {
        for bad in ["0", "lots", "-5"] {
            let err = ServiceConfig::from_lookup(lookup_from(&[(ENV_MAX_TEXT_CHARS, bad)]))
                .unwrap_err();
            assert_eq!(
                err,
                ConfigError::InvalidNumber {
                    var: ENV_MAX_TEXT_CHARS,
                    value: bad.to_string()
                }
            );
        }
    }

    #[test]
    fn rejects_unknown_gating() {
        let err = ServiceConfig::from_lookup(lookup_from(&[(ENV_CONTEXT_GATING, "loose")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidGating(_)));
    }

    #[test]
    fn app_name_is_medterm() {
        assert_eq!(APP_NAME, "medterm");
    }
}
