use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::str::FromStr;

use thiserror::Error;
use tracing::Level;

// Sensor and client firmware expect the relay here
pub const DEFAULT_BIND_ADDRESS: SocketAddr =
    SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, 5000));

/// Moisture level reported before any sensor has posted
pub const DEFAULT_MOISTURE_LEVEL: f64 = 50.0;

pub const BIND_ENV_VAR: &str = "MOISTURE_RELAY_BIND";
pub const LOG_ENV_VAR: &str = "MOISTURE_RELAY_LOG";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid bind address {value:?} in {var}")]
    InvalidBindAddress { var: &'static str, value: String },

    #[error("Invalid log level {value:?} in {var}")]
    InvalidLogLevel { var: &'static str, value: String },
}

/// Runtime configuration of the relay process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub bind_address: SocketAddr,
    pub log_level: Level,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS,
            log_level: Level::INFO,
        }
    }
}

impl RelayConfig {
    /// Defaults, overridden by `MOISTURE_RELAY_BIND` and `MOISTURE_RELAY_LOG` when set
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup(BIND_ENV_VAR) {
            config.bind_address = SocketAddr::from_str(value.trim()).map_err(|_| {
                ConfigError::InvalidBindAddress {
                    var: BIND_ENV_VAR,
                    value: value.clone(),
                }
            })?;
        }

        if let Some(value) = lookup(LOG_ENV_VAR) {
            config.log_level =
                Level::from_str(value.trim()).map_err(|_| ConfigError::InvalidLogLevel {
                    var: LOG_ENV_VAR,
                    value: value.clone(),
                })?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_constant() {
        let config = RelayConfig::default();
        assert_eq!(config.bind_address, DEFAULT_BIND_ADDRESS);
        assert_eq!(config.bind_address.to_string(), "0.0.0.0:5000");
        assert_eq!(config.log_level, Level::INFO);
    }

    #[test]
    fn env_overrides_are_applied() {
        let config = RelayConfig::from_lookup(|var| match var {
            BIND_ENV_VAR => Some("127.0.0.1:8080".to_string()),
            LOG_ENV_VAR => Some("debug".to_string()),
            _ => None,
        })
        .unwrap();

        assert_eq!(config.bind_address, "127.0.0.1:8080".parse().unwrap());
        assert_eq!(config.log_level, Level::DEBUG);
    }

    #[test]
    fn garbage_bind_address_is_rejected() {
        let result = RelayConfig::from_lookup(|var| {
            (var == BIND_ENV_VAR).then(|| "not-an-address".to_string())
        });
        assert!(matches!(
            result,
            Err(ConfigError::InvalidBindAddress { .. })
        ));
    }

    #[test]
    fn garbage_log_level_is_rejected() {
        let result =
            RelayConfig::from_lookup(|var| (var == LOG_ENV_VAR).then(|| "loud".to_string()));
        assert!(matches!(result, Err(ConfigError::InvalidLogLevel { .. })));
    }
}
