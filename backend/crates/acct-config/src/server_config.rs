use crate::{
    ConfigError, ConfigErrorResult, ConfigSection, DEFAULT_HOST, DEFAULT_MAX_CONNECTIONS,
    DEFAULT_PORT, DEFAULT_REQUEST_TIMEOUT_SECS, MAX_MAX_CONNECTIONS, MAX_REQUEST_TIMEOUT_SECS,
    MIN_MAX_CONNECTIONS, MIN_PORT,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Maximum requests served concurrently
    pub max_connections: usize,
    /// Per-request timeout in seconds (0 = disabled)
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from(DEFAULT_HOST),
            port: DEFAULT_PORT,
            max_connections: DEFAULT_MAX_CONNECTIONS,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        // Port 0 means "auto-assign" - OS picks an available port.
        if self.port != 0 && self.port < MIN_PORT {
            return Err(ConfigError::invalid(
                ConfigSection::Server,
                format!(
                    "port must be 0 (auto) or >= {}, got {}",
                    MIN_PORT, self.port
                ),
            ));
        }

        if !(MIN_MAX_CONNECTIONS..=MAX_MAX_CONNECTIONS).contains(&self.max_connections) {
            return Err(ConfigError::invalid(
                ConfigSection::Server,
                format!(
                    "max_connections must be {}-{}, got {}",
                    MIN_MAX_CONNECTIONS, MAX_MAX_CONNECTIONS, self.max_connections
                ),
            ));
        }

        if self.request_timeout_secs > MAX_REQUEST_TIMEOUT_SECS {
            return Err(ConfigError::invalid(
                ConfigSection::Server,
                format!(
                    "request_timeout_secs must be at most {}, got {}",
                    MAX_REQUEST_TIMEOUT_SECS, self.request_timeout_secs
                ),
            ));
        }

        Ok(())
    }
}
