//! HTTP server configuration

use serde::{Deserialize, Serialize};

use super::{env_or, env_or_string};

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server host address
    pub host: String,

    /// Server port
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("127.0.0.1"),
            port: 8080,
        }
    }
}

impl ServerConfig {
    /// Load from `SERVER_HOST` / `SERVER_PORT` environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: env_or_string("SERVER_HOST", &defaults.host),
            port: env_or("SERVER_PORT", defaults.port),
        }
    }

    /// Bind address in `host:port` form
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bind_address() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_address(), "127.0.0.1:8080");
    }
}
