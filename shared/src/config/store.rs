//! Pending-code store configuration

use serde::{Deserialize, Serialize};

use super::env_or_string;

/// Store backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// In-process concurrent map; entries are lost on restart and not
    /// shared between instances
    Memory,
    /// Redis-backed store with key TTL; required for horizontally
    /// scaled deployments
    Redis,
}

impl std::str::FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "memory" | "mem" => Ok(StoreBackend::Memory),
            "redis" => Ok(StoreBackend::Redis),
            _ => Err(format!("Unknown store backend: {}", s)),
        }
    }
}

/// Store configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
    /// Which backend holds pending codes
    pub backend: StoreBackend,

    /// Redis connection URL (redis backend only)
    pub redis_url: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::Memory,
            redis_url: String::from("redis://127.0.0.1:6379"),
        }
    }
}

impl StoreConfig {
    /// Load from `STORE_BACKEND` / `REDIS_URL` environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let backend = env_or_string("STORE_BACKEND", "memory")
            .parse()
            .unwrap_or(defaults.backend);
        Self {
            backend,
            redis_url: env_or_string("REDIS_URL", &defaults.redis_url),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_parsing() {
        assert_eq!("memory".parse::<StoreBackend>(), Ok(StoreBackend::Memory));
        assert_eq!("Redis".parse::<StoreBackend>(), Ok(StoreBackend::Redis));
        assert!("mysql".parse::<StoreBackend>().is_err());
    }
}
