//! Pending-code store backends
//!
//! Two implementations of `otp_core`'s `OtpStore`:
//! - `MemoryOtpStore` - in-process map, parity with the reference system
//! - `RedisOtpStore` - shared backing store with key TTL for
//!   horizontally scaled deployments

pub mod memory;
pub mod redis_client;
pub mod redis_store;

pub use memory::MemoryOtpStore;
pub use redis_client::RedisClient;
pub use redis_store::RedisOtpStore;

use async_trait::async_trait;
use tracing::{info, warn};

use otp_core::domain::entities::PendingVerification;
use otp_core::services::otp::OtpStore;
use otp_shared::config::{OtpConfig, StoreBackend, StoreConfig};

/// Store handle dispatching to the configured backend
pub enum StoreHandle {
    Memory(MemoryOtpStore),
    Redis(RedisOtpStore),
}

#[async_trait]
impl OtpStore for StoreHandle {
    async fn put(&self, entry: PendingVerification) -> Result<(), String> {
        match self {
            StoreHandle::Memory(s) => s.put(entry).await,
            StoreHandle::Redis(s) => s.put(entry).await,
        }
    }

    async fn take_if_match(&self, identity: &str, code: &str) -> Result<bool, String> {
        match self {
            StoreHandle::Memory(s) => s.take_if_match(identity, code).await,
            StoreHandle::Redis(s) => s.take_if_match(identity, code).await,
        }
    }

    async fn remove_if_code(&self, identity: &str, code: &str) -> Result<bool, String> {
        match self {
            StoreHandle::Memory(s) => s.remove_if_code(identity, code).await,
            StoreHandle::Redis(s) => s.remove_if_code(identity, code).await,
        }
    }

    async fn purge_expired(&self) -> Result<u64, String> {
        match self {
            StoreHandle::Memory(s) => s.purge_expired().await,
            StoreHandle::Redis(s) => s.purge_expired().await,
        }
    }
}

/// Create a store based on configuration.
///
/// Falls back to the in-memory store when the Redis backend cannot be
/// reached, so the service still comes up in degraded single-instance
/// mode.
pub async fn create_store(config: &StoreConfig, otp_config: &OtpConfig) -> StoreHandle {
    match config.backend {
        StoreBackend::Memory => {
            info!("Using in-memory OTP store");
            StoreHandle::Memory(MemoryOtpStore::new())
        }
        StoreBackend::Redis => match RedisClient::connect(&config.redis_url).await {
            Ok(client) => {
                info!("Using Redis OTP store");
                StoreHandle::Redis(RedisOtpStore::new(client, otp_config.expiration_seconds()))
            }
            Err(e) => {
                warn!(error = %e, "Failed to connect to Redis, falling back to in-memory store");
                StoreHandle::Memory(MemoryOtpStore::new())
            }
        },
    }
}
