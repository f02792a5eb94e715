//! Redis-backed pending-code store
//!
//! Stores each entry as JSON under `otp:pending:{identity}` with a key
//! TTL equal to the expiry window, and tracks failed attempts under
//! `otp:attempts:{identity}` via `INCR`. Redis expires both keys on its
//! own, which makes `purge_expired` a no-op here.
//!
//! Read-modify-write is not atomic across instances; the attempt
//! counter uses `INCR` so concurrent misses are never lost, and the
//! entry key's TTL bounds any window in which instances disagree.

use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, warn};

use otp_core::domain::entities::PendingVerification;
use otp_core::services::otp::OtpStore;

use super::redis_client::RedisClient;

/// Redis key prefix for pending entries
const PENDING_KEY_PREFIX: &str = "otp:pending";

/// Redis key prefix for attempt counters
const ATTEMPTS_KEY_PREFIX: &str = "otp:attempts";

/// Retry attempts for the initial write
const MAX_PUT_RETRIES: u32 = 3;

/// Delay between write retries
const PUT_RETRY_DELAY: Duration = Duration::from_millis(100);

/// Shared-backing-store implementation for multi-process deployments
pub struct RedisOtpStore {
    client: RedisClient,
    /// Key TTL in seconds; mirrors the entry expiry window
    expiry_seconds: u64,
}

impl RedisOtpStore {
    /// Create a store over an established Redis connection
    pub fn new(client: RedisClient, expiry_seconds: u64) -> Self {
        Self {
            client,
            expiry_seconds,
        }
    }

    fn pending_key(identity: &str) -> String {
        format!("{}:{}", PENDING_KEY_PREFIX, identity)
    }

    fn attempts_key(identity: &str) -> String {
        format!("{}:{}", ATTEMPTS_KEY_PREFIX, identity)
    }

    async fn load(&self, identity: &str) -> Result<Option<PendingVerification>, String> {
        let raw = self
            .client
            .get(&Self::pending_key(identity))
            .await
            .map_err(|e| e.to_string())?;

        match raw {
            Some(json) => {
                let entry: PendingVerification =
                    serde_json::from_str(&json).map_err(|e| e.to_string())?;
                Ok(Some(entry))
            }
            None => Ok(None),
        }
    }

    async fn delete_entry(&self, identity: &str) -> Result<(), String> {
        self.client
            .delete(&Self::pending_key(identity))
            .await
            .map_err(|e| e.to_string())?;
        self.client
            .delete(&Self::attempts_key(identity))
            .await
            .map_err(|e| e.to_string())?;
        Ok(())
    }
}

#[async_trait]
impl OtpStore for RedisOtpStore {
    async fn put(&self, entry: PendingVerification) -> Result<(), String> {
        let key = Self::pending_key(&entry.identity);
        let attempts_key = Self::attempts_key(&entry.identity);
        let json = serde_json::to_string(&entry).map_err(|e| e.to_string())?;

        let mut last_err = String::new();
        for attempt in 0..MAX_PUT_RETRIES {
            match self
                .client
                .set_with_expiry(&key, &json, self.expiry_seconds)
                .await
            {
                Ok(()) => {
                    // New entry, fresh attempt counter
                    let _ = self.client.delete(&attempts_key).await;
                    debug!(
                        identity = %entry.identity,
                        ttl = self.expiry_seconds,
                        "Stored pending verification in Redis"
                    );
                    return Ok(());
                }
                Err(e) => {
                    warn!(
                        identity = %entry.identity,
                        error = %e,
                        attempt = attempt + 1,
                        "Redis write failed, retrying"
                    );
                    last_err = e.to_string();
                    tokio::time::sleep(PUT_RETRY_DELAY).await;
                }
            }
        }
        Err(last_err)
    }

    async fn take_if_match(&self, identity: &str, code: &str) -> Result<bool, String> {
        let Some(entry) = self.load(identity).await? else {
            return Ok(false);
        };

        // TTL normally removes expired keys; this check covers clock
        // drift between the entry timestamp and the key TTL.
        if entry.is_expired() {
            self.delete_entry(identity).await?;
            return Ok(false);
        }

        let attempts = self
            .client
            .get(&Self::attempts_key(identity))
            .await
            .map_err(|e| e.to_string())?
            .and_then(|v| v.parse::<i64>().ok())
            .unwrap_or(0);

        if attempts >= entry.max_attempts as i64 {
            self.delete_entry(identity).await?;
            return Ok(false);
        }

        if entry.code_matches(code) {
            self.delete_entry(identity).await?;
            return Ok(true);
        }

        let count = self
            .client
            .incr_with_expiry(&Self::attempts_key(identity), self.expiry_seconds)
            .await
            .map_err(|e| e.to_string())?;

        if count >= entry.max_attempts as i64 {
            self.delete_entry(identity).await?;
        }
        Ok(false)
    }

    async fn remove_if_code(&self, identity: &str, code: &str) -> Result<bool, String> {
        let Some(entry) = self.load(identity).await? else {
            return Ok(false);
        };

        if entry.code_matches(code) {
            self.delete_entry(identity).await?;
            return Ok(true);
        }
        Ok(false)
    }

    async fn purge_expired(&self) -> Result<u64, String> {
        // Key TTL handles expiry
        Ok(0)
    }
}
