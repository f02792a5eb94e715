//! In-memory pending-code store
//!
//! Entries live in a single mutex-guarded map. Each trait operation is
//! one lock acquisition covering the whole read-modify-write, and the
//! lock is never held across an await point, so a slow SMS dispatch can
//! never block a concurrent verification.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::debug;

use otp_core::domain::entities::PendingVerification;
use otp_core::services::otp::OtpStore;

/// In-process store; the default backend, matching the reference
/// system's process-memory map. State is lost on restart and is not
/// shared between instances.
#[derive(Default)]
pub struct MemoryOtpStore {
    entries: Mutex<HashMap<String, PendingVerification>>,
}

impl MemoryOtpStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of currently pending entries
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl OtpStore for MemoryOtpStore {
    async fn put(&self, entry: PendingVerification) -> Result<(), String> {
        let mut entries = self.entries.lock().map_err(|e| e.to_string())?;
        let replaced = entries.insert(entry.identity.clone(), entry).is_some();
        if replaced {
            debug!("Replaced existing pending verification");
        }
        Ok(())
    }

    async fn take_if_match(&self, identity: &str, code: &str) -> Result<bool, String> {
        let mut entries = self.entries.lock().map_err(|e| e.to_string())?;

        let Some(entry) = entries.get_mut(identity) else {
            return Ok(false);
        };

        // Expired and exhausted entries are purged on sight
        if entry.is_expired() || entry.attempts_exhausted() {
            entries.remove(identity);
            return Ok(false);
        }

        if entry.code_matches(code) {
            entries.remove(identity);
            return Ok(true);
        }

        if entry.record_failed_attempt() == 0 {
            entries.remove(identity);
        }
        Ok(false)
    }

    async fn remove_if_code(&self, identity: &str, code: &str) -> Result<bool, String> {
        let mut entries = self.entries.lock().map_err(|e| e.to_string())?;

        if entries.get(identity).is_some_and(|e| e.code_matches(code)) {
            entries.remove(identity);
            return Ok(true);
        }
        Ok(false)
    }

    async fn purge_expired(&self) -> Result<u64, String> {
        let mut entries = self.entries.lock().map_err(|e| e.to_string())?;
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired());
        Ok((before - entries.len()) as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use otp_shared::config::OtpConfig;

    fn entry(identity: &str) -> PendingVerification {
        PendingVerification::new(identity, "+15551234567", &OtpConfig::default())
    }

    fn expired_entry(identity: &str) -> PendingVerification {
        let config = OtpConfig {
            expiration_minutes: 0,
            ..OtpConfig::default()
        };
        PendingVerification::new(identity, "+15551234567", &config)
    }

    #[tokio::test]
    async fn test_take_if_match_consumes_entry() {
        let store = MemoryOtpStore::new();
        let e = entry("u1");
        let code = e.code.clone();

        store.put(e).await.unwrap();
        assert!(store.take_if_match("u1", &code).await.unwrap());
        // Consumed: a second take with the same code misses
        assert!(!store.take_if_match("u1", &code).await.unwrap());
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_miss_without_entry() {
        let store = MemoryOtpStore::new();
        assert!(!store.take_if_match("u1", "1234").await.unwrap());
    }

    #[tokio::test]
    async fn test_put_overwrites_previous_entry() {
        let store = MemoryOtpStore::new();
        let first = entry("u1");
        let first_code = first.code.clone();
        store.put(first).await.unwrap();

        let second = entry("u1");
        let second_code = second.code.clone();
        store.put(second).await.unwrap();

        assert_eq!(store.len(), 1);
        if first_code != second_code {
            assert!(!store.take_if_match("u1", &first_code).await.unwrap());
        }
        assert!(store.take_if_match("u1", &second_code).await.unwrap());
    }

    #[tokio::test]
    async fn test_wrong_code_burns_attempts_until_removed() {
        let store = MemoryOtpStore::new();
        let e = entry("u1");
        let code = e.code.clone();
        let max = e.max_attempts;
        store.put(e).await.unwrap();

        let wrong = if code == "0000" { "0001" } else { "0000" };
        for _ in 0..max {
            assert!(!store.take_if_match("u1", wrong).await.unwrap());
        }

        // Cap reached: entry is gone, the right code no longer matches
        assert!(store.is_empty());
        assert!(!store.take_if_match("u1", &code).await.unwrap());
    }

    #[tokio::test]
    async fn test_expired_entry_removed_on_access() {
        let store = MemoryOtpStore::new();
        let e = expired_entry("u1");
        let code = e.code.clone();
        store.put(e).await.unwrap();

        std::thread::sleep(std::time::Duration::from_millis(10));
        assert!(!store.take_if_match("u1", &code).await.unwrap());
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_remove_if_code_guards_newer_entry() {
        let store = MemoryOtpStore::new();
        let e = entry("u1");
        let code = e.code.clone();
        store.put(e).await.unwrap();

        assert!(!store.remove_if_code("u1", "not-the-code").await.unwrap());
        assert_eq!(store.len(), 1);

        assert!(store.remove_if_code("u1", &code).await.unwrap());
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_purge_expired() {
        let store = MemoryOtpStore::new();
        store.put(entry("live")).await.unwrap();
        store.put(expired_entry("dead")).await.unwrap();

        std::thread::sleep(std::time::Duration::from_millis(10));
        assert_eq!(store.purge_expired().await.unwrap(), 1);
        assert_eq!(store.len(), 1);
    }
}
