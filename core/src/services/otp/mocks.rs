//! Mock sender and store implementations
//!
//! Shared by the unit tests in this crate and the HTTP integration
//! tests in the api crate, so they live in the library rather than
//! under `#[cfg(test)]`.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::domain::entities::PendingVerification;

use super::traits::{OtpStore, SmsSender};

/// Mock SMS sender that records outbound messages instead of sending
pub struct MockSmsSender {
    /// destination -> last message body
    pub sent_messages: Arc<Mutex<HashMap<String, String>>>,
    /// Number of successful dispatches
    dispatch_count: Arc<AtomicUsize>,
    /// When true every send fails
    pub should_fail: bool,
}

impl MockSmsSender {
    pub fn new() -> Self {
        Self {
            sent_messages: Arc::new(Mutex::new(HashMap::new())),
            dispatch_count: Arc::new(AtomicUsize::new(0)),
            should_fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            sent_messages: Arc::new(Mutex::new(HashMap::new())),
            dispatch_count: Arc::new(AtomicUsize::new(0)),
            should_fail: true,
        }
    }

    /// Last message body sent to a destination
    pub fn last_message(&self, to: &str) -> Option<String> {
        self.sent_messages.lock().unwrap().get(to).cloned()
    }

    /// Extract the code from the last message sent to a destination.
    ///
    /// Relies on the standard `"Your OTP is: {code}"` body produced by
    /// `SmsSender::send_code`.
    pub fn last_code(&self, to: &str) -> Option<String> {
        self.last_message(to)
            .and_then(|m| m.rsplit(' ').next().map(|c| c.to_string()))
    }

    /// Total number of messages dispatched, counting repeat sends to
    /// the same destination
    pub fn message_count(&self) -> usize {
        self.dispatch_count.load(Ordering::SeqCst)
    }
}

impl Default for MockSmsSender {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SmsSender for MockSmsSender {
    async fn send_sms(&self, to: &str, message: &str) -> Result<String, String> {
        if self.should_fail {
            return Err("SMS service error".to_string());
        }
        self.sent_messages
            .lock()
            .unwrap()
            .insert(to.to_string(), message.to_string());
        self.dispatch_count.fetch_add(1, Ordering::SeqCst);
        Ok(format!("mock-msg-{}", uuid::Uuid::new_v4()))
    }
}

/// Mock store with full contract semantics over a plain `HashMap`
pub struct MockOtpStore {
    pub entries: Arc<Mutex<HashMap<String, PendingVerification>>>,
    /// When true every operation fails
    pub should_fail: bool,
}

impl MockOtpStore {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
            should_fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
            should_fail: true,
        }
    }

    /// Current pending code for an identity, if any
    pub fn pending_code(&self, identity: &str) -> Option<String> {
        self.entries
            .lock()
            .unwrap()
            .get(identity)
            .map(|e| e.code.clone())
    }
}

impl Default for MockOtpStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OtpStore for MockOtpStore {
    async fn put(&self, entry: PendingVerification) -> Result<(), String> {
        if self.should_fail {
            return Err("Store error".to_string());
        }
        self.entries
            .lock()
            .unwrap()
            .insert(entry.identity.clone(), entry);
        Ok(())
    }

    async fn take_if_match(&self, identity: &str, code: &str) -> Result<bool, String> {
        if self.should_fail {
            return Err("Store error".to_string());
        }

        let mut entries = self.entries.lock().unwrap();
        let Some(entry) = entries.get_mut(identity) else {
            return Ok(false);
        };

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
        if self.should_fail {
            return Err("Store error".to_string());
        }

        let mut entries = self.entries.lock().unwrap();
        if entries.get(identity).is_some_and(|e| e.code == code) {
            entries.remove(identity);
            return Ok(true);
        }
        Ok(false)
    }

    async fn purge_expired(&self) -> Result<u64, String> {
        if self.should_fail {
            return Err("Store error".to_string());
        }

        let mut entries = self.entries.lock().unwrap();
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired());
        Ok((before - entries.len()) as u64)
    }
}
