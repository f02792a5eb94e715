//! Capability traits consumed by the OTP service

use async_trait::async_trait;

use crate::domain::entities::PendingVerification;

/// Outbound messenger capability.
///
/// Implementations dispatch a text message to an address and report a
/// provider message id on success. Errors cross this seam as strings;
/// the service folds them into `OtpError::DispatchFailed`.
#[async_trait]
pub trait SmsSender: Send + Sync {
    /// Send a raw text message. Returns the provider message id.
    async fn send_sms(&self, to: &str, message: &str) -> Result<String, String>;

    /// Send a verification code, formatted with the standard message
    /// body. The code travels only through this side channel.
    async fn send_code(&self, to: &str, code: &str) -> Result<String, String> {
        let message = format!("Your OTP is: {}", code);
        self.send_sms(to, &message).await
    }
}

/// Pending-code store capability.
///
/// All read-modify-write operations must be atomic with respect to each
/// other: a concurrent `put` and `take_if_match` for the same identity
/// must never observe a partially written entry.
#[async_trait]
pub trait OtpStore: Send + Sync {
    /// Insert or overwrite the entry for `entry.identity`. Overwriting
    /// permanently invalidates the previous code.
    async fn put(&self, entry: PendingVerification) -> Result<(), String>;

    /// Verify-and-consume in one atomic step.
    ///
    /// Returns `Ok(true)` and deletes the entry when `code` matches a
    /// live entry for `identity`. Returns `Ok(false)` for every miss:
    /// no entry, expired entry (deleted on sight), attempt cap reached
    /// (entry deleted), or wrong code (failed attempt recorded).
    async fn take_if_match(&self, identity: &str, code: &str) -> Result<bool, String>;

    /// Delete the entry for `identity` only if it still holds `code`.
    ///
    /// Compare-and-swap-style rollback used when dispatch fails after
    /// the entry was written; the comparison guards against deleting a
    /// newer entry written by a concurrent re-request. Returns whether
    /// an entry was deleted. No attempt accounting happens here.
    async fn remove_if_code(&self, identity: &str, code: &str) -> Result<bool, String>;

    /// Drop expired entries, returning how many were removed. Stores
    /// with native TTL support may implement this as a no-op.
    async fn purge_expired(&self) -> Result<u64, String>;
}
