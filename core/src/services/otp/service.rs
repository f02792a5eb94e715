//! Main OTP service implementation

use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info, warn};

use otp_shared::config::OtpConfig;
use otp_shared::utils::phone::mask_phone;

use crate::domain::entities::PendingVerification;
use crate::errors::{OtpError, OtpResult};

use super::traits::{OtpStore, SmsSender};
use super::types::SendOutcome;

/// Service owning the full lifecycle of a short-lived numeric code
pub struct OtpService<S: SmsSender, T: OtpStore> {
    /// Outbound messenger for code delivery
    sender: Arc<S>,
    /// Pending-code store
    store: Arc<T>,
    /// Lifecycle configuration
    config: OtpConfig,
}

impl<S: SmsSender, T: OtpStore> OtpService<S, T> {
    /// Create a new OTP service
    pub fn new(sender: Arc<S>, store: Arc<T>, config: OtpConfig) -> Self {
        Self {
            sender,
            store,
            config,
        }
    }

    /// Issue a fresh code for `identity` and dispatch it to `destination`.
    ///
    /// The entry is written to the store before dispatch begins, so a
    /// verify arriving while the (potentially slow) dispatch is still in
    /// flight can already succeed. Dispatch runs under a bounded timeout;
    /// on failure or timeout the just-written entry is rolled back with a
    /// delete-if-code-matches so an undelivered code can never verify.
    pub async fn request_code(&self, identity: &str, destination: &str) -> OtpResult<SendOutcome> {
        if identity.trim().is_empty() || destination.trim().is_empty() {
            return Err(OtpError::invalid_request("Missing user_id or mobile"));
        }

        let entry = PendingVerification::new(identity, destination, &self.config);
        let code = entry.code.clone();
        let expires_at = entry.expires_at;

        self.store.put(entry).await.map_err(|e| {
            error!(
                identity = identity,
                error = %e,
                event = "otp_storage_failed",
                "Failed to store pending verification"
            );
            OtpError::internal(format!("Failed to store pending verification: {}", e))
        })?;

        info!(
            identity = identity,
            destination = %mask_phone(destination),
            event = "otp_generated",
            "Issued new verification code"
        );

        let dispatch = self.sender.send_code(destination, &code);
        let timeout = Duration::from_secs(self.config.dispatch_timeout_secs);

        let send_result = match tokio::time::timeout(timeout, dispatch).await {
            Ok(result) => result,
            Err(_) => Err(format!(
                "dispatch timed out after {}s",
                self.config.dispatch_timeout_secs
            )),
        };

        match send_result {
            Ok(message_id) => {
                info!(
                    identity = identity,
                    destination = %mask_phone(destination),
                    message_id = %message_id,
                    event = "otp_dispatched",
                    "Verification code dispatched"
                );

                Ok(SendOutcome {
                    identity: identity.to_string(),
                    message_id,
                    expires_at,
                })
            }
            Err(e) => {
                error!(
                    identity = identity,
                    destination = %mask_phone(destination),
                    error = %e,
                    event = "otp_dispatch_failed",
                    "Failed to dispatch verification code"
                );

                // Roll back so an undelivered code cannot verify. The
                // code comparison keeps a newer entry from a concurrent
                // re-request intact.
                if let Err(rollback_err) = self.store.remove_if_code(identity, &code).await {
                    warn!(
                        identity = identity,
                        error = %rollback_err,
                        event = "otp_rollback_failed",
                        "Failed to roll back pending entry after dispatch failure"
                    );
                }

                Err(OtpError::dispatch_failed(e))
            }
        }
    }

    /// Verify a submitted code for `identity`.
    ///
    /// The caller normalizes numeric input to its decimal-string form
    /// before calling. Every miss maps to `VerificationFailed`; the cause
    /// (no entry, wrong code, expired, attempts exhausted) is visible
    /// only in the logs.
    pub async fn verify_code(&self, identity: &str, submitted: &str) -> OtpResult<()> {
        let submitted = submitted.trim();
        if identity.trim().is_empty() || submitted.is_empty() {
            warn!(
                identity = identity,
                event = "otp_verification_rejected",
                "Verification attempted with empty identity or code"
            );
            return Err(OtpError::VerificationFailed);
        }

        match self.store.take_if_match(identity, submitted).await {
            Ok(true) => {
                info!(
                    identity = identity,
                    event = "otp_verified",
                    "Verification code accepted and consumed"
                );
                Ok(())
            }
            Ok(false) => {
                warn!(
                    identity = identity,
                    event = "otp_verification_failed",
                    "Verification code rejected"
                );
                Err(OtpError::VerificationFailed)
            }
            Err(e) => {
                error!(
                    identity = identity,
                    error = %e,
                    event = "otp_verification_error",
                    "Store error during verification"
                );
                Err(OtpError::internal(format!("Failed to verify code: {}", e)))
            }
        }
    }
}
