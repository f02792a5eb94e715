//! Result types for OTP operations

use chrono::{DateTime, Utc};

/// Outcome of a successful `request_code` call.
///
/// The generated code is deliberately absent; it travels only through
/// the SMS side channel.
#[derive(Debug, Clone)]
pub struct SendOutcome {
    /// Identity the code was issued for
    pub identity: String,

    /// Provider message id returned by the sender
    pub message_id: String,

    /// When the issued code expires
    pub expires_at: DateTime<Utc>,
}
