//! Outbound SMS provider configuration

use serde::{Deserialize, Serialize};

use super::env_or_string;

/// SMS provider configuration
///
/// `provider` selects the concrete sender: `"mock"` logs messages to the
/// console, `"twilio"` dispatches through the Twilio API (requires the
/// `twilio-sms` feature in the infrastructure crate).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SmsConfig {
    /// SMS service provider ("mock" or "twilio")
    pub provider: String,

    /// Provider account identifier (Twilio Account SID)
    pub account_sid: String,

    /// Provider secret (Twilio Auth Token)
    pub auth_token: String,

    /// Sender phone number in E.164 format
    pub from_number: String,
}

impl Default for SmsConfig {
    fn default() -> Self {
        Self {
            provider: String::from("mock"),
            account_sid: String::new(),
            auth_token: String::new(),
            from_number: String::from("+15005550006"),
        }
    }
}

impl SmsConfig {
    /// Load from `SMS_PROVIDER` / `TWILIO_*` environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            provider: env_or_string("SMS_PROVIDER", &defaults.provider),
            account_sid: env_or_string("TWILIO_ACCOUNT_SID", ""),
            auth_token: env_or_string("TWILIO_AUTH_TOKEN", ""),
            from_number: env_or_string("TWILIO_PHONE_NUMBER", &defaults.from_number),
        }
    }
}
