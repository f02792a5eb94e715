//! Configuration module
//!
//! Environment-variable driven configuration broken into logical areas:
//! - `server` - HTTP server bind settings
//! - `otp` - code space, expiry window, attempt cap, dispatch timeout
//! - `sms` - outbound SMS provider selection and credentials
//! - `store` - pending-code store backend selection

pub mod otp;
pub mod server;
pub mod sms;
pub mod store;

pub use otp::OtpConfig;
pub use server::ServerConfig;
pub use sms::SmsConfig;
pub use store::{StoreBackend, StoreConfig};

use std::env;
use std::str::FromStr;

/// Read an environment variable and parse it, falling back to a default.
///
/// Unparseable values fall back silently; configuration never aborts
/// startup on a malformed optional variable.
pub(crate) fn env_or<T>(key: &str, default: T) -> T
where
    T: FromStr,
{
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Read an environment variable as a string, falling back to a default.
pub(crate) fn env_or_string(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
