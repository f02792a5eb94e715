//! OTP lifecycle configuration

use serde::{Deserialize, Serialize};

use super::env_or;

/// Default expiry window for pending codes (5 minutes)
pub const DEFAULT_EXPIRATION_MINUTES: i64 = 5;

/// Default maximum verification attempts per code
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Default bound on a single outbound dispatch call (30 seconds)
pub const DEFAULT_DISPATCH_TIMEOUT_SECS: u64 = 30;

/// Default interval between expired-entry sweeps (60 seconds)
pub const DEFAULT_SWEEP_INTERVAL_SECS: u64 = 60;

/// OTP code-space and lifecycle configuration
///
/// The code space matches the reference contract: a uniformly random
/// integer in `[1000, 9999]`, rendered as a 4-digit decimal string whose
/// leading digit is never zero.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OtpConfig {
    /// Lowest code value, inclusive
    pub code_min: u32,

    /// Highest code value, inclusive
    pub code_max: u32,

    /// Minutes before a pending code expires
    pub expiration_minutes: i64,

    /// Maximum verification attempts before the entry is discarded
    pub max_attempts: u32,

    /// Timeout applied to a single dispatch to the SMS provider
    pub dispatch_timeout_secs: u64,

    /// Interval between expired-entry sweeps (memory store only)
    pub sweep_interval_secs: u64,
}

impl Default for OtpConfig {
    fn default() -> Self {
        Self {
            code_min: 1000,
            code_max: 9999,
            expiration_minutes: DEFAULT_EXPIRATION_MINUTES,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            dispatch_timeout_secs: DEFAULT_DISPATCH_TIMEOUT_SECS,
            sweep_interval_secs: DEFAULT_SWEEP_INTERVAL_SECS,
        }
    }
}

impl OtpConfig {
    /// Load from `OTP_*` environment variables, keeping defaults for
    /// anything unset. The code space itself is not env-tunable; the
    /// 4-digit range is part of the service contract.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            code_min: defaults.code_min,
            code_max: defaults.code_max,
            expiration_minutes: env_or("OTP_EXPIRATION_MINUTES", defaults.expiration_minutes),
            max_attempts: env_or("OTP_MAX_ATTEMPTS", defaults.max_attempts),
            dispatch_timeout_secs: env_or(
                "OTP_DISPATCH_TIMEOUT_SECS",
                defaults.dispatch_timeout_secs,
            ),
            sweep_interval_secs: env_or("OTP_SWEEP_INTERVAL_SECS", defaults.sweep_interval_secs),
        }
    }

    /// Expiry window in seconds, used as the Redis key TTL.
    ///
    /// Clamped to at least 1: `SETEX` rejects a zero expiry, so a zero
    /// or negative window degrades to the shortest TTL Redis accepts.
    pub fn expiration_seconds(&self) -> u64 {
        ((self.expiration_minutes.max(0) as u64) * 60).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_code_space() {
        let config = OtpConfig::default();
        assert_eq!(config.code_min, 1000);
        assert_eq!(config.code_max, 9999);
    }

    #[test]
    fn test_expiration_seconds() {
        let config = OtpConfig::default();
        assert_eq!(config.expiration_seconds(), 300);
    }

    #[test]
    fn test_expiration_seconds_never_zero() {
        let config = OtpConfig {
            expiration_minutes: 0,
            ..OtpConfig::default()
        };
        assert_eq!(config.expiration_seconds(), 1);

        let config = OtpConfig {
            expiration_minutes: -5,
            ..OtpConfig::default()
        };
        assert_eq!(config.expiration_seconds(), 1);
    }
}
