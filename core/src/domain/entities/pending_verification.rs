//! Pending verification entity for the OTP lifecycle.

use chrono::{DateTime, Duration, Utc};
use constant_time_eq::constant_time_eq;
use rand::rngs::OsRng;
use rand::Rng;
use serde::{Deserialize, Serialize};

use otp_shared::config::OtpConfig;

/// Length of a generated code in decimal digits
pub const CODE_LENGTH: usize = 4;

/// One outstanding code issued to one identity.
///
/// At most one entry exists per identity at any time; issuing a new code
/// overwrites the previous entry and permanently invalidates its code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingVerification {
    /// Opaque subscriber/user identifier; primary lookup key
    pub identity: String,

    /// The 4-digit verification code as its decimal-string form
    pub code: String,

    /// Address the code was dispatched to, retained for audit
    pub destination: String,

    /// Timestamp of creation
    pub issued_at: DateTime<Utc>,

    /// Deadline after which the entry is no longer valid
    pub expires_at: DateTime<Utc>,

    /// Number of failed verification attempts made against this entry
    pub attempts: u32,

    /// Attempt cap; reaching it invalidates the entry
    pub max_attempts: u32,
}

impl PendingVerification {
    /// Create a new entry with a freshly drawn random code.
    ///
    /// The code is drawn uniformly from `[config.code_min,
    /// config.code_max]` with the operating system CSPRNG; each issuance
    /// draws independently.
    pub fn new(identity: &str, destination: &str, config: &OtpConfig) -> Self {
        let code = Self::generate_code(config.code_min, config.code_max);
        let now = Utc::now();

        Self {
            identity: identity.to_string(),
            code,
            destination: destination.to_string(),
            issued_at: now,
            expires_at: now + Duration::minutes(config.expiration_minutes),
            attempts: 0,
            max_attempts: config.max_attempts,
        }
    }

    /// Draw a uniformly random code in `[min, max]` as a decimal string
    fn generate_code(min: u32, max: u32) -> String {
        let code: u32 = OsRng.gen_range(min..=max);
        code.to_string()
    }

    /// Whether the entry's expiry deadline has passed
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }

    /// Whether the attempt cap has been reached
    pub fn attempts_exhausted(&self) -> bool {
        self.attempts >= self.max_attempts
    }

    /// Constant-time comparison of a submitted code against the stored
    /// code. The caller is responsible for normalizing numeric input to
    /// its decimal-string form first.
    pub fn code_matches(&self, submitted: &str) -> bool {
        constant_time_eq(self.code.as_bytes(), submitted.as_bytes())
    }

    /// Record a failed verification attempt and return the remaining
    /// attempts after it.
    pub fn record_failed_attempt(&mut self) -> u32 {
        self.attempts += 1;
        self.remaining_attempts()
    }

    /// Remaining verification attempts (0 once exhausted)
    pub fn remaining_attempts(&self) -> u32 {
        self.max_attempts.saturating_sub(self.attempts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> OtpConfig {
        OtpConfig::default()
    }

    #[test]
    fn test_new_entry() {
        let entry = PendingVerification::new("u1", "+15551234567", &test_config());

        assert_eq!(entry.identity, "u1");
        assert_eq!(entry.destination, "+15551234567");
        assert_eq!(entry.code.len(), CODE_LENGTH);
        assert_eq!(entry.attempts, 0);
        assert!(!entry.is_expired());
        assert!(!entry.attempts_exhausted());
    }

    #[test]
    fn test_code_within_range() {
        for _ in 0..100 {
            let entry = PendingVerification::new("u1", "+15551234567", &test_config());
            let value: u32 = entry.code.parse().expect("code must be numeric");
            assert!((1000..=9999).contains(&value));
        }
    }

    #[test]
    fn test_codes_drawn_independently() {
        let codes: Vec<String> = (0..100)
            .map(|_| PendingVerification::new("u1", "+15551234567", &test_config()).code)
            .collect();

        let unique = codes.iter().collect::<std::collections::HashSet<_>>().len();
        assert!(unique > 1);
    }

    #[test]
    fn test_code_matches() {
        let entry = PendingVerification::new("u1", "+15551234567", &test_config());
        let code = entry.code.clone();

        assert!(entry.code_matches(&code));
        assert!(!entry.code_matches("0000"));
        assert!(!entry.code_matches(""));
    }

    #[test]
    fn test_expiry() {
        let config = OtpConfig {
            expiration_minutes: 0,
            ..OtpConfig::default()
        };
        let entry = PendingVerification::new("u1", "+15551234567", &config);

        std::thread::sleep(std::time::Duration::from_millis(10));
        assert!(entry.is_expired());
    }

    #[test]
    fn test_serialization_round_trip() {
        let entry = PendingVerification::new("u1", "+15551234567", &test_config());

        let json = serde_json::to_string(&entry).unwrap();
        let restored: PendingVerification = serde_json::from_str(&json).unwrap();

        assert_eq!(entry, restored);
    }

    #[test]
    fn test_attempt_accounting() {
        let mut entry = PendingVerification::new("u1", "+15551234567", &test_config());

        assert_eq!(entry.remaining_attempts(), 3);
        assert_eq!(entry.record_failed_attempt(), 2);
        assert_eq!(entry.record_failed_attempt(), 1);
        assert_eq!(entry.record_failed_attempt(), 0);
        assert!(entry.attempts_exhausted());
        assert_eq!(entry.remaining_attempts(), 0);
    }
}
