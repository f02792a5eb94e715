//! Error taxonomy for the OTP lifecycle
//!
//! Three externally visible failure classes, mapped by the API layer:
//! `InvalidRequest` (caller error, 4xx), `VerificationFailed` (expected
//! miss, 4xx with a deliberately generic message), `DispatchFailed`
//! (external dependency error, 5xx). `Internal` covers store faults.

use thiserror::Error;

/// OTP service errors
#[derive(Error, Debug)]
pub enum OtpError {
    /// Caller error: a required field is missing or empty
    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },

    /// Expected miss: wrong code, no pending code, expired code, or
    /// attempt cap reached. One variant for all causes so the external
    /// signal never leaks whether an identity has a pending request.
    #[error("Invalid OTP")]
    VerificationFailed,

    /// The outbound messenger reported an error or timed out
    #[error("Failed to send OTP: {message}")]
    DispatchFailed { message: String },

    /// Store or other internal fault
    #[error("Internal error: {message}")]
    Internal { message: String },
}

/// Result alias for OTP operations
pub type OtpResult<T> = Result<T, OtpError>;

impl OtpError {
    /// Convenience constructor for missing-field rejections
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }

    /// Convenience constructor for dispatch failures
    pub fn dispatch_failed(message: impl Into<String>) -> Self {
        Self::DispatchFailed {
            message: message.into(),
        }
    }

    /// Convenience constructor for internal faults
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verification_failed_message_is_generic() {
        // The Display form is what callers may surface; it must not
        // distinguish miss causes.
        assert_eq!(OtpError::VerificationFailed.to_string(), "Invalid OTP");
    }

    #[test]
    fn test_constructors() {
        let err = OtpError::invalid_request("Missing user_id or mobile");
        assert!(matches!(err, OtpError::InvalidRequest { .. }));
        assert_eq!(err.to_string(), "Invalid request: Missing user_id or mobile");
    }
}
