//! OTP endpoint DTOs
//!
//! Field names follow the reference wire contract: `user_id` and
//! `mobile` on send, `user_id` and `otp` on verify. All fields are
//! optional at the serde level so that a missing field produces the
//! contract's own error response instead of a deserializer 400.

use serde::{Deserialize, Serialize};

/// Body of `POST /send-otp`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendOtpRequest {
    /// Opaque subscriber identifier
    pub user_id: Option<String>,

    /// Destination phone number
    pub mobile: Option<String>,
}

/// Body of `POST /verify-otp`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyOtpRequest {
    /// Opaque subscriber identifier
    pub user_id: Option<String>,

    /// Submitted code, as a JSON string or number
    pub otp: Option<CodeValue>,
}

/// A submitted code in either JSON form.
///
/// The contract treats `1234` and `"1234"` as the same code; both
/// normalize to the decimal-string form the store compares against.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CodeValue {
    Number(u64),
    Text(String),
}

impl CodeValue {
    /// Decimal-string form used for comparison
    pub fn normalized(&self) -> String {
        match self {
            CodeValue::Number(n) => n.to_string(),
            CodeValue::Text(s) => s.trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_value_accepts_number_and_string() {
        let from_number: VerifyOtpRequest =
            serde_json::from_str(r#"{"user_id":"u1","otp":1234}"#).unwrap();
        let from_string: VerifyOtpRequest =
            serde_json::from_str(r#"{"user_id":"u1","otp":"1234"}"#).unwrap();

        assert_eq!(from_number.otp.unwrap().normalized(), "1234");
        assert_eq!(from_string.otp.unwrap().normalized(), "1234");
    }

    #[test]
    fn test_code_value_trims_whitespace() {
        let code = CodeValue::Text(" 1234 ".to_string());
        assert_eq!(code.normalized(), "1234");
    }

    #[test]
    fn test_missing_fields_deserialize() {
        let request: SendOtpRequest = serde_json::from_str(r#"{"mobile":"+1555"}"#).unwrap();
        assert!(request.user_id.is_none());

        let request: VerifyOtpRequest = serde_json::from_str(r#"{}"#).unwrap();
        assert!(request.user_id.is_none());
        assert!(request.otp.is_none());
    }
}
