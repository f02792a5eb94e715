//! Error-to-HTTP mapping
//!
//! - `InvalidRequest` → 400 with the caller-facing message
//! - `VerificationFailed` → 400 `{"error":"Invalid OTP"}`, identical for
//!   every miss cause
//! - `DispatchFailed` → 500 `{"error":"Failed to send OTP"}`; provider
//!   detail stays in the logs
//! - `Internal` → 500 with a generic message

use actix_web::HttpResponse;

use otp_core::errors::OtpError;
use otp_shared::types::response::ErrorResponse;

/// Map an `OtpError` to its HTTP response
pub fn error_response(error: &OtpError) -> HttpResponse {
    match error {
        OtpError::InvalidRequest { message } => {
            HttpResponse::BadRequest().json(ErrorResponse::new(message.clone()))
        }
        OtpError::VerificationFailed => {
            HttpResponse::BadRequest().json(ErrorResponse::new("Invalid OTP"))
        }
        OtpError::DispatchFailed { .. } => {
            HttpResponse::InternalServerError().json(ErrorResponse::new("Failed to send OTP"))
        }
        OtpError::Internal { .. } => {
            HttpResponse::InternalServerError().json(ErrorResponse::new("Internal server error"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn test_status_codes() {
        let response = error_response(&OtpError::invalid_request("Missing user_id or mobile"));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = error_response(&OtpError::VerificationFailed);
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = error_response(&OtpError::dispatch_failed("provider down"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = error_response(&OtpError::internal("store down"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
