//! Handler for `POST /verify-otp`

use actix_web::{web, HttpResponse};
use tracing::info;

use otp_core::services::otp::{OtpStore, SmsSender};
use otp_shared::types::response::SuccessResponse;

use crate::dto::otp::VerifyOtpRequest;
use crate::handlers::error::error_response;

use super::AppState;

/// Verify a submitted code, consuming the pending entry on success.
///
/// # Request Body
///
/// ```json
/// { "user_id": "u1", "otp": "1234" }
/// ```
///
/// The code is accepted as a JSON string or number.
///
/// # Responses
///
/// - `200 {"success":true}` on match; the entry is consumed and the
///   same code can never verify again
/// - `400 {"error":"Invalid OTP"}` otherwise, identical whether the
///   code was wrong, expired, exhausted, missing, or never requested
pub async fn verify_otp<S, T>(
    state: web::Data<AppState<S, T>>,
    request: web::Json<VerifyOtpRequest>,
) -> HttpResponse
where
    S: SmsSender + 'static,
    T: OtpStore + 'static,
{
    let user_id = request.user_id.as_deref().unwrap_or("").trim();
    let submitted = request
        .otp
        .as_ref()
        .map(|c| c.normalized())
        .unwrap_or_default();

    info!(user_id = user_id, "Processing verify-otp request");

    match state.otp_service.verify_code(user_id, &submitted).await {
        Ok(()) => HttpResponse::Ok().json(SuccessResponse::new()),
        Err(error) => error_response(&error),
    }
}
