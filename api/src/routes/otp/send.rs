//! Handler for `POST /send-otp`

use actix_web::{web, HttpResponse};
use tracing::info;

use otp_core::services::otp::{OtpStore, SmsSender};
use otp_shared::types::response::{ErrorResponse, SuccessResponse};
use otp_shared::utils::phone::mask_phone;

use crate::dto::otp::SendOtpRequest;
use crate::handlers::error::error_response;

use super::AppState;

/// Issue a verification code and dispatch it to the caller's mobile.
///
/// # Request Body
///
/// ```json
/// { "user_id": "u1", "mobile": "+15551234567" }
/// ```
///
/// # Responses
///
/// - `200 {"success":true,"message":"OTP sent to mobile"}` on dispatch;
///   the code itself never appears in the response
/// - `400 {"error":"Missing user_id or mobile"}` when a field is absent
///   or empty; no store mutation, no dispatch
/// - `500 {"error":"Failed to send OTP"}` when the messenger fails
pub async fn send_otp<S, T>(
    state: web::Data<AppState<S, T>>,
    request: web::Json<SendOtpRequest>,
) -> HttpResponse
where
    S: SmsSender + 'static,
    T: OtpStore + 'static,
{
    let user_id = request.user_id.as_deref().unwrap_or("").trim();
    let mobile = request.mobile.as_deref().unwrap_or("").trim();

    if user_id.is_empty() || mobile.is_empty() {
        return HttpResponse::BadRequest()
            .json(ErrorResponse::new("Missing user_id or mobile"));
    }

    info!(
        user_id = user_id,
        mobile = %mask_phone(mobile),
        "Processing send-otp request"
    );

    match state.otp_service.request_code(user_id, mobile).await {
        Ok(_outcome) => {
            HttpResponse::Ok().json(SuccessResponse::with_message("OTP sent to mobile"))
        }
        Err(error) => error_response(&error),
    }
}
