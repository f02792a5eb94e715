//! OTP endpoints: `POST /send-otp` and `POST /verify-otp`

pub mod send;
pub mod verify;

use std::sync::Arc;

use otp_core::services::otp::{OtpService, OtpStore, SmsSender};

/// Application state holding the shared OTP service
pub struct AppState<S, T>
where
    S: SmsSender,
    T: OtpStore,
{
    pub otp_service: Arc<OtpService<S, T>>,
}
