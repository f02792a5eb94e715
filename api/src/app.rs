//! Application factory
//!
//! Builds the actix-web `App` around a shared `AppState`. Generic over
//! the sender and store so the integration tests can plug in mocks.

use actix_web::{web, App, HttpResponse};
use tracing_actix_web::TracingLogger;

use otp_core::services::otp::{OtpStore, SmsSender};

use crate::middleware::cors::create_cors;
use crate::routes::otp::{send::send_otp, verify::verify_otp, AppState};

/// Create and configure the application
pub fn create_app<S, T>(
    app_state: web::Data<AppState<S, T>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    S: SmsSender + 'static,
    T: OtpStore + 'static,
{
    let cors = create_cors();

    App::new()
        .app_data(app_state)
        .wrap(TracingLogger::default())
        .wrap(cors)
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // OTP endpoints
        .route("/send-otp", web::post().to(send_otp::<S, T>))
        .route("/verify-otp", web::post().to(verify_otp::<S, T>))
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "otp-relay",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "not_found",
        "message": "The requested resource was not found"
    }))
}
