//! Integration tests for `POST /send-otp`

use actix_web::{http::StatusCode, test, web};
use serde_json::{json, Value};
use std::sync::Arc;

use otp_api::app::create_app;
use otp_api::routes::otp::AppState;
use otp_core::services::otp::mocks::{MockOtpStore, MockSmsSender};
use otp_core::services::otp::OtpService;
use otp_shared::config::OtpConfig;

fn app_state(
    sender: Arc<MockSmsSender>,
    store: Arc<MockOtpStore>,
) -> web::Data<AppState<MockSmsSender, MockOtpStore>> {
    let otp_service = Arc::new(OtpService::new(sender, store, OtpConfig::default()));
    web::Data::new(AppState { otp_service })
}

#[actix_web::test]
async fn test_send_otp_success() {
    let sender = Arc::new(MockSmsSender::new());
    let store = Arc::new(MockOtpStore::new());
    let app = test::init_service(create_app(app_state(sender.clone(), store.clone()))).await;

    let req = test::TestRequest::post()
        .uri("/send-otp")
        .set_json(json!({"user_id": "u1", "mobile": "+15551234567"}))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "OTP sent to mobile");

    // The messenger was invoked for the right destination with a
    // 4-digit code in [1000, 9999]
    let message = sender.last_message("+15551234567").unwrap();
    assert!(message.starts_with("Your OTP is: "));
    let code: u32 = sender.last_code("+15551234567").unwrap().parse().unwrap();
    assert!((1000..=9999).contains(&code));

    // The code never appears in the response body
    assert!(!body.to_string().contains(&code.to_string()));
}

#[actix_web::test]
async fn test_send_otp_missing_user_id() {
    let sender = Arc::new(MockSmsSender::new());
    let app = test::init_service(create_app(app_state(
        sender.clone(),
        Arc::new(MockOtpStore::new()),
    )))
    .await;

    let req = test::TestRequest::post()
        .uri("/send-otp")
        .set_json(json!({"mobile": "+15551234567"}))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Missing user_id or mobile");

    // No messenger call may happen on a rejected request
    assert_eq!(sender.message_count(), 0);
}

#[actix_web::test]
async fn test_send_otp_missing_mobile() {
    let sender = Arc::new(MockSmsSender::new());
    let app = test::init_service(create_app(app_state(
        sender.clone(),
        Arc::new(MockOtpStore::new()),
    )))
    .await;

    let req = test::TestRequest::post()
        .uri("/send-otp")
        .set_json(json!({"user_id": "u1"}))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Missing user_id or mobile");
    assert_eq!(sender.message_count(), 0);
}

#[actix_web::test]
async fn test_send_otp_empty_fields_rejected() {
    let sender = Arc::new(MockSmsSender::new());
    let app = test::init_service(create_app(app_state(
        sender.clone(),
        Arc::new(MockOtpStore::new()),
    )))
    .await;

    let req = test::TestRequest::post()
        .uri("/send-otp")
        .set_json(json!({"user_id": "  ", "mobile": ""}))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(sender.message_count(), 0);
}

#[actix_web::test]
async fn test_send_otp_dispatch_failure() {
    let sender = Arc::new(MockSmsSender::failing());
    let store = Arc::new(MockOtpStore::new());
    let app = test::init_service(create_app(app_state(sender, store.clone()))).await;

    let req = test::TestRequest::post()
        .uri("/send-otp")
        .set_json(json!({"user_id": "u1", "mobile": "+15551234567"}))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Failed to send OTP");

    // A code that was never delivered must not remain verifiable
    assert!(store.pending_code("u1").is_none());
}

#[actix_web::test]
async fn test_send_otp_overwrites_pending_entry() {
    let sender = Arc::new(MockSmsSender::new());
    let store = Arc::new(MockOtpStore::new());
    let app = test::init_service(create_app(app_state(sender.clone(), store.clone()))).await;

    for _ in 0..2 {
        let req = test::TestRequest::post()
            .uri("/send-otp")
            .set_json(json!({"user_id": "u2", "mobile": "+15551234567"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    // One pending entry, holding the most recently dispatched code
    let stored = store.pending_code("u2").unwrap();
    assert_eq!(stored, sender.last_code("+15551234567").unwrap());
}

#[actix_web::test]
async fn test_health_endpoint() {
    let app = test::init_service(create_app(app_state(
        Arc::new(MockSmsSender::new()),
        Arc::new(MockOtpStore::new()),
    )))
    .await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
}

#[actix_web::test]
async fn test_unknown_route_returns_json_404() {
    let app = test::init_service(create_app(app_state(
        Arc::new(MockSmsSender::new()),
        Arc::new(MockOtpStore::new()),
    )))
    .await;

    let req = test::TestRequest::get().uri("/nope").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "not_found");
}
