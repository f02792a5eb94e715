use std::sync::Arc;

use actix_web::{web, HttpServer};
use tracing::info;
use tracing_subscriber::EnvFilter;

use otp_core::services::otp::{OtpService, StoreSweeper, SweeperConfig};
use otp_infra::sms::create_sms_sender;
use otp_infra::store::create_store;
use otp_shared::config::{OtpConfig, ServerConfig, SmsConfig, StoreConfig};

use otp_api::app::create_app;
use otp_api::routes::otp::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables from .env if present
    dotenvy::dotenv().ok();

    // Initialize tracing with RUST_LOG-style filtering
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Starting OTP relay");

    let server_config = ServerConfig::from_env();
    let otp_config = OtpConfig::from_env();
    let sms_config = SmsConfig::from_env();
    let store_config = StoreConfig::from_env();

    let sender = Arc::new(create_sms_sender(&sms_config));
    let store = Arc::new(create_store(&store_config, &otp_config).await);

    // Background sweep bounds growth of stores without native TTL
    let sweeper = StoreSweeper::new(
        store.clone(),
        SweeperConfig {
            interval_seconds: otp_config.sweep_interval_secs,
            enabled: true,
        },
    );
    tokio::spawn(sweeper.run());

    let otp_service = Arc::new(OtpService::new(sender, store, otp_config));
    let app_state = web::Data::new(AppState { otp_service });

    let bind_address = server_config.bind_address();
    info!("Server will bind to: {}", bind_address);

    HttpServer::new(move || create_app(app_state.clone()))
        .bind(&bind_address)?
        .run()
        .await
}
