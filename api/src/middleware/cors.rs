//! CORS middleware configuration
//!
//! The dashboard frontend is served from a different origin than the
//! API, so the browser issues cross-origin requests. Development allows
//! any origin; production restricts to `ALLOWED_ORIGINS`.
//!
//! # Environment Variables
//! - `ENVIRONMENT`: Set to "production" for restricted settings
//! - `ALLOWED_ORIGINS`: Comma-separated allowed origins (production)
//! - `CORS_MAX_AGE`: Preflight cache lifetime in seconds (default 3600)

use actix_cors::Cors;
use actix_web::http::{header, Method};
use std::env;
use tracing::{info, warn};

/// Create a CORS middleware instance for the current environment
pub fn create_cors() -> Cors {
    let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());
    let max_age = env::var("CORS_MAX_AGE")
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(3600);

    if environment == "production" {
        create_production_cors(max_age)
    } else {
        create_development_cors(max_age)
    }
}

fn create_development_cors(max_age: usize) -> Cors {
    info!("Configuring CORS for development environment");

    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
        ])
        .max_age(max_age)
}

fn create_production_cors(max_age: usize) -> Cors {
    let allowed_origins = env::var("ALLOWED_ORIGINS").unwrap_or_default();

    if allowed_origins.is_empty() {
        warn!("ALLOWED_ORIGINS not set in production; CORS will reject browser requests");
    } else {
        info!("Configuring CORS for origins: {}", allowed_origins);
    }

    let mut cors = Cors::default()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
        ])
        .max_age(max_age);

    for origin in allowed_origins.split(',').filter(|o| !o.trim().is_empty()) {
        cors = cors.allowed_origin(origin.trim());
    }

    cors
}
