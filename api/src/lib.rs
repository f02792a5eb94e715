//! # API Layer
//!
//! HTTP binding for the OTP relay: request/response DTOs, route
//! handlers for `/send-otp` and `/verify-otp`, and the error-to-status
//! mapping. The core stays transport-agnostic; everything HTTP-shaped
//! lives here.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
