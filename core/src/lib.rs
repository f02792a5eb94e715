//! # Core Domain Layer
//!
//! Business logic for the OTP relay: the `PendingVerification` entity,
//! the error taxonomy, and the `OtpService` that owns the full lifecycle
//! of a short-lived numeric credential. Transport and persistence live
//! behind the `SmsSender` and `OtpStore` traits; concrete implementations
//! are provided by the infrastructure crate.

pub mod domain;
pub mod errors;
pub mod services;
