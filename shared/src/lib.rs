//! # Shared Module
//!
//! Cross-cutting types for the OTP relay workspace: the JSON response
//! envelope, environment-driven configuration, and phone-number utilities.

pub mod config;
pub mod types;
pub mod utils;
