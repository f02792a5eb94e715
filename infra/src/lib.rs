//! # Infrastructure Layer
//!
//! Concrete implementations behind the core capability traits:
//! - **Store**: in-memory map (default) and Redis with key TTL for
//!   multi-process deployments
//! - **SMS**: console-logging mock (default) and Twilio behind the
//!   `twilio-sms` feature
//!
//! Factory functions select implementations from configuration, falling
//! back to the mock/memory variants when a provider cannot be set up.

pub mod sms;
pub mod store;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Redis store error
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// SMS provider error
    #[error("SMS service error: {0}")]
    Sms(String),
}
