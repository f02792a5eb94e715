//! OTP lifecycle service
//!
//! Owns generation, storage, delivery, verification and invalidation of
//! short-lived numeric codes. The service is transport-agnostic; the API
//! crate binds it to HTTP.

pub mod mocks;
pub mod service;
pub mod sweeper;
pub mod traits;
pub mod types;

#[cfg(test)]
mod tests;

pub use service::OtpService;
pub use sweeper::{StoreSweeper, SweeperConfig};
pub use traits::{OtpStore, SmsSender};
pub use types::SendOutcome;
