//! Entity definitions

pub mod pending_verification;

pub use pending_verification::PendingVerification;
