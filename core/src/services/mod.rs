//! Service layer

pub mod otp;
