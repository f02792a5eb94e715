//! Shared utilities

pub mod phone;

pub use phone::{is_valid_phone_number, mask_phone};
