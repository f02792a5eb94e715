//! Phone number helpers
//!
//! Destinations are treated as opaque deliverable addresses by the OTP
//! core; these helpers exist for logging hygiene and for senders that
//! want an E.164 sanity check before calling out to a provider.

/// Mask a phone number for logging, keeping only the last 4 digits.
///
/// ```
/// use otp_shared::utils::phone::mask_phone;
/// assert_eq!(mask_phone("+15551234567"), "+*******4567");
/// ```
pub fn mask_phone(phone: &str) -> String {
    // Counted in chars, not bytes: the input is raw caller data and may
    // contain multi-byte characters.
    let total = phone.chars().count();
    if total <= 4 {
        return "*".repeat(total);
    }

    let visible = 4;
    let tail: String = phone.chars().skip(total - visible).collect();

    if phone.starts_with('+') {
        format!("+{}{}", "*".repeat(total - 1 - visible), tail)
    } else {
        format!("{}{}", "*".repeat(total - visible), tail)
    }
}

/// Check whether a phone number is in E.164 format: a leading `+`
/// followed by 8 to 15 digits.
pub fn is_valid_phone_number(phone: &str) -> bool {
    let Some(digits) = phone.strip_prefix('+') else {
        return false;
    };

    if digits.len() < 8 || digits.len() > 15 {
        return false;
    }

    digits.chars().all(|c| c.is_ascii_digit())
}
