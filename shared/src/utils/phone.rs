//! Phone number masking and validation utilities
//!
//! Two maskings live here: the on-screen masking shown on the OTP
//! verification screen, and the shorter masking used when phone numbers
//! appear in logs.

use once_cell::sync::Lazy;
use regex::Regex;

/// Number of trailing characters left visible by the display masking
const VISIBLE_DIGITS: usize = 4;

/// Regular expression for valid E.164 format
/// E.164 format: + followed by 1-3 digit country code (no leading 0) and up to 14 total digits
static E164_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+[1-9]\d{6,14}$").unwrap());

/// Validates if a phone number is in valid E.164 format
///
/// # Examples
///
/// ```
/// use rl_shared::utils::phone::is_valid_phone_format;
///
/// assert!(is_valid_phone_format("+14155552671"));
/// assert!(!is_valid_phone_format("4155552671")); // Missing +
/// ```
pub fn is_valid_phone_format(phone: &str) -> bool {
    E164_REGEX.is_match(phone)
}

/// Mask a phone number for on-screen display
///
/// Keeps the country-code prefix (everything up to and including the first
/// space; a zero-length prefix when there is no space) and the last 4
/// characters, masking everything in between with `*` grouped in clusters
/// of 3 separated by spaces:
///
/// ```
/// use rl_shared::utils::phone::mask_phone_display;
///
/// assert_eq!(mask_phone_display("+1 5551234567"), "+1 *** *** 4567");
/// ```
///
/// Strings too short to have a masked middle section are returned unchanged.
pub fn mask_phone_display(phone: &str) -> String {
    let chars: Vec<char> = phone.chars().collect();
    let prefix_len = chars
        .iter()
        .position(|c| *c == ' ')
        .map(|i| i + 1)
        .unwrap_or(0);

    if chars.len() <= prefix_len + VISIBLE_DIGITS {
        return phone.to_string();
    }

    let mut masked = chars.len() - prefix_len - VISIBLE_DIGITS;
    let mut out: String = chars[..prefix_len].iter().collect();
    while masked > 0 {
        let group = masked.min(3);
        out.extend(std::iter::repeat('*').take(group));
        masked -= group;
        if masked > 0 {
            out.push(' ');
        }
    }
    out.push(' ');
    out.extend(chars[chars.len() - VISIBLE_DIGITS..].iter());
    out
}

/// Mask a phone number for logging (show only last 4 digits)
pub fn mask_phone(phone: &str) -> String {
    let count = phone.chars().count();
    if count <= VISIBLE_DIGITS {
        return "*".repeat(count);
    }
    let tail: String = phone
        .chars()
        .skip(count - VISIBLE_DIGITS)
        .collect();
    format!("***{}", tail)
}
