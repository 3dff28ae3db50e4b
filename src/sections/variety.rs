//! Character variety sections - one per required character class.

use super::SectionResult;

/// Symbols accepted by the special-character check.
pub const SPECIAL_CHARS: &str = "!@#$%^&*";

pub fn uppercase_section(password: &str) -> SectionResult {
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Some("Add at least one uppercase letter (A-Z).");
    }
    None
}

pub fn lowercase_section(password: &str) -> SectionResult {
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return Some("Include at least one lowercase letter (a-z).");
    }
    None
}

pub fn digit_section(password: &str) -> SectionResult {
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Some("Use at least one digit (0-9).");
    }
    None
}

/// Only the symbols in [`SPECIAL_CHARS`] count; other punctuation does not.
pub fn special_section(password: &str) -> SectionResult {
    if !password.chars().any(|c| SPECIAL_CHARS.contains(c)) {
        return Some("Include at least one special character (!@#$%^&*).");
    }
    None
}
