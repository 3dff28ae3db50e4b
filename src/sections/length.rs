//! Length section - checks password minimum length.

use super::SectionResult;

pub const MIN_LENGTH: usize = 8;

/// Checks if the password has at least [`MIN_LENGTH`] characters.
///
/// Length is counted in `char`s, not bytes.
pub fn length_section(password: &str) -> SectionResult {
    if password.chars().count() < MIN_LENGTH {
        return Some("Make it at least 8 characters long.");
    }
    None
}
