//! Blacklist section - checks if password is in common password list.

use crate::blacklist::is_common_password;
use super::SectionResult;

pub fn blacklist_section(password: &str) -> SectionResult {
    if is_common_password(password) {
        return Some("Avoid common passwords.");
    }
    None
}
