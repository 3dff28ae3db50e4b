//! Blacklist of passwords too common to be used.
//!
//! The list is fixed at compile time; there is no loading step.

/// Passwords that always trigger the "common password" feedback.
pub const COMMON_PASSWORDS: [&str; 5] = ["password", "123456", "qwerty", "admin", "letmein"];

/// Checks if a password is in the blacklist.
///
/// Comparison is case-insensitive and exact: `"Password"` matches,
/// `"password1"` does not.
pub fn is_common_password(password: &str) -> bool {
    let lowered = password.to_lowercase();
    COMMON_PASSWORDS.iter().any(|common| *common == lowered)
}
