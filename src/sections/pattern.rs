//! Pattern analysis section - detects passwords built from too few characters.

use std::collections::HashSet;

use super::SectionResult;

/// Minimum share of distinct characters before repetition is flagged.
const MIN_DISTINCT_RATIO: f64 = 0.6;

/// Flags passwords where distinct characters are fewer than 60% of the length.
///
/// The comparison is strict, so the empty string (`0 < 0`) passes.
pub fn repetition_section(password: &str) -> SectionResult {
    let total = password.chars().count();
    let distinct = password.chars().collect::<HashSet<char>>().len();

    if (distinct as f64) < (total as f64) * MIN_DISTINCT_RATIO {
        return Some("Avoid repeating characters too often.");
    }
    None
}
