//! Password evaluation sections
//!
//! Each section tests a single aspect of the password. Scoring sections are
//! worth one point each; advisory sections only add feedback.

mod blacklist;
mod length;
mod pattern;
mod variety;

pub use blacklist::blacklist_section;
pub use length::length_section;
pub use pattern::repetition_section;
pub use variety::{digit_section, lowercase_section, special_section, uppercase_section};

/// Result type for section functions.
/// - `Some(reason)` - Section failed, with the fix-it message
/// - `None` - Section passed
pub type SectionResult = Option<&'static str>;

pub type Section = fn(&str) -> SectionResult;
