//! Result types returned by the strength scorer.

use std::fmt;

/// Highest score a password can reach: one point per class check.
pub const MAX_SCORE: u8 = 5;

/// Categorical strength, derived only from the class-check score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strength {
    Weak,
    Moderate,
    Strong,
}

impl Strength {
    /// Maps a 0..=5 score to its label.
    ///
    /// Anything above [`MAX_SCORE`] is treated as `Strong`.
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=2 => Strength::Weak,
            3..=4 => Strength::Moderate,
            _ => Strength::Strong,
        }
    }

    /// Presentation colour for UI layers.
    pub fn color(&self) -> &'static str {
        match self {
            Strength::Weak => "red",
            Strength::Moderate => "orange",
            Strength::Strong => "green",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Strength::Weak => "Weak",
            Strength::Moderate => "Moderate",
            Strength::Strong => "Strong",
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of [`check_password_strength`](crate::check_password_strength).
///
/// `feedback` lists fix-it messages in check order. It can be non-empty for a
/// `Strong` password, since the repetition and common-password checks never
/// touch the score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreResult {
    pub score: u8,
    pub label: Strength,
    pub feedback: Vec<String>,
}

impl ScoreResult {
    pub(crate) fn new(score: u8, feedback: Vec<String>) -> Self {
        Self {
            score,
            label: Strength::from_score(score),
            feedback,
        }
    }

    pub fn color(&self) -> &'static str {
        self.label.color()
    }

    pub fn is_strong(&self) -> bool {
        self.label == Strength::Strong
    }
}
