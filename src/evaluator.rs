//! Password strength evaluator - main evaluation logic.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::sections::{
    Section, blacklist_section, digit_section, length_section, lowercase_section,
    repetition_section, special_section, uppercase_section,
};
use crate::types::ScoreResult;

/// Class checks, one point each, in feedback order.
const SCORING_SECTIONS: [(&str, Section); 5] = [
    ("length", length_section),
    ("uppercase", uppercase_section),
    ("lowercase", lowercase_section),
    ("digit", digit_section),
    ("special", special_section),
];

/// Checks that add feedback but never change the score.
const ADVISORY_SECTIONS: [(&str, Section); 2] = [
    ("repetition", repetition_section),
    ("blacklist", blacklist_section),
];

/// Scores a password and collects feedback for every failed check.
///
/// Never fails: the empty string simply fails all five class checks.
///
/// # Returns
/// A `ScoreResult` with a 0..=5 score, its label and the feedback list.
pub fn check_password_strength(password: &SecretString) -> ScoreResult {
    let pwd = password.expose_secret();
    let mut score = 0u8;
    let mut feedback = Vec::new();

    for (_section_name, section_fn) in SCORING_SECTIONS {
        match section_fn(pwd) {
            Some(reason) => {
                #[cfg(feature = "tracing")]
                tracing::trace!("Scoring section failed: {}", _section_name);
                feedback.push(reason.to_string());
            }
            None => score += 1,
        }
    }

    for (_section_name, section_fn) in ADVISORY_SECTIONS {
        if let Some(reason) = section_fn(pwd) {
            #[cfg(feature = "tracing")]
            tracing::trace!("Advisory section triggered: {}", _section_name);
            feedback.push(reason.to_string());
        }
    }

    let result = ScoreResult::new(score, feedback);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        "Password evaluated: score={} label={} feedback={}",
        result.score,
        result.label,
        result.feedback.len()
    );

    result
}

/// Async version that sends the result via channel.
///
/// Waits a short debounce first; if `token` is cancelled by then nothing is
/// sent.
#[cfg(feature = "async")]
pub async fn check_password_strength_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<ScoreResult>,
) {
    use std::time::Duration;

    #[cfg(feature = "tracing")]
    tracing::info!("evaluation is about to start...");

    tokio::time::sleep(Duration::from_millis(300)).await;
    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::debug!("Password evaluation cancelled");
        return;
    }

    let result = check_password_strength(password);

    if let Err(_e) = tx.send(result).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password evaluation result: {}", _e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Strength;

    fn check(pwd: &str) -> ScoreResult {
        check_password_strength(&SecretString::new(pwd.to_string().into()))
    }

    #[test]
    fn test_common_password() {
        let result = check("password");

        assert_eq!(result.score, 2);
        assert_eq!(result.label, Strength::Weak);
        assert_eq!(
            result.feedback,
            vec![
                "Add at least one uppercase letter (A-Z).",
                "Use at least one digit (0-9).",
                "Include at least one special character (!@#$%^&*).",
                "Avoid common passwords.",
            ]
        );
    }

    #[test]
    fn test_strong_password() {
        let result = check("Passw0rd!");

        assert_eq!(result.score, 5);
        assert_eq!(result.label, Strength::Strong);
        assert!(result.feedback.is_empty());
    }

    #[test]
    fn test_repeated_chars() {
        // length and lowercase
        let result = check("aaaaaaaa");

        assert_eq!(result.score, 2);
        assert_eq!(result.label, Strength::Weak);
        assert!(
            result
                .feedback
                .contains(&"Avoid repeating characters too often.".to_string())
        );
    }

    #[test]
    fn test_empty_password() {
        let result = check("");

        assert_eq!(result.score, 0);
        assert_eq!(result.label, Strength::Weak);
        assert_eq!(
            result.feedback,
            vec![
                "Make it at least 8 characters long.",
                "Add at least one uppercase letter (A-Z).",
                "Include at least one lowercase letter (a-z).",
                "Use at least one digit (0-9).",
                "Include at least one special character (!@#$%^&*).",
            ]
        );
    }

    #[test]
    fn test_moderate_password() {
        // length, upper, lower, digit
        let result = check("Summer2024");

        assert_eq!(result.score, 4);
        assert_eq!(result.label, Strength::Moderate);
        assert_eq!(result.color(), "orange");
    }

    #[test]
    fn test_strong_label_keeps_advisory_feedback() {
        // all five classes, but 4 distinct of 10 chars
        let result = check("Aa1!Aa1!Aa");

        assert_eq!(result.score, 5);
        assert_eq!(result.label, Strength::Strong);
        assert_eq!(result.feedback, vec!["Avoid repeating characters too often."]);
    }

    #[test]
    fn test_feedback_order() {
        // short, no upper/digit/special, repetitive and common
        let result = check("admin");
        assert_eq!(
            result.feedback,
            vec![
                "Make it at least 8 characters long.",
                "Add at least one uppercase letter (A-Z).",
                "Use at least one digit (0-9).",
                "Include at least one special character (!@#$%^&*).",
                "Avoid common passwords.",
            ]
        );

        let result = check("aaaaa");
        assert_eq!(
            result.feedback.last().map(String::as_str),
            Some("Avoid repeating characters too often.")
        );
    }

    #[test]
    fn test_deterministic() {
        for pwd in ["", "abc", "Passw0rd!", "qwerty", "zzzzzzzzzzZ9!"] {
            assert_eq!(check(pwd), check(pwd));
        }
    }

    #[test]
    fn test_adding_missing_class_never_lowers_score() {
        let base = "abcdefgh";
        let base_score = check(base).score;
        for extra in ["A", "7", "#", "Q9&"] {
            let extended = format!("{}{}", base, extra);
            assert!(
                check(&extended).score >= base_score,
                "Score dropped after adding {:?}",
                extra
            );
        }
    }
}
