//! Password strength meter library
//!
//! Scores passwords against five character-class checks and generates random
//! passwords from a fixed 70-character alphabet.
//!
//! # Features
//!
//! - `async` (default): Enables channel-based evaluation with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use pwd_meter::{check_password_strength, generate_password, Strength};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("Passw0rd!".to_string().into());
//! let result = check_password_strength(&password);
//!
//! assert_eq!(result.score, 5);
//! assert_eq!(result.label, Strength::Strong);
//! assert!(result.feedback.is_empty());
//!
//! let generated = generate_password(12);
//! # use secrecy::ExposeSecret;
//! # assert_eq!(generated.expose_secret().len(), 12);
//! ```

// Internal modules
mod blacklist;
mod evaluator;
mod generator;
mod history;
mod sections;
mod types;

// Public API
pub use blacklist::{COMMON_PASSWORDS, is_common_password};
pub use evaluator::check_password_strength;
pub use generator::{
    ALPHABET, DEFAULT_LENGTH, GeneratorError, generate_password, generate_password_with,
    try_generate_password,
};
pub use history::PasswordHistory;
pub use types::{MAX_SCORE, ScoreResult, Strength};

#[cfg(feature = "async")]
pub use evaluator::check_password_strength_tx;
