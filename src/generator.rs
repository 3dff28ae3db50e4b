//! Random password generation.

use rand::Rng;
use rand::rngs::OsRng;
use secrecy::SecretString;
use thiserror::Error;

/// Characters generated passwords are drawn from: letters, digits and the
/// symbols accepted by the special-character check.
pub const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                              abcdefghijklmnopqrstuvwxyz\
                              0123456789\
                              !@#$%^&*";

pub const DEFAULT_LENGTH: usize = 12;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Invalid password length: {0}")]
    InvalidLength(i64),
}

/// Generates a password of `length` characters from [`ALPHABET`] using `rng`.
///
/// Each character is sampled independently and uniformly, with replacement.
/// No character class is guaranteed to appear.
pub fn generate_password_with<R: Rng + ?Sized>(rng: &mut R, length: usize) -> SecretString {
    let password: String = (0..length)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect();

    SecretString::new(password.into())
}

/// Generates a password using the operating system's secure random source.
pub fn generate_password(length: usize) -> SecretString {
    #[cfg(feature = "tracing")]
    tracing::debug!("Generating password of length {}", length);

    generate_password_with(&mut OsRng, length)
}

/// Like [`generate_password`], for lengths coming from signed input.
///
/// # Errors
///
/// Returns `GeneratorError::InvalidLength` if `length` is negative.
pub fn try_generate_password(length: i64) -> Result<SecretString, GeneratorError> {
    let length = usize::try_from(length).map_err(|_| {
        #[cfg(feature = "tracing")]
        tracing::warn!("Rejected negative password length {}", length);
        GeneratorError::InvalidLength(length)
    })?;
    Ok(generate_password(length))
}
