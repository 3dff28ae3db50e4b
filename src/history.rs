//! Caller-owned list of generated passwords.

use secrecy::SecretString;

use crate::generator::generate_password;

/// Generated passwords in the order they were produced.
///
/// The history lives wherever the caller keeps it (typically a UI session)
/// and is dropped with it; nothing is shared across sessions.
#[derive(Debug, Default)]
pub struct PasswordHistory {
    entries: Vec<SecretString>,
}

impl PasswordHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, password: SecretString) {
        self.entries.push(password);
    }

    /// Generates a password of `length` characters and records it.
    ///
    /// Returns the index of the newly recorded entry.
    pub fn generate(&mut self, length: usize) -> usize {
        let index = self.entries.len();
        self.entries.push(generate_password(length));

        #[cfg(feature = "tracing")]
        tracing::debug!("Password history now holds {} entries", self.entries.len());

        index
    }

    pub fn get(&self, index: usize) -> Option<&SecretString> {
        self.entries.get(index)
    }

    pub fn latest(&self) -> Option<&SecretString> {
        self.entries.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SecretString> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
