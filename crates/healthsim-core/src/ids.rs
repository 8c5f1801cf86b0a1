//! Unique token providers for generated identifiers.
//!
//! Identifier tokens are deliberately drawn outside the seeded stream: two
//! replays of the same seed produce the same records but never collide on
//! `id`. Tests that need stable identifiers swap in a
//! [`SequentialIdProvider`].

use uuid::Uuid;

/// Source of unique identifier tokens.
pub trait IdProvider: Send {
    /// Returns a token that has not been returned before by this provider.
    fn next_token(&mut self) -> String;
}

/// Random UUID v4 tokens in upper-case simple form (no hyphens).
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdProvider;

impl IdProvider for UuidIdProvider {
    fn next_token(&mut self) -> String {
        Uuid::new_v4().simple().to_string().to_uppercase()
    }
}

/// Deterministic zero-padded counter tokens: `00000001`, `00000002`, ...
///
/// # Example
///
/// ```
/// use healthsim_core::{IdProvider, SequentialIdProvider};
///
/// let mut ids = SequentialIdProvider::default();
/// assert_eq!(ids.next_token(), "00000001");
/// assert_eq!(ids.next_token(), "00000002");
/// ```
#[derive(Debug, Clone, Default)]
pub struct SequentialIdProvider {
    issued: u64,
}

impl SequentialIdProvider {
    /// Creates a provider whose next token follows `issued`.
    #[must_use]
    pub const fn starting_after(issued: u64) -> Self {
        Self { issued }
    }
}

impl IdProvider for SequentialIdProvider {
    fn next_token(&mut self) -> String {
        self.issued += 1;
        format!("{:08}", self.issued)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn uuid_tokens_are_unique_and_hyphen_free() {
        let mut ids = UuidIdProvider;
        let tokens: HashSet<String> = (0..100).map(|_| ids.next_token()).collect();
        assert_eq!(tokens.len(), 100);
        assert!(tokens.iter().all(|t| t.len() == 32 && !t.contains('-')));
    }

    #[test]
    fn sequential_tokens_continue_from_offset() {
        let mut ids = SequentialIdProvider::starting_after(41);
        assert_eq!(ids.next_token(), "00000042");
    }
}
