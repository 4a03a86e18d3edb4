use std::cell::RefCell;

use crate::models::AuthTokens;

/// Storage capability for the JWT pair.
///
/// The session manager only ever talks to this trait, so the concrete store
/// (browser local storage, a file on disk, process memory) can be swapped
/// without touching call sites. Implementations log and swallow their own
/// storage failures; session semantics never depend on them.
pub trait CredentialStore {
    /// The stored pair, or `None` when either half is missing.
    fn tokens(&self) -> Option<AuthTokens>;

    fn store(&self, tokens: &AuthTokens);

    /// Remove both tokens unconditionally.
    fn clear(&self);

    /// Convenience accessor for the bearer credential.
    fn access_token(&self) -> Option<String> {
        self.tokens().map(|tokens| tokens.access)
    }
}

/// Process-local store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryCredentials {
    tokens: RefCell<Option<AuthTokens>>,
}

impl MemoryCredentials {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CredentialStore for MemoryCredentials {
    fn tokens(&self) -> Option<AuthTokens> {
        self.tokens.borrow().clone()
    }

    fn store(&self, tokens: &AuthTokens) {
        *self.tokens.borrow_mut() = Some(tokens.clone());
    }

    fn clear(&self) {
        *self.tokens.borrow_mut() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens() -> AuthTokens {
        AuthTokens {
            access: "access-token".to_string(),
            refresh: "refresh-token".to_string(),
        }
    }

    #[test]
    fn test_round_trip() {
        let store = MemoryCredentials::new();
        assert!(store.tokens().is_none());
        assert!(store.access_token().is_none());

        store.store(&tokens());
        assert_eq!(store.tokens(), Some(tokens()));
        assert_eq!(store.access_token().as_deref(), Some("access-token"));
    }

    #[test]
    fn test_clear_removes_both_tokens() {
        let store = MemoryCredentials::new();
        store.store(&tokens());
        store.clear();
        assert!(store.tokens().is_none());
    }

    #[test]
    fn test_clear_is_idempotent() {
        let store = MemoryCredentials::new();
        store.clear();
        assert!(store.tokens().is_none());
    }
}
