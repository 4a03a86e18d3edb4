use serde::{Deserialize, Serialize};

use super::User;

/// Credentials submitted to the token endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// The JWT pair issued on login.
///
/// Persisted by a [`CredentialStore`](crate::credentials::CredentialStore)
/// and cleared on logout or when the backend rejects the access token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthTokens {
    pub access: String,
    pub refresh: String,
}

/// Lifecycle of the signed-in user as seen by the presentation layer.
///
/// Starts `Unknown` until the startup current-user probe resolves; the UI
/// must not treat the user as signed out before then. The machine cycles
/// between `Anonymous` and `Authenticated` for the life of the process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionState {
    /// The startup probe has not resolved yet.
    #[default]
    Unknown,
    Anonymous,
    Authenticated(User),
}

impl SessionState {
    /// The signed-in user, if any.
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    /// Whether the startup probe has produced a verdict.
    pub fn is_resolved(&self) -> bool {
        !matches!(self, Self::Unknown)
    }

    /// The state after a current-user probe.
    pub fn resolved(user: Option<User>) -> Self {
        match user {
            Some(user) => Self::Authenticated(user),
            None => Self::Anonymous,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User {
            id: 1,
            username: "ada".to_string(),
            is_staff: false,
            is_superuser: false,
        }
    }

    #[test]
    fn test_initial_state_is_unknown() {
        let state = SessionState::default();
        assert!(!state.is_resolved());
        assert!(!state.is_authenticated());
        assert!(state.user().is_none());
    }

    #[test]
    fn test_resolved_transitions() {
        assert_eq!(SessionState::resolved(None), SessionState::Anonymous);
        assert_eq!(
            SessionState::resolved(Some(user())),
            SessionState::Authenticated(user())
        );
    }

    #[test]
    fn test_authenticated_exposes_user() {
        let state = SessionState::Authenticated(user());
        assert!(state.is_resolved());
        assert_eq!(state.user().map(|u| u.username.as_str()), Some("ada"));
    }

    #[test]
    fn test_tokens_round_trip() {
        let tokens = AuthTokens {
            access: "a.b.c".to_string(),
            refresh: "d.e.f".to_string(),
        };
        let json = serde_json::to_string(&tokens).unwrap();
        let back: AuthTokens = serde_json::from_str(&json).unwrap();
        assert_eq!(tokens, back);
    }
}
