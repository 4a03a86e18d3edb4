use gloo_storage::{LocalStorage, Storage};
use shortly_shared::{credentials::CredentialStore, models::AuthTokens};

/// Fixed local-storage slots for the JWT pair, shared with every tab.
pub(crate) const ACCESS_KEY: &str = "jwt_access";
pub(crate) const REFRESH_KEY: &str = "jwt_refresh";

/// Browser local-storage implementation of the credential capability.
///
/// Tokens survive reloads; `tokens` treats a half-missing pair as no
/// session at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageCredentials;

impl CredentialStore for LocalStorageCredentials {
    fn tokens(&self) -> Option<AuthTokens> {
        let access = LocalStorage::get::<String>(ACCESS_KEY).ok()?;
        let refresh = LocalStorage::get::<String>(REFRESH_KEY).ok()?;
        Some(AuthTokens { access, refresh })
    }

    fn store(&self, tokens: &AuthTokens) {
        if let Err(err) = LocalStorage::set(ACCESS_KEY, tokens.access.clone()) {
            log::warn!("failed to store access token: {err}");
        }
        if let Err(err) = LocalStorage::set(REFRESH_KEY, tokens.refresh.clone()) {
            log::warn!("failed to store refresh token: {err}");
        }
    }

    fn clear(&self) {
        LocalStorage::delete(ACCESS_KEY);
        LocalStorage::delete(REFRESH_KEY);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn tokens() -> AuthTokens {
        AuthTokens {
            access: "access-token".to_string(),
            refresh: "refresh-token".to_string(),
        }
    }

    #[wasm_bindgen_test]
    fn test_round_trip() {
        let store = LocalStorageCredentials;
        store.clear();
        assert!(store.tokens().is_none());

        store.store(&tokens());
        assert_eq!(store.tokens(), Some(tokens()));

        store.clear();
        assert!(store.tokens().is_none());
    }

    #[wasm_bindgen_test]
    fn test_half_missing_pair_reads_as_no_session() {
        let store = LocalStorageCredentials;
        store.clear();
        LocalStorage::set(ACCESS_KEY, "only-access".to_string()).unwrap();
        assert!(store.tokens().is_none());
        store.clear();
    }
}
