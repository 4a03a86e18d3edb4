use once_cell::unsync::OnceCell;
use reqwest::{Client, RequestBuilder, StatusCode};
use shortly_shared::{
    config::{BackendConfig, ClientConfig},
    credentials::CredentialStore,
    error::ClientError,
    models::{
        AuthTokens, LoginRequest, ShortenRequest, ShortenResponse, StatRow, User, backend_message,
        normalize_stats, validate_url,
    },
};
use wasm_bindgen::JsCast;
use web_sys::{HtmlDocument, Window};

use crate::{config, credentials::LocalStorageCredentials};

const CSRF_COOKIE_NAME: &str = "csrftoken";
const CSRF_HEADER: &str = "X-CSRFToken";

thread_local! {
    static SHARED_CLIENT: OnceCell<ShortlyClient> = OnceCell::new();
}

/// Lightweight API client for Shortly web interactions.
///
/// Owns the resolved configuration and the credential store; components
/// reach it through [`ShortlyClient::shared`].
#[derive(Clone, Debug)]
pub struct ShortlyClient {
    config: ClientConfig,
    client: Client,
    credentials: LocalStorageCredentials,
}

impl ShortlyClient {
    /// Create a new API client with the provided configuration.
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            client: Client::new(),
            credentials: LocalStorageCredentials,
        }
    }

    pub fn shared() -> Self {
        SHARED_CLIENT.with(|cell| cell.get_or_init(|| Self::new(config::base_config())).clone())
    }

    fn api_url(&self, path: &str) -> String {
        self.config.api_url(path)
    }

    /// Base used for client-side `<base>/<code>` short URLs.
    pub fn short_url_base(&self) -> &str {
        &self.config.short_url_base
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match self.credentials.access_token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Echo the CSRF cookie as a header, for the cookie-protected backend
    /// variant. A no-op when the cookie is absent.
    fn with_csrf(&self, request: RequestBuilder) -> RequestBuilder {
        match read_cookie(CSRF_COOKIE_NAME) {
            Some(token) => request.header(CSRF_HEADER, token),
            None => request,
        }
    }

    /// Fetch the mode flag the backend advertises.
    pub async fn backend_config(&self) -> Result<BackendConfig, ClientError> {
        let response = self
            .client
            .get(self.api_url("config/"))
            .send()
            .await
            .map_err(net)?;
        if !response.status().is_success() {
            return Err(ClientError::Network(format!(
                "config endpoint returned {}",
                response.status()
            )));
        }
        response.json().await.map_err(net)
    }

    /// Exchange credentials for a token pair, store it, and fetch the user.
    pub async fn login(&self, username: &str, password: &str) -> Result<User, ClientError> {
        let response = self
            .client
            .post(self.api_url("token/"))
            .json(&LoginRequest {
                username: username.to_string(),
                password: password.to_string(),
            })
            .send()
            .await
            .map_err(net)?;

        if !response.status().is_success() {
            return Err(ClientError::AuthRejected);
        }

        let tokens: AuthTokens = response.json().await.map_err(net)?;
        self.credentials.store(&tokens);

        match self.current_user().await {
            Some(user) => Ok(user),
            None => {
                self.credentials.clear();
                Err(ClientError::AuthRejected)
            }
        }
    }

    /// Validate the stored token against the current-user endpoint.
    ///
    /// No stored token means no call at all. A `401`/`403` clears the pair
    /// silently; any other failure resolves to `None` while keeping the
    /// tokens, so a network blip never signs the user out.
    pub async fn current_user(&self) -> Option<User> {
        self.credentials.tokens()?;

        let response = match self
            .authorized(self.client.get(self.api_url("me")))
            .send()
            .await
        {
            Ok(response) => response,
            Err(err) => {
                log::warn!("current-user check failed: {err}");
                return None;
            }
        };

        match response.status() {
            status if status.is_success() => response.json::<User>().await.ok(),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                self.credentials.clear();
                None
            }
            status => {
                log::warn!("current-user check returned {status}");
                None
            }
        }
    }

    /// Drop the stored pair. Local state only; the backend is never called.
    pub fn logout(&self) {
        self.credentials.clear();
    }

    /// Direct-mode shorten: one call, no retry, no fallback.
    pub async fn shorten(&self, raw_url: &str) -> Result<ShortenResponse, ClientError> {
        let url = validate_url(raw_url)?;
        let response = self
            .with_csrf(self.client.post(self.api_url("shorten")))
            .json(&ShortenRequest {
                url: url.to_string(),
            })
            .send()
            .await
            .map_err(net)?;

        if !response.status().is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Shorten(backend_message(
                &body,
                "Failed to shorten URL",
            )));
        }
        response.json().await.map_err(net)
    }

    pub async fn stats(&self) -> Result<Vec<StatRow>, ClientError> {
        let response = self
            .client
            .get(self.api_url("stats"))
            .send()
            .await
            .map_err(net)?;
        if !response.status().is_success() {
            return Err(ClientError::Stats(format!(
                "stats endpoint returned {}",
                response.status()
            )));
        }
        let payload: serde_json::Value = response.json().await.map_err(net)?;
        Ok(normalize_stats(payload))
    }

    /// Delete a shortened URL. Refused locally when no session is stored;
    /// a `401`/`403` clears the stored pair before surfacing.
    pub async fn delete_url(&self, short_code: &str) -> Result<(), ClientError> {
        if self.credentials.tokens().is_none() {
            return Err(ClientError::AuthRequired);
        }

        let response = self
            .authorized(
                self.client
                    .delete(self.api_url(&format!("urls/{short_code}/"))),
            )
            .send()
            .await
            .map_err(net)?;

        match response.status() {
            status if status.is_success() => Ok(()),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                self.credentials.clear();
                Err(ClientError::AuthRequired)
            }
            _ => {
                let body = response.text().await.unwrap_or_default();
                Err(ClientError::Delete(backend_message(
                    &body,
                    "Failed to delete URL.",
                )))
            }
        }
    }
}

fn net(err: reqwest::Error) -> ClientError {
    ClientError::Network(err.to_string())
}

fn read_cookie(name: &str) -> Option<String> {
    let window: Window = web_sys::window()?;
    let document = window.document()?;
    let html_doc: HtmlDocument = document.dyn_into().ok()?;
    let cookie_string = html_doc.cookie().ok()?;

    for pair in cookie_string.split(';') {
        let mut parts = pair.trim().splitn(2, '=');
        match (parts.next(), parts.next()) {
            (Some(key), Some(value)) if key.trim() == name => {
                return Some(value.trim().to_string());
            }
            _ => {}
        }
    }
    None
}
