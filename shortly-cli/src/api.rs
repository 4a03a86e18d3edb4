use anyhow::{Context, Result};
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

use crate::credentials::FileCredentials;

/// Outcome of a current-user probe.
///
/// `Rejected` means the backend refused the stored token, which clears it;
/// `Unreachable` keeps the stored pair so a network blip never signs the
/// user out.
#[derive(Debug)]
pub enum SessionProbe {
    /// No stored token; no call was made.
    Missing,
    Valid(User),
    Rejected,
    Unreachable(String),
}

/// HTTP client for the Shortly backend, shared by every subcommand.
#[derive(Debug)]
pub struct ShortlyApi {
    config: ClientConfig,
    client: Client,
    credentials: FileCredentials,
}

impl ShortlyApi {
    pub fn new(config: ClientConfig, credentials: FileCredentials) -> Result<Self> {
        let client = Client::builder()
            .user_agent("shortly-cli")
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self {
            config,
            client,
            credentials,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn credentials(&self) -> &FileCredentials {
        &self.credentials
    }

    fn api_url(&self, path: &str) -> String {
        self.config.api_url(path)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match self.credentials.access_token() {
            Some(token) => request.bearer_auth(token),
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
        self.credentials
            .persist(&tokens)
            .map_err(|err| ClientError::Network(err.to_string()))?;

        // A login that cannot be confirmed stores nothing.
        match self.probe_session().await {
            SessionProbe::Valid(user) => Ok(user),
            SessionProbe::Rejected | SessionProbe::Missing => Err(ClientError::AuthRejected),
            SessionProbe::Unreachable(message) => {
                self.credentials.clear();
                Err(ClientError::Network(message))
            }
        }
    }

    /// Validate the stored token against the current-user endpoint.
    ///
    /// A `401`/`403` clears the stored pair; any other failure leaves it in
    /// place.
    pub async fn probe_session(&self) -> SessionProbe {
        if self.credentials.tokens().is_none() {
            return SessionProbe::Missing;
        }

        let response = match self.authorized(self.client.get(self.api_url("me"))).send().await {
            Ok(response) => response,
            Err(err) => return SessionProbe::Unreachable(err.to_string()),
        };

        match response.status() {
            status if status.is_success() => match response.json::<User>().await {
                Ok(user) => SessionProbe::Valid(user),
                Err(err) => SessionProbe::Unreachable(err.to_string()),
            },
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                self.credentials.clear();
                SessionProbe::Rejected
            }
            status => SessionProbe::Unreachable(format!("current-user check returned {status}")),
        }
    }

    /// Direct-mode shorten: one call, no retry, no fallback.
    pub async fn shorten(&self, raw_url: &str) -> Result<ShortenResponse, ClientError> {
        let url = validate_url(raw_url)?;
        let response = self
            .client
            .post(self.api_url("shorten"))
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
                "the backend rejected the request",
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

    /// Delete a shortened URL. Requires a stored session; refused locally
    /// before any network call when none is present.
    pub async fn delete(&self, short_code: &str) -> Result<(), ClientError> {
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

    pub async fn health(&self) -> Result<serde_json::Value, ClientError> {
        let response = self
            .client
            .get(self.api_url("health"))
            .send()
            .await
            .map_err(net)?;
        if !response.status().is_success() {
            return Err(ClientError::Network(format!(
                "health endpoint returned {}",
                response.status()
            )));
        }
        response.json().await.map_err(net)
    }
}

fn net(err: reqwest::Error) -> ClientError {
    ClientError::Network(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api() -> ShortlyApi {
        let dir = std::env::temp_dir().join("shortly-api-tests");
        ShortlyApi::new(
            ClientConfig::default(),
            FileCredentials::at(dir.join("absent-tokens.json")),
        )
        .unwrap()
    }

    #[test]
    fn test_endpoint_urls() {
        let api = api();
        assert_eq!(api.api_url("token/"), "http://localhost:8000/api/token/");
        assert_eq!(api.api_url("me"), "http://localhost:8000/api/me");
        assert_eq!(
            api.api_url(&format!("urls/{}/", "abc123")),
            "http://localhost:8000/api/urls/abc123/"
        );
    }

    #[tokio::test]
    async fn test_delete_without_session_never_reaches_the_network() {
        let api = api();
        let err = api.delete("abc123").await.unwrap_err();
        assert!(matches!(err, ClientError::AuthRequired));
    }

    #[tokio::test]
    async fn test_probe_without_tokens_is_missing() {
        let api = api();
        assert!(matches!(api.probe_session().await, SessionProbe::Missing));
    }

    #[tokio::test]
    async fn test_shorten_rejects_bad_input_before_any_call() {
        let api = api();
        let err = api.shorten("not a url").await.unwrap_err();
        assert!(matches!(err, ClientError::InvalidUrl(_)));
    }
}
