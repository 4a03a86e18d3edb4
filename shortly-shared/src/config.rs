use serde::{Deserialize, Serialize};

/// Fallback backend API base when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";

/// Fallback base for constructing short URLs client-side.
pub const DEFAULT_SHORT_URL_BASE: &str = "http://localhost:8000";

/// What the backend config endpoint advertises.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BackendConfig {
    #[serde(default)]
    pub use_mock: bool,
}

/// Deployment policy for the shorten workflow.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ShortenMode {
    /// One call to the shorten endpoint; failures surface to the caller.
    #[default]
    Direct,
    /// Dev-only cascading fallback for working without a live backend.
    /// Not a resilience mechanism; must never be active in production.
    Mock,
}

/// Resolved client configuration.
///
/// Constructed once at startup and passed to every workflow; nothing reads
/// configuration from ambient global state after that.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the backend API, without a trailing slash.
    pub api_base_url: String,

    /// Base used to build `<base>/<code>` short URLs client-side.
    pub short_url_base: String,

    #[serde(default)]
    pub mode: ShortenMode,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL, DEFAULT_SHORT_URL_BASE)
    }
}

impl ClientConfig {
    pub fn new(api_base_url: &str, short_url_base: &str) -> Self {
        Self {
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            short_url_base: short_url_base.trim_end_matches('/').to_string(),
            mode: ShortenMode::Direct,
        }
    }

    /// Apply the mode flag advertised by the backend config endpoint.
    #[must_use]
    pub fn with_backend(mut self, backend: BackendConfig) -> Self {
        self.mode = if backend.use_mock {
            ShortenMode::Mock
        } else {
            ShortenMode::Direct
        };
        self
    }

    /// Join an endpoint path onto the API base.
    pub fn api_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
