//! Dev-only cascading shorten fallback.
//!
//! Active only when the resolved configuration says mock mode. The ladder
//! exists so frontend work can continue without a live backend; it is not a
//! resilience mechanism and the direct workflow never touches it.

use std::{path::PathBuf, time::Duration};

use async_trait::async_trait;
use rand::Rng;
use shortly_shared::{
    error::ClientError,
    models::{ShortenResult, short_url_for},
};

use crate::api::ShortlyApi;

/// Fixed artificial latency before each stage, emulating the original dev
/// client's simulated backend delay.
pub const STAGE_DELAY: Duration = Duration::from_millis(300);

const CODE_LEN: usize = 6;
const CODE_CHARSET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// One stage of the ladder.
#[async_trait]
pub trait ShortenSource: Sync {
    fn name(&self) -> &'static str;

    async fn shorten(&self, url: &str) -> Result<ShortenResult, ClientError>;
}

/// Stage 1: the mock-aware backend endpoint.
pub struct BackendSource<'a> {
    api: &'a ShortlyApi,
}

impl<'a> BackendSource<'a> {
    pub fn new(api: &'a ShortlyApi) -> Self {
        Self { api }
    }
}

#[async_trait]
impl ShortenSource for BackendSource<'_> {
    fn name(&self) -> &'static str {
        "backend"
    }

    async fn shorten(&self, url: &str) -> Result<ShortenResult, ClientError> {
        let response = self.api.shorten(url).await?;
        Ok(response.into_result(&self.api.config().short_url_base))
    }
}

/// Shape of the static mock data file; extra fields are ignored.
#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct MockPayload {
    short_code: String,
    #[serde(default)]
    short_url: Option<String>,
}

/// Stage 2: a static mock data file on disk.
pub struct MockFileSource {
    path: PathBuf,
    short_url_base: String,
}

impl MockFileSource {
    pub fn new(path: PathBuf, short_url_base: &str) -> Self {
        Self {
            path,
            short_url_base: short_url_base.to_string(),
        }
    }
}

#[async_trait]
impl ShortenSource for MockFileSource {
    fn name(&self) -> &'static str {
        "mock-file"
    }

    async fn shorten(&self, url: &str) -> Result<ShortenResult, ClientError> {
        let contents = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|err| ClientError::Shorten(format!("mock data unreadable: {err}")))?;
        let payload: MockPayload = serde_json::from_str(&contents)
            .map_err(|err| ClientError::Shorten(format!("mock data malformed: {err}")))?;
        if payload.short_code.is_empty() {
            return Err(ClientError::Shorten("mock data has no short code".into()));
        }

        let short_url = payload
            .short_url
            .unwrap_or_else(|| short_url_for(&self.short_url_base, &payload.short_code));
        Ok(ShortenResult {
            short_code: payload.short_code,
            original_url: url.to_string(),
            short_url,
        })
    }
}

/// Stage 3: synthesize a code locally. Never fails.
pub struct GeneratedSource {
    short_url_base: String,
}

impl GeneratedSource {
    pub fn new(short_url_base: &str) -> Self {
        Self {
            short_url_base: short_url_base.to_string(),
        }
    }
}

#[async_trait]
impl ShortenSource for GeneratedSource {
    fn name(&self) -> &'static str {
        "generated"
    }

    async fn shorten(&self, url: &str) -> Result<ShortenResult, ClientError> {
        let short_code = random_code(CODE_LEN);
        let short_url = short_url_for(&self.short_url_base, &short_code);
        Ok(ShortenResult {
            short_code,
            original_url: url.to_string(),
            short_url,
        })
    }
}

/// A random base-36 short code.
pub fn random_code(len: usize) -> String {
    let mut rng = rand::rng();
    (0..len)
        .map(|_| CODE_CHARSET[rng.random_range(0..CODE_CHARSET.len())] as char)
        .collect()
}

/// Try each source in order, pausing `stage_delay` before every attempt.
/// Attempts are capped at the number of sources; the first success wins.
pub async fn cascade(
    sources: &[&dyn ShortenSource],
    url: &str,
    stage_delay: Duration,
) -> Result<ShortenResult, ClientError> {
    for source in sources {
        tokio::time::sleep(stage_delay).await;
        match source.shorten(url).await {
            Ok(result) => {
                tracing::debug!(source = source.name(), code = %result.short_code, "fallback stage succeeded");
                return Ok(result);
            }
            Err(err) => {
                tracing::warn!(source = source.name(), %err, "fallback stage failed");
            }
        }
    }
    Err(ClientError::Shorten(
        "all fallback sources exhausted".to_string(),
    ))
}
