use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::ClientError;

/// Body of the shorten call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShortenRequest {
    pub url: String,
}

/// Wire shape of a successful shorten response.
///
/// `short_url` is optional on the wire; `message` carries backend notices
/// such as "URL already exists".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponse {
    pub short_code: String,
    pub original_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Display-ready outcome of the shorten workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortenResult {
    pub short_code: String,
    pub original_url: String,
    pub short_url: String,
}

impl ShortenResponse {
    /// Resolve the display URL, preferring the backend-supplied one.
    pub fn into_result(self, short_url_base: &str) -> ShortenResult {
        let short_url = self
            .short_url
            .unwrap_or_else(|| short_url_for(short_url_base, &self.short_code));
        ShortenResult {
            short_code: self.short_code,
            original_url: self.original_url,
            short_url,
        }
    }
}

/// Client-side construction of a short URL from its code.
pub fn short_url_for(base: &str, short_code: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), short_code)
}

/// Reject anything that does not parse as an absolute URL before it can
/// reach the network.
pub fn validate_url(input: &str) -> Result<Url, ClientError> {
    Ok(Url::parse(input.trim())?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_absolute_urls() {
        let url = validate_url("https://example.com/a/b?c=1").unwrap();
        assert_eq!(url.host_str(), Some("example.com"));

        // Surrounding whitespace is user noise, not part of the URL.
        assert!(validate_url("  https://example.com  ").is_ok());
    }

    #[test]
    fn test_validate_rejects_non_urls() {
        for input in ["", "not a url", "example.com", "/relative/path", "ht tp://x"] {
            let err = validate_url(input).unwrap_err();
            assert!(
                matches!(err, ClientError::InvalidUrl(_)),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_result_prefers_backend_short_url() {
        let response = ShortenResponse {
            short_code: "abc123".to_string(),
            original_url: "https://example.com".to_string(),
            short_url: Some("https://sho.rt/abc123".to_string()),
            message: None,
        };

        let result = response.into_result("http://localhost:8000");
        assert_eq!(result.short_url, "https://sho.rt/abc123");
    }

    #[test]
    fn test_result_falls_back_to_base_and_code() {
        let response = ShortenResponse {
            short_code: "abc123".to_string(),
            original_url: "https://example.com".to_string(),
            short_url: None,
            message: None,
        };

        let result = response.into_result("http://localhost:8000/");
        assert_eq!(result.short_url, "http://localhost:8000/abc123");
        assert_eq!(result.original_url, "https://example.com");
    }

    #[test]
    fn test_wire_shape_is_camel_case() {
        let response: ShortenResponse = serde_json::from_str(
            r#"{"shortCode": "xyz789", "originalUrl": "https://www.google.com", "message": "URL already exists"}"#,
        )
        .unwrap();

        assert_eq!(response.short_code, "xyz789");
        assert_eq!(response.message.as_deref(), Some("URL already exists"));
        assert!(response.short_url.is_none());
    }
}
