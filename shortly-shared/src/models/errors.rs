use serde::Deserialize;

/// Error payload used by the backend: `detail` from the auth endpoints,
/// `error` from the URL views.
#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct ApiErrorBody {
    pub detail: Option<String>,
    pub error: Option<String>,
}

/// Extract the backend's own message from an error body, verbatim when
/// present, else the caller's fallback.
pub fn backend_message(body: &str, fallback: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.detail.or(parsed.error))
        .unwrap_or_else(|| fallback.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_field_wins() {
        let message = backend_message(
            r#"{"detail": "Authentication credentials were not provided."}"#,
            "fallback",
        );
        assert_eq!(message, "Authentication credentials were not provided.");
    }

    #[test]
    fn test_error_field_is_used() {
        let message = backend_message(r#"{"error": "Short URL not found"}"#, "fallback");
        assert_eq!(message, "Short URL not found");
    }

    #[test]
    fn test_detail_preferred_over_error() {
        let message = backend_message(r#"{"detail": "d", "error": "e"}"#, "fallback");
        assert_eq!(message, "d");
    }

    #[test]
    fn test_fallback_on_unparseable_body() {
        assert_eq!(backend_message("<html>502</html>", "fallback"), "fallback");
        assert_eq!(backend_message("", "fallback"), "fallback");
        assert_eq!(backend_message(r#"{"other": 1}"#, "fallback"), "fallback");
    }
}
