//! Tests for the API client functionality
//!
//! Validates endpoint construction, wire shapes, and the pure pieces of the
//! session and shorten workflows that do not need a browser.

#[cfg(test)]
mod tests {
    use crate::api::ShortlyClient;
    use crate::credentials::{ACCESS_KEY, REFRESH_KEY};
    use shortly_shared::config::ClientConfig;
    use shortly_shared::models::{LoginRequest, ShortenResponse, backend_message, validate_url};

    /// Tests API client creation
    #[test]
    fn test_api_client_creation() {
        let _client = ShortlyClient::new(ClientConfig::default());
        // Client should be created successfully
    }

    /// Tests the endpoint URLs the client issues
    #[test]
    fn test_api_endpoints() {
        let config = ClientConfig::new("http://localhost:8000/api", "http://localhost:8000");

        assert_eq!(config.api_url("token/"), "http://localhost:8000/api/token/");
        assert_eq!(config.api_url("me"), "http://localhost:8000/api/me");
        assert_eq!(config.api_url("shorten"), "http://localhost:8000/api/shorten");
        assert_eq!(config.api_url("stats"), "http://localhost:8000/api/stats");
        assert_eq!(config.api_url("config/"), "http://localhost:8000/api/config/");

        // Delete keeps the trailing slash the backend routes with.
        let delete_url = config.api_url(&format!("urls/{}/", "abc123"));
        assert_eq!(delete_url, "http://localhost:8000/api/urls/abc123/");
    }

    /// Tests the fixed local-storage keys for the token pair
    #[test]
    fn test_token_storage_keys() {
        assert_eq!(ACCESS_KEY, "jwt_access");
        assert_eq!(REFRESH_KEY, "jwt_refresh");
    }

    /// Tests login request serialization
    #[test]
    fn test_login_request_shape() {
        let request = LoginRequest {
            username: "ada".to_string(),
            password: "hunter2".to_string(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["username"], "ada");
        assert_eq!(json["password"], "hunter2");
    }

    /// Tests that invalid input is refused before a request could be built
    #[test]
    fn test_validation_blocks_bad_urls() {
        assert!(validate_url("https://example.com/a/b?c=1").is_ok());
        assert!(validate_url("definitely not a url").is_err());
    }

    /// Tests short URL resolution for responses with and without one
    #[test]
    fn test_short_url_resolution() {
        let response = ShortenResponse {
            short_code: "abc123".to_string(),
            original_url: "https://example.com".to_string(),
            short_url: None,
            message: None,
        };
        let result = response.into_result("http://localhost:8000");
        assert_eq!(result.short_url, "http://localhost:8000/abc123");

        let response = ShortenResponse {
            short_code: "abc123".to_string(),
            original_url: "https://example.com".to_string(),
            short_url: Some("https://sho.rt/abc123".to_string()),
            message: None,
        };
        let result = response.into_result("http://localhost:8000");
        assert_eq!(result.short_url, "https://sho.rt/abc123");
    }

    /// Tests backend error message extraction
    #[test]
    fn test_error_response_handling() {
        assert_eq!(
            backend_message(r#"{"detail": "Not found."}"#, "fallback"),
            "Not found."
        );
        assert_eq!(
            backend_message(r#"{"error": "Invalid URL format"}"#, "fallback"),
            "Invalid URL format"
        );
        assert_eq!(backend_message("<html></html>", "fallback"), "fallback");
    }
}
