//! Web client configuration.
//!
//! Base URLs are baked in at build time; the backend's mock flag is probed
//! at startup and applied to the app state, never read from globals.

use shortly_shared::config::{ClientConfig, DEFAULT_API_URL, DEFAULT_SHORT_URL_BASE};

/// The configuration the web client starts from.
pub fn base_config() -> ClientConfig {
    ClientConfig::new(
        option_env!("SHORTLY_API_URL").unwrap_or(DEFAULT_API_URL),
        option_env!("SHORTLY_SHORT_URL_BASE").unwrap_or(DEFAULT_SHORT_URL_BASE),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use shortly_shared::config::ShortenMode;

    #[test]
    fn test_base_config_points_at_a_backend() {
        let config = base_config();
        assert!(config.api_base_url.starts_with("http"));
        assert!(!config.short_url_base.ends_with('/'));
    }

    #[test]
    fn test_base_config_starts_in_direct_mode() {
        assert_eq!(base_config().mode, ShortenMode::Direct);
    }
}
