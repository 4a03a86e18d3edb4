use std::{env, fs, path::PathBuf};

use anyhow::{Context, Result, bail};
use shortly_shared::config::{ClientConfig, ShortenMode};

use crate::api::ShortlyApi;

/// Resolve the client configuration: defaults, then an optional file, then
/// environment variables. The backend's own mode flag is applied later by
/// [`resolve_mode`].
pub fn load_config(config_path: Option<PathBuf>) -> Result<ClientConfig> {
    let mut config = ClientConfig::default();

    if let Some(path) = config_path {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("failed to read configuration {}", path.display()))?;
        config = match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => toml::from_str(&content)?,
            Some("json") => serde_json::from_str(&content)?,
            _ => bail!("Unsupported configuration format. Use 'toml' or 'json'."),
        };
    }

    if let Ok(api_url) = env::var("SHORTLY_API_URL") {
        config.api_base_url = api_url.trim_end_matches('/').to_string();
    }
    if let Ok(base) = env::var("SHORTLY_SHORT_URL_BASE") {
        config.short_url_base = base.trim_end_matches('/').to_string();
    }
    if let Ok(mode) = env::var("SHORTLY_MODE") {
        config.mode = match mode.as_str() {
            "direct" => ShortenMode::Direct,
            "mock" => ShortenMode::Mock,
            other => bail!("invalid SHORTLY_MODE {other:?}: use 'direct' or 'mock'"),
        };
    }

    Ok(config)
}

/// Ask the backend which mode it is serving; on any failure keep the locally
/// configured mode.
pub async fn resolve_mode(api: &ShortlyApi, config: ClientConfig) -> ClientConfig {
    match api.backend_config().await {
        Ok(backend) => config.with_backend(backend),
        Err(err) => {
            tracing::debug!(%err, "config endpoint unreachable, keeping configured mode");
            config
        }
    }
}

/// Generates a configuration file in the specified format.
///
/// # Errors
/// Returns an error if the format is unsupported or if writing the file
/// fails.
pub fn generate_config(format: &str) -> Result<()> {
    let config = ClientConfig::default();
    let (file_name, serialized) = match format {
        "toml" => ("config.toml", toml::to_string_pretty(&config)?),
        "json" => ("config.json", serde_json::to_string_pretty(&config)?),
        _ => bail!("Unsupported format. Use 'toml' or 'json'."),
    };

    fs::write(file_name, serialized)
        .with_context(|| format!("failed to write {file_name}"))?;

    println!("Configuration file '{file_name}' generated successfully.");
    Ok(())
}
