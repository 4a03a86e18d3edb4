use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use shortly_shared::{config::ShortenMode, models::validate_url};

use crate::{
    api::ShortlyApi,
    commands::config::{load_config, resolve_mode},
    credentials::FileCredentials,
    fallback::{self, BackendSource, GeneratedSource, MockFileSource, ShortenSource},
};

#[derive(Args, Debug)]
pub struct ShortenArgs {
    /// The URL to shorten
    pub url: String,

    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Static mock data file used by the dev fallback ladder
    #[arg(long, default_value = "mock-data.json")]
    pub mock_file: PathBuf,
}

pub async fn run(args: ShortenArgs) -> Result<()> {
    // Syntax check before anything touches the network.
    validate_url(&args.url)?;

    let config = load_config(args.config)?;
    let credentials = FileCredentials::load_default();
    let api = ShortlyApi::new(config.clone(), credentials)?;
    let config = resolve_mode(&api, config).await;

    let (result, note) = match config.mode {
        ShortenMode::Direct => {
            let response = api.shorten(&args.url).await?;
            let note = response.message.clone();
            (response.into_result(&config.short_url_base), note)
        }
        ShortenMode::Mock => {
            eprintln!("warning: mock mode is active; results are for development only");
            let backend = BackendSource::new(&api);
            let mock_file = MockFileSource::new(args.mock_file.clone(), &config.short_url_base);
            let generated = GeneratedSource::new(&config.short_url_base);
            let sources: Vec<&dyn ShortenSource> = vec![&backend, &mock_file, &generated];
            let result = fallback::cascade(&sources, &args.url, fallback::STAGE_DELAY).await?;
            (result, None)
        }
    };

    println!("{}", result.short_url);
    println!("  code:     {}", result.short_code);
    println!("  original: {}", result.original_url);
    if let Some(note) = note {
        println!("  note:     {note}");
    }
    Ok(())
}
