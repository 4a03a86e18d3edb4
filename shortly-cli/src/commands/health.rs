use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use crate::{api::ShortlyApi, commands::config::load_config, credentials::FileCredentials};

#[derive(Args, Debug)]
pub struct HealthArgs {
    #[arg(long, short)]
    pub config: Option<PathBuf>,
}

pub async fn run(args: HealthArgs) -> Result<()> {
    let config = load_config(args.config)?;
    let credentials = FileCredentials::load_default();
    let api = ShortlyApi::new(config, credentials)?;

    let report = api.health().await.context("backend health check failed")?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
