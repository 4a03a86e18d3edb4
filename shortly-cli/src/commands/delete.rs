use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::{api::ShortlyApi, commands::config::load_config, credentials::FileCredentials};

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Short code of the URL to delete
    pub short_code: String,

    #[arg(long, short)]
    pub config: Option<PathBuf>,
}

pub async fn run(args: DeleteArgs) -> Result<()> {
    let config = load_config(args.config)?;
    let credentials = FileCredentials::load_default();
    let api = ShortlyApi::new(config, credentials)?;

    api.delete(&args.short_code).await?;
    println!("Deleted {}", args.short_code);
    Ok(())
}
