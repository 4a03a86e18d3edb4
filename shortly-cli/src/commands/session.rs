use std::{
    io::{self, Write},
    path::PathBuf,
};

use anyhow::{Result, bail};
use clap::Args;
use rpassword::prompt_password;
use shortly_shared::models::User;

use crate::{
    api::{SessionProbe, ShortlyApi},
    commands::config::load_config,
    credentials::FileCredentials,
};

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Username to sign in with; prompted for when omitted
    #[arg(long, short)]
    pub username: Option<String>,

    #[arg(long, short)]
    pub config: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct MeArgs {
    #[arg(long, short)]
    pub config: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct LogoutArgs {
    #[arg(long, short)]
    pub config: Option<PathBuf>,
}

pub async fn login(args: LoginArgs) -> Result<()> {
    let config = load_config(args.config)?;
    let credentials = FileCredentials::load_default();
    let api = ShortlyApi::new(config, credentials)?;

    let username = match args.username {
        Some(username) => username,
        None => prompt("Username: ")?,
    };
    let password = prompt_password("Password: ")?;
    if password.trim().is_empty() {
        bail!("password must not be empty");
    }

    let user = api.login(&username, &password).await?;
    print_user(&user);
    println!("tokens stored at {}", api.credentials().path().display());
    Ok(())
}

pub async fn me(args: MeArgs) -> Result<()> {
    let config = load_config(args.config)?;
    let credentials = FileCredentials::load_default();
    let api = ShortlyApi::new(config, credentials)?;

    match api.probe_session().await {
        SessionProbe::Missing => {
            println!("No active session. Run `shortly session login` to sign in.");
        }
        SessionProbe::Valid(user) => print_user(&user),
        SessionProbe::Rejected => {
            // Expired sessions are steady state, not an error.
            println!("Session expired; stored tokens cleared.");
        }
        SessionProbe::Unreachable(message) => {
            eprintln!("warning: could not verify session ({message}); keeping stored tokens");
        }
    }
    Ok(())
}

pub fn logout(_args: LogoutArgs) -> Result<()> {
    // Clears local state only; the backend is never called.
    let credentials = FileCredentials::load_default();
    if credentials.remove()? {
        println!("Signed out.");
    } else {
        println!("No stored session.");
    }
    Ok(())
}

fn prompt(message: &str) -> Result<String> {
    print!("{message}");
    io::stdout().flush().ok();
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    let trimmed = input.trim().to_string();
    if trimmed.is_empty() {
        bail!("input must not be empty");
    }
    Ok(trimmed)
}

fn print_user(user: &User) {
    println!("Signed in as {}", user.username);
    if user.is_superuser {
        println!("role: superuser");
    } else if user.is_staff {
        println!("role: staff");
    }
}
