//! Main entry point for the Shortly command-line client.

use clap::{Parser, Subcommand};
use dotenv::dotenv;

mod api;
mod commands;
mod credentials;
mod fallback;

/// Shortly CLI
#[derive(Parser)]
#[command(name = "shortly")]
#[command(about = "Command-line client for the Shortly URL shortener", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Subcommands for the Shortly CLI
#[derive(Subcommand)]
enum Commands {
    /// Shorten a URL and print the short link
    Shorten(commands::shorten::ShortenArgs),

    /// Show click statistics for shortened URLs
    Stats(commands::stats::StatsArgs),

    /// Delete a shortened URL (requires a signed-in session)
    Delete(commands::delete::DeleteArgs),

    /// Manage the login session
    Session {
        #[command(subcommand)]
        command: SessionCommands,
    },

    /// Check backend health
    Health(commands::health::HealthArgs),

    /// Generate a configuration file with defaults
    Config {
        /// Output format for the configuration file ("toml" or "json")
        format: String,
    },
}

/// Session management subcommands
#[derive(Subcommand)]
enum SessionCommands {
    /// Sign in and store the token pair
    Login(commands::session::LoginArgs),

    /// Show the currently signed-in user
    Me(commands::session::MeArgs),

    /// Clear the stored token pair without calling the backend
    Logout(commands::session::LogoutArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let filter = tracing_subscriber::EnvFilter::try_from_env("SHORTLY_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Shorten(args) => commands::shorten::run(args).await,
        Commands::Stats(args) => commands::stats::run(args).await,
        Commands::Delete(args) => commands::delete::run(args).await,
        Commands::Session { command } => match command {
            SessionCommands::Login(args) => commands::session::login(args).await,
            SessionCommands::Me(args) => commands::session::me(args).await,
            SessionCommands::Logout(args) => commands::session::logout(args),
        },
        Commands::Health(args) => commands::health::run(args).await,
        Commands::Config { format } => commands::config::generate_config(&format),
    }
}
