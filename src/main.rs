//! rjmtv - Generate a cleaned Australia Live IPTV playlist from an Xtream provider

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod playlist;
mod utils;
mod xtream;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before parsing so env-backed args pick up IPTV_USER/IPTV_PASS
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        "rjmtv=debug,reqwest=debug"
    } else {
        "rjmtv=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    match cli.command {
        Commands::Generate {
            host,
            username,
            password,
            strict,
            output,
        } => {
            cli::commands::generate(host, username, password, strict, output).await?;
        }
        Commands::Completion { shell } => {
            cli::commands::completion(shell);
        }
    }

    Ok(())
}
