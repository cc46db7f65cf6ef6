//! CLI command handlers

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use colored::Colorize;

use super::Credentials;
use crate::playlist::{self, SaveOutcome};
use crate::xtream::XtreamClient;

/// Handle the `generate` command
pub async fn generate(
    host: String,
    username: Option<String>,
    password: Option<String>,
    strict: bool,
    output: PathBuf,
) -> Result<()> {
    let creds = Credentials::resolve(username, password, strict)?;
    let client = XtreamClient::new(&host, &creds.username, &creds.password)?;

    println!("Downloading playlist from {}", host.cyan());

    let content = match client.fetch_playlist().await {
        Ok(content) => content,
        Err(e) => {
            println!("{} {}", "Error downloading playlist:".red(), e);
            return Ok(());
        }
    };

    let channels = playlist::australia_live_channels(&content);

    match playlist::save(&output, &channels)? {
        SaveOutcome::Saved(count) => {
            println!(
                "{} {}: {} Australia LIVE channels",
                "Saved".green().bold(),
                output.display(),
                count
            );
        }
        SaveOutcome::NoChannels => {
            println!("{}", "No Australia LIVE channels found".yellow());
        }
    }

    Ok(())
}

/// Handle the `completion` command
pub fn completion(shell: clap_complete::Shell) {
    let mut cmd = super::Cli::command();
    clap_complete::generate(shell, &mut cmd, "rjmtv", &mut io::stdout());
}

// Extension trait for Cli to get clap Command
impl super::Cli {
    fn command() -> clap::Command {
        <Self as clap::CommandFactory>::command()
    }
}
