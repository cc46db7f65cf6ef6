//! CLI module for rjmtv

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod commands;
pub mod credentials;

pub use credentials::Credentials;

/// Default Xtream provider host
pub const DEFAULT_HOST: &str = "https://webhop.live";

/// Default output path for the generated playlist
pub const DEFAULT_OUTPUT: &str = "Queen/Australia_Live.m3u";

#[derive(Parser, Debug)]
#[command(name = "rjmtv", about = "Generate a cleaned Australia Live IPTV playlist")]
#[command(version, author)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Download, filter and save the Australia Live playlist
    Generate {
        /// Xtream provider base URL
        #[arg(long, default_value = DEFAULT_HOST)]
        host: String,

        /// Provider username
        #[arg(short, long, env = "IPTV_USER")]
        username: Option<String>,

        /// Provider password
        #[arg(short, long, env = "IPTV_PASS")]
        password: Option<String>,

        /// Require credentials instead of falling back to the shared account
        /// (intended for scheduled runs)
        #[arg(long)]
        strict: bool,

        /// Output file path
        #[arg(short, long, default_value = DEFAULT_OUTPUT)]
        output: PathBuf,
    },

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        shell: clap_complete::Shell,
    },
}
