//! CLI for the FAL fetch-and-log client.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use fal_core::config;

use commands::{run_config, run_fetch};

/// Top-level CLI for the FAL fetch-and-log client.
#[derive(Debug, Parser)]
#[command(name = "fal")]
#[command(about = "FAL: fetch a REST endpoint once and log the outcome", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Fetch the configured endpoint once and print the outcome line.
    Fetch {
        /// Override the configured endpoint URL for this run.
        #[arg(long)]
        url: Option<String>,
    },

    /// Show the resolved config path and endpoint.
    Config,
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Fetch { url } => run_fetch(&cfg, url.as_deref()).await?,
            CliCommand::Config => run_config(&cfg)?,
        }

        Ok(())
    }
}
