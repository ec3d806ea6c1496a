//! Command-line interface wiring for symptom-scout.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::Settings;

pub mod chat;
pub mod respond;
pub mod serve;

/// Top-level CLI definition.
#[derive(Debug, Parser)]
#[command(author, version, about = "Rule-based symptom triage responder", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Parse CLI arguments from the environment.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Dispatch the selected sub-command.
    pub async fn dispatch(self, settings: Settings) -> Result<()> {
        match self.command {
            Commands::Respond(args) => respond::run(args, settings).await,
            Commands::Chat => chat::run(settings).await,
            Commands::Serve(args) => serve::run(args, settings).await,
        }
    }
}

/// Supported sub-commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Answer a single message and print the reply as JSON.
    Respond(respond::Args),
    /// Interactive read-eval-print chat loop on stdin.
    Chat,
    /// Serve the JSON API.
    Serve(serve::Args),
}
