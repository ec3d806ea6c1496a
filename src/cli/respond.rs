//! CLI entry-point for answering a single message.

use anyhow::Result;
use clap::Args as ClapArgs;
use tracing::instrument;

use crate::{chat::Responder, config::Settings};

/// Answer one message and exit.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// The message to classify and answer.
    #[arg(long)]
    pub message: String,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let responder = Responder::new(settings)?;
    let reply = responder.respond(&args.message);
    println!("{}", serde_json::to_string_pretty(&reply)?);
    Ok(())
}
