//! CLI entry-point for the interactive chat loop.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use tracing::instrument;

use crate::{chat::Responder, config::Settings};

#[instrument(skip(settings))]
pub async fn run(settings: Settings) -> Result<()> {
    let responder = Responder::new(settings)?;
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("Hello! I'm your health assistant. How can I help you today?");
    print!("> ");
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        let message = line.trim();
        if message.is_empty() {
            print!("> ");
            stdout.flush()?;
            continue;
        }

        let reply = responder.respond(message);
        println!("{}", reply.text);
        for prediction in &reply.predictions {
            println!(
                "  - {} ({:.0}% match; symptoms: {})",
                prediction.disease,
                prediction.probability * 100.0,
                prediction.related_symptoms.join(", ")
            );
        }
        print!("> ");
        stdout.flush()?;
    }
    Ok(())
}
