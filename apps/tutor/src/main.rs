use std::{
    io::{self, Write},
    sync::Arc,
};

use anyhow::Result;
use clap::Parser;
use client_core::{render, AskOutcome, ClientEvent, TutorClient};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::warn;

mod config;
mod view;

#[derive(Parser, Debug)]
struct Args {
    /// Backend origin; overrides tutor.toml and the environment.
    #[arg(long)]
    backend_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();
    let args = Args::parse();

    let settings = config::load_settings(args.backend_url);
    let backend_url = config::prepare_backend_url(&settings.backend_url)?;

    let client = TutorClient::new(backend_url.clone());
    if let Err(err) = client.check_health().await {
        warn!(error = %err, backend_url = %backend_url, "backend health probe failed; continuing");
    }

    // Feedback acknowledgements arrive whenever the detached task completes.
    let mut events = client.subscribe_events();
    tokio::spawn(async move {
        while let Ok(event) = events.recv().await {
            if let ClientEvent::FeedbackAcknowledged { .. } = event {
                println!("Thanks for your feedback!");
            }
        }
    });

    println!("Math Tutor ({backend_url})");
    println!("Ask me a math question (Ctrl-D to quit).");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        prompt("> ")?;
        let Some(line) = lines.next_line().await? else {
            break;
        };
        client.set_question(line).await;
        if !client.snapshot().await.can_submit() {
            // Blank input never dispatches.
            continue;
        }

        println!("Thinking…");
        match client.submit().await {
            AskOutcome::Answered => {
                let snapshot = client.snapshot().await;
                if let Some(response) = snapshot.response.as_ref() {
                    view::print_answer(&render(response));
                    prompt_feedback(&client, &mut lines).await?;
                }
            }
            AskOutcome::Failed(message) => view::print_error(&message),
            AskOutcome::Cancelled => break,
        }
    }

    client.cancel_token().cancel();
    Ok(())
}

async fn prompt_feedback(
    client: &Arc<TutorClient>,
    lines: &mut Lines<BufReader<Stdin>>,
) -> Result<()> {
    if !client.snapshot().await.can_send_feedback() {
        return Ok(());
    }

    prompt("Was this helpful? [y/n, Enter to skip] ")?;
    let Some(line) = lines.next_line().await? else {
        return Ok(());
    };
    let correct = match line.trim() {
        "y" | "Y" => true,
        "n" | "N" => false,
        _ => return Ok(()),
    };

    if let Err(err) = client.submit_feedback(correct).await {
        warn!(error = %err, "feedback could not be dispatched");
    }
    Ok(())
}

fn prompt(text: &str) -> Result<()> {
    print!("{text}");
    io::stdout().flush()?;
    Ok(())
}
