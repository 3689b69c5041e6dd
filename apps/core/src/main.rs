// Amina terminal chat - line-based front end over the response engine.

use std::io::Write;
use std::time::Duration;

use anyhow::Context;
use rand::Rng;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

use amina_core::{Catalog, ChatResponder, ChatSession};

/// Pause before the typing indicator appears.
const THINKING_DELAY_MS: u64 = 500;

/// Base duration of the simulated typing, extended by random jitter.
const TYPING_DELAY_MS: u64 = 1500;
const TYPING_JITTER_MS: u64 = 1000;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let catalog = Catalog::embedded().context("failed to load embedded catalog")?;
    info!(entries = catalog.len(), "catalog ready");

    let mut session = ChatSession::new(ChatResponder::new(catalog));

    println!("Amina - assistante virtuelle VIH Niger (tapez /quit pour sortir)\n");
    print_last_bot_message(&session);
    print_suggestions(&session);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    prompt()?;

    while let Some(line) = lines.next_line().await? {
        let input = line.trim();
        if input == "/quit" || input == "/exit" {
            println!("Au revoir, prenez soin de vous !");
            break;
        }

        if session.send(input).is_some() {
            simulate_typing().await;
            print_last_bot_message(&session);
            print_suggestions(&session);
        }

        prompt()?;
    }

    Ok(())
}

/// "Thinking, then typing" pacing before each answer.
async fn simulate_typing() {
    tokio::time::sleep(Duration::from_millis(THINKING_DELAY_MS)).await;
    println!("Amina est en train d'écrire…");

    let jitter = rand::thread_rng().gen_range(0..TYPING_JITTER_MS);
    tokio::time::sleep(Duration::from_millis(TYPING_DELAY_MS + jitter)).await;
}

fn print_last_bot_message(session: &ChatSession) {
    if let Some(message) = session.messages().last() {
        println!("\nAmina > {}\n", message.content);
    }
}

fn print_suggestions(session: &ChatSession) {
    if session.suggestions().is_empty() {
        return;
    }
    println!("Questions fréquentes :");
    for suggestion in session.suggestions() {
        println!("  - {}", suggestion);
    }
    println!();
}

fn prompt() -> anyhow::Result<()> {
    print!("Vous > ");
    std::io::stdout().flush().context("failed to flush stdout")?;
    Ok(())
}
