//! YellowBridge CLI - look up Chinese characters and words.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use yellowbridge::config::Config;
use yellowbridge::console::Console;
use yellowbridge::logging::init_logging;
use yellowbridge::YellowBridge;

/// Look up Chinese characters and words on YellowBridge.
#[derive(Parser, Debug)]
#[command(name = "yellowbridge")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Use this config file instead of the default location.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print the record as JSON.
    #[arg(long, global = true)]
    json: bool,

    /// Enable request-level debug logging.
    #[arg(long, global = true)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Everything about a single character.
    Character { character: String },
    /// Stroke info, examples and meaning of a word.
    Word { word: String },
    /// Stroke count, radical and structure.
    Stroke { word: String },
    /// Etymology of a single character.
    Etymology { character: String },
    /// Readings, ranks and encodings of a single character.
    Details { character: String },
    /// Example sentences.
    Examples { word: String },
    /// Meaning and related words.
    Meaning { word: String },
    /// Acquire a session and print the request headers.
    Headers,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let console = Console::new();

    let config = match &args.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;

    init_logging(args.debug || config.logging.debug)?;

    let client = YellowBridge::from_config(&config).context("Invalid configuration")?;

    let result = run(&client, &args.command, &console, args.json).await;
    if let Err(e) = &result {
        console.error(&format!("{:#}", e));
    }
    result
}

async fn run(
    client: &YellowBridge,
    command: &Command,
    console: &Console,
    json: bool,
) -> Result<()> {
    match command {
        Command::Character { character } => {
            announce(console, json, "character", character);
            let record = client.character_aggregate(character, None).await?;
            show(console, json, character, &record)
        }
        Command::Word { word } => {
            announce(console, json, "word", word);
            let record = client.word_aggregate(word, None).await?;
            show(console, json, word, &record)
        }
        Command::Stroke { word } => {
            announce(console, json, "stroke info for", word);
            let record = client.stroke_info(word, None).await?;
            show(console, json, word, &record)
        }
        Command::Etymology { character } => {
            announce(console, json, "etymology of", character);
            let record = client.etymology(character, None).await?;
            show(console, json, character, &record)
        }
        Command::Details { character } => {
            announce(console, json, "details of", character);
            let record = client.character_details(character, None).await?;
            show(console, json, character, &record)
        }
        Command::Examples { word } => {
            announce(console, json, "examples for", word);
            let record = client.word_examples(word, None).await?;
            show(console, json, word, &record)
        }
        Command::Meaning { word } => {
            announce(console, json, "meaning of", word);
            let record = client.word_meaning(word, None).await?;
            show(console, json, word, &record)
        }
        Command::Headers => {
            let headers = client.headers().await?;
            if json {
                let value = serde_json::json!({
                    "referer": headers.referer(),
                    "cookie": headers.cookie(),
                });
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                console.success("Session acquired");
                console.info(&format!("Referer: {}", headers.referer()));
                console.info(&format!("Cookie: {}", headers.cookie()));
            }
            Ok(())
        }
    }
}

fn announce(console: &Console, json: bool, what: &str, term: &str) {
    if !json {
        console.step(&format!("Looking up {} {}...", what, term));
    }
}

fn show<T: Serialize>(console: &Console, json: bool, term: &str, record: &T) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(record)?);
        return Ok(());
    }

    console.section(term);
    console.record(&serde_json::to_value(record)?);
    Ok(())
}
