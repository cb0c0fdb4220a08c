//! Tarot Table - lay out a spread from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Three-card spread from the bundled deck
//! tarot-table three --deck data/deck.json
//!
//! # Reproducible Celtic Cross with a question
//! tarot-table celtic --deck data/deck.json --seed 7 --question "What next?"
//!
//! # Fan the deck, pick the fifth card, turn it face up
//! tarot-table fan --deck data/deck.json --pick 4 --flip 0
//!
//! # JSON view model instead of text
//! tarot-table one --deck data/deck.json --json
//!
//! # Verbose logging
//! RUST_LOG=debug tarot-table one
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};

use tarot_spread::render;
use tarot_spread::{ClickOutcome, Deck, SpreadKind, SpreadTable, TableConfig};

/// Tarot Table - draw a spread from a deck file
#[derive(Parser, Debug)]
#[command(name = "tarot-table")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Spread to show: one, three, celtic or fan
    spread: SpreadKind,

    /// Deck JSON file (overrides the config)
    #[arg(short = 'd', long, env = "TAROT_DECK", value_name = "PATH")]
    deck: Option<PathBuf>,

    /// Table configuration file (JSON)
    #[arg(short = 'c', long, env = "TAROT_CONFIG", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Seed for a reproducible reading
    #[arg(short = 's', long)]
    seed: Option<u64>,

    /// Question shown above the spread
    #[arg(short = 'q', long, default_value = "")]
    question: String,

    /// Fan position to pick after fanning the deck
    #[arg(long, value_name = "POSITION")]
    pick: Option<usize>,

    /// Slot to flip in the visible spread (repeatable)
    #[arg(long, value_name = "POSITION")]
    flip: Vec<usize>,

    /// Print the JSON view model instead of text
    #[arg(long)]
    json: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'l', long, env = "TAROT_LOG_LEVEL", default_value = "warn")]
    log_level: String,
}

/// Initialize logging with the specified level
fn init_logging(level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(format!("tarot_table={level},tarot_spread={level}"))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(args: &Args) -> Result<TableConfig> {
    let mut config = match &args.config {
        Some(path) => TableConfig::from_json_file(path)
            .with_context(|| format!("Failed to load config: {path:?}"))?,
        None => TableConfig::default(),
    };

    if let Some(deck) = &args.deck {
        config.deck_path = deck.clone();
    }
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    Ok(config)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log_level);

    let config = load_config(&args)?;
    let deck = Deck::load_or_empty(&config.deck_path);

    let mut table = SpreadTable::new(deck, config);
    info!(
        seed = table.engine().rng_state().seed,
        spread = %args.spread,
        "Table ready"
    );

    table.set_question_input(args.question.as_str());
    table.press(args.spread);

    if let Some(position) = args.pick {
        if args.spread != SpreadKind::Fan {
            warn!(position, "--pick only applies to the fan spread");
        } else if table.click(position) == ClickOutcome::Ignored {
            warn!(position, "No fan card at that position");
        }
    }

    for &position in &args.flip {
        if table.click(position) == ClickOutcome::Ignored {
            warn!(position, "No card to flip at that position");
        }
    }

    let output = if args.json {
        render::json::render_table(&table).context("Failed to serialize table")?
    } else {
        render::text::render_table(&table)
    };
    print!("{output}");
    if args.json {
        println!();
    }

    Ok(())
}
