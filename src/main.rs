//! Wuurdle - CLI
//!
//! Wordle clone with TUI and line-based modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use wuurdle::{
    commands::{check_guess, run_simple},
    config::Config,
    interactive::run_tui,
    logging,
    output::print_check_result,
};

#[derive(Parser)]
#[command(
    name = "wuurdle",
    about = "Guess the five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file (default: <config dir>/wuurdle/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log filter, e.g. "debug" or "wuurdle=trace" (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-based mode (no TUI)
    Simple,

    /// Score a guess against a secret offline
    Check {
        /// The secret word
        secret: String,

        /// The guess to score
        guess: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref())?;
    let log_path = logging::init(&config.log, cli.log_level.as_deref())?;
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        log = %log_path.display(),
        word_url = %config.api.word_url,
        dictionary_url = %config.api.dictionary_url,
        "wuurdle starting"
    );

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let api = Arc::new(config.api.client().context("failed to build HTTP client")?);
            run_tui(api, config.word_source.retry_policy()).await
        }
        Commands::Simple => {
            let api = config.api.client().context("failed to build HTTP client")?;
            run_simple(&api, config.word_source.retry_policy()).await
        }
        Commands::Check { secret, guess } => {
            let result = check_guess(&secret, &guess)?;
            print_check_result(&result.secret, &result.guess, &result.feedback);
            Ok(())
        }
    }
}
