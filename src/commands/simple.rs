//! Simple interactive CLI mode
//!
//! Line-based game without the TUI. Each line is typed into the session
//! controller letter by letter and followed by Enter.

use crate::api::WordApi;
use crate::core::{MAX_GUESSES, WORD_LENGTH};
use crate::output::{print_board, print_loss, print_win};
use crate::session::{KeyEffect, KeyInput, SessionState, SubmitOutcome};
use crate::word_source::{RetryPolicy, fetch_secret_word};
use anyhow::{Context, Result};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, BufRead, Write};
use std::time::Duration;

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if the secret word cannot be fetched or on an I/O error
/// reading user input.
pub async fn run_simple<A: WordApi + ?Sized>(api: &A, policy: RetryPolicy) -> Result<()> {
    println!("\n╔══════════════════════════════════════╗");
    println!("║       W U U R D L E  (simple)        ║");
    println!("╚══════════════════════════════════════╝\n");

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner:.cyan} {msg}")?);
    spinner.set_message("Fetching a secret word...");
    spinner.enable_steady_tick(Duration::from_millis(100));
    let secret = fetch_secret_word(api, policy).await;
    spinner.finish_and_clear();
    let secret = secret.context("failed to fetch a secret word")?;

    println!("Guess the five-letter word in {MAX_GUESSES} tries. Type 'quit' to exit.\n");

    let mut state = SessionState::new(secret);
    let stdin = io::stdin();
    let mut lines = stdin.lock();

    while !state.is_finished() {
        let prompt = format!("Guess {}/{MAX_GUESSES}", state.row() + 1);
        let Some(input) = get_user_input(&mut lines, &prompt)? else {
            println!();
            return Ok(());
        };

        if matches!(input.to_lowercase().as_str(), "quit" | "exit") {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        }

        if input.chars().count() != WORD_LENGTH || !input.chars().all(|c| c.is_ascii_alphabetic())
        {
            println!("{}", "❌ Enter exactly five letters".red());
            continue;
        }

        let (next, outcome) = play_line(api, state, &input).await;
        state = next;

        match outcome {
            Some(SubmitOutcome::NotRecognized(word)) => {
                println!(
                    "{}",
                    format!("That word does not exist or at least I do not know it: {word}")
                        .yellow()
                );
            }
            Some(SubmitOutcome::Continue(_)) => print_board(state.grid()),
            Some(SubmitOutcome::Won(_)) => {
                print_board(state.grid());
                print_win(state.grid(), state.row() + 1);
            }
            Some(SubmitOutcome::Lost { secret, .. }) => {
                print_board(state.grid());
                print_loss(state.grid(), &secret);
            }
            Some(SubmitOutcome::Ignored) | None => {}
        }
    }

    Ok(())
}

/// Type `line` into the session and resolve the resulting submission
///
/// A row that was not scored is cleared again so the next line starts on
/// an empty row.
async fn play_line<A: WordApi + ?Sized>(
    api: &A,
    mut state: SessionState,
    line: &str,
) -> (SessionState, Option<SubmitOutcome>) {
    let mut outcome = None;

    for key in KeyInput::typed_line(line) {
        let (next, effect) = state.apply_key(key);
        state = next;

        if let KeyEffect::Submit(guess) = effect {
            match api.exists(guess.text()).await {
                Ok(exists) => {
                    tracing::info!(guess = %guess, exists, "guess checked");
                    let (next, result) = state.resolve_submission(exists);
                    state = next;
                    outcome = Some(result);
                }
                Err(e) => {
                    tracing::error!(guess = %guess, error = %e, "dictionary check failed");
                    state = state.abort_submission();
                }
            }
        }
    }

    if !state.is_finished() && !state.grid().is_row_classified(state.row()) {
        while state.column() > 0 {
            state = state.apply_key(KeyInput::Backspace).0;
        }
    }

    (state, outcome)
}

/// Get user input with a prompt; `None` on end of input
fn get_user_input(lines: &mut impl BufRead, prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if lines.read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}
