//! Display functions for the line-oriented front end

use super::formatters::{row_tiles, row_to_emoji};
use crate::core::{Feedback, Grid, Word};
use colored::Colorize;

/// Print the board rows that hold any letters
pub fn print_board(grid: &Grid) {
    println!();
    for row in grid
        .rows()
        .iter()
        .filter(|row| row.iter().any(|cell| cell.letter.is_some()))
    {
        println!("  {}", row_tiles(row));
    }
    println!();
}

/// Print the result of an offline `check`
pub fn print_check_result(secret: &Word, guess: &Word, feedback: &Feedback) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Secret: {}   Guess: {}",
        secret.text().to_uppercase().bright_yellow().bold(),
        guess.text().to_uppercase().bright_white().bold()
    );
    println!("{}", "─".repeat(40).cyan());

    let grid = guess
        .chars()
        .iter()
        .enumerate()
        .fold(Grid::new(), |g, (col, &b)| g.with_letter(0, col, Some(b)))
        .with_feedback(0, feedback);

    println!("\n  {}", row_tiles(&grid.rows()[0]));
    println!("  {}\n", row_to_emoji(&grid.rows()[0]));

    if feedback.is_solved() {
        println!("{}", "✅ Exact match!".green().bold());
    }
}

/// Print the closing banner for a won game
pub fn print_win(grid: &Grid, guesses: usize) {
    println!("\n{}", "═".repeat(40).bright_cyan());
    println!("{}", "    🎉  Y O U   W I N !  🎉    ".bright_green().bold());
    println!("{}", "═".repeat(40).bright_cyan());
    println!(
        "\n  Solved in {} {}\n",
        guesses.to_string().bright_cyan().bold(),
        if guesses == 1 { "guess" } else { "guesses" }
    );
    print_share(grid);
}

/// Print the closing banner for a lost game
pub fn print_loss(grid: &Grid, secret: &Word) {
    println!("\n{}", "═".repeat(40).bright_cyan());
    println!(
        "  {} {}",
        "You lost, the word was".red().bold(),
        secret.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(40).bright_cyan());
    print_share(grid);
}

fn print_share(grid: &Grid) {
    for row in grid
        .rows()
        .iter()
        .filter(|row| row.iter().all(|cell| cell.class.is_set()))
    {
        println!("  {}", row_to_emoji(row));
    }
    println!();
}
