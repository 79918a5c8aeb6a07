//! Formatting utilities for terminal output

use crate::core::{Cell, Classification, Row};
use colored::{ColoredString, Colorize};

/// Format a row's classifications as emoji squares
#[must_use]
pub fn row_to_emoji(row: &Row) -> String {
    row.iter().map(|cell| cell.class.emoji()).collect()
}

/// Render one tile as ` X ` on its classification background
#[must_use]
pub fn tile(cell: &Cell) -> ColoredString {
    let text = format!(" {} ", cell.display_letter());
    match cell.class {
        Classification::Exact => text.black().on_green().bold(),
        Classification::Present => text.black().on_yellow().bold(),
        Classification::Absent => text.white().on_bright_black().bold(),
        Classification::Unset => text.bold().reversed(),
    }
}

/// Render a row of tiles separated by single spaces
#[must_use]
pub fn row_tiles(row: &Row) -> String {
    row.iter()
        .map(|cell| tile(cell).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
