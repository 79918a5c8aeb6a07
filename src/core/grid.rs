//! The 6×5 board of letter tiles

use super::feedback::{Classification, Feedback};
use super::word::{WORD_LENGTH, Word};

/// Number of guesses a game allows
pub const MAX_GUESSES: usize = 6;

/// A single tile: an optional letter and its classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    pub letter: Option<u8>,
    pub class: Classification,
}

impl Cell {
    /// Letter shown on the tile, uppercased for display
    #[must_use]
    pub fn display_letter(&self) -> char {
        self.letter
            .map_or(' ', |b| char::from(b).to_ascii_uppercase())
    }
}

/// One guess row
pub type Row = [Cell; WORD_LENGTH];

/// Board state
///
/// Writes return a new `Grid` rather than mutating in place, so a reader
/// holding the previous value never observes a half-updated row.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Grid {
    rows: [Row; MAX_GUESSES],
}

impl Grid {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn rows(&self) -> &[Row; MAX_GUESSES] {
        &self.rows
    }

    /// # Panics
    /// Panics if `row >= 6` or `column >= 5`
    #[must_use]
    pub const fn cell(&self, row: usize, column: usize) -> Cell {
        self.rows[row][column]
    }

    /// Whether the row has already been scored
    #[must_use]
    pub fn is_row_classified(&self, row: usize) -> bool {
        self.rows
            .get(row)
            .is_some_and(|cells| cells.iter().all(|c| c.class.is_set()))
    }

    /// Return a copy with `letter` written at (row, column)
    #[must_use]
    pub fn with_letter(&self, row: usize, column: usize, letter: Option<u8>) -> Self {
        let mut next = self.clone();
        if let Some(cell) = next.rows.get_mut(row).and_then(|r| r.get_mut(column)) {
            cell.letter = letter;
        }
        next
    }

    /// Return a copy with `feedback` stored on `row`
    ///
    /// A row that is already classified is left untouched.
    #[must_use]
    pub fn with_feedback(&self, row: usize, feedback: &Feedback) -> Self {
        let mut next = self.clone();
        if self.is_row_classified(row) {
            return next;
        }
        if let Some(cells) = next.rows.get_mut(row) {
            for (cell, &class) in cells.iter_mut().zip(feedback.tiles()) {
                cell.class = class;
            }
        }
        next
    }

    /// The row's letters as a word, if all five slots are filled
    #[must_use]
    pub fn row_word(&self, row: usize) -> Option<Word> {
        let cells = self.rows.get(row)?;
        let mut letters = [0u8; WORD_LENGTH];
        for (slot, cell) in letters.iter_mut().zip(cells) {
            *slot = cell.letter?;
        }
        Word::from_letters(letters).ok()
    }
}
