//! Core domain types for the game
//!
//! Pure values with no I/O: words, guess feedback and the tile grid.

mod feedback;
mod grid;
mod word;

pub use feedback::{Classification, Feedback};
pub use grid::{Cell, Grid, MAX_GUESSES, Row};
pub use word::{WORD_LENGTH, Word, WordError};
