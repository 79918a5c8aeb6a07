//! Session state and its transition functions
//!
//! `SessionState` is a plain value. Every transition consumes the current
//! state and returns the next one together with what the caller has to do
//! about it, so the whole game can be driven and tested without a terminal
//! or a network.

use super::KeyInput;
use crate::core::{Feedback, Grid, MAX_GUESSES, WORD_LENGTH, Word};

/// Where the game currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Keystrokes edit the active row
    Accepting,
    /// A submitted guess is waiting on the dictionary; keystrokes are ignored
    Validating,
    /// Secret guessed; input locked on the winning row
    Won,
    /// All rows used without a win
    Lost,
}

/// What the caller must do after a keystroke
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyEffect {
    /// Nothing changed
    Ignored,
    /// The active row changed
    Updated,
    /// Row complete: check this guess with the dictionary, then call
    /// [`SessionState::resolve_submission`]
    Submit(Word),
}

/// Result of applying a dictionary answer to a pending guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// No guess was pending
    Ignored,
    /// Dictionary does not know the word; the row stays editable
    NotRecognized(Word),
    /// Scored, more rows remain
    Continue(Feedback),
    /// Scored and equal to the secret
    Won(Feedback),
    /// Scored on the last row without a match
    Lost { feedback: Feedback, secret: Word },
}

/// State of one game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    secret: Word,
    grid: Grid,
    row: usize,
    column: usize,
    accepting_input: bool,
    validating: bool,
}

impl SessionState {
    /// Fresh game for `secret`
    #[must_use]
    pub fn new(secret: Word) -> Self {
        Self {
            secret,
            grid: Grid::new(),
            row: 0,
            column: 0,
            accepting_input: true,
            validating: false,
        }
    }

    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Active row; `MAX_GUESSES` once every row is used
    #[must_use]
    pub const fn row(&self) -> usize {
        self.row
    }

    /// Next letter slot in the active row
    #[must_use]
    pub const fn column(&self) -> usize {
        self.column
    }

    /// Input-lock flag; false only after a win
    #[must_use]
    pub const fn accepting_input(&self) -> bool {
        self.accepting_input
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        if !self.accepting_input {
            Phase::Won
        } else if self.row >= MAX_GUESSES {
            Phase::Lost
        } else if self.validating {
            Phase::Validating
        } else {
            Phase::Accepting
        }
    }

    /// Whether the game has ended either way
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        matches!(self.phase(), Phase::Won | Phase::Lost)
    }

    /// Apply one keystroke
    #[must_use]
    pub fn apply_key(self, key: KeyInput) -> (Self, KeyEffect) {
        if self.phase() != Phase::Accepting {
            return (self, KeyEffect::Ignored);
        }

        match key {
            KeyInput::Letter(letter) if self.column < WORD_LENGTH => {
                let grid = self.grid.with_letter(self.row, self.column, Some(letter));
                let column = self.column + 1;
                (
                    Self {
                        grid,
                        column,
                        ..self
                    },
                    KeyEffect::Updated,
                )
            }
            KeyInput::Backspace if self.column > 0 => {
                let column = self.column - 1;
                let grid = self.grid.with_letter(self.row, column, None);
                (
                    Self {
                        grid,
                        column,
                        ..self
                    },
                    KeyEffect::Updated,
                )
            }
            KeyInput::Enter if self.column == WORD_LENGTH => match self.grid.row_word(self.row) {
                Some(guess) => (
                    Self {
                        validating: true,
                        ..self
                    },
                    KeyEffect::Submit(guess),
                ),
                None => (self, KeyEffect::Ignored),
            },
            _ => (self, KeyEffect::Ignored),
        }
    }

    /// Apply the dictionary's verdict on the pending guess
    #[must_use]
    pub fn resolve_submission(self, exists: bool) -> (Self, SubmitOutcome) {
        if self.phase() != Phase::Validating {
            return (self, SubmitOutcome::Ignored);
        }
        let Some(guess) = self.grid.row_word(self.row) else {
            return (self.abort_submission(), SubmitOutcome::Ignored);
        };

        if !exists {
            return (
                Self {
                    validating: false,
                    ..self
                },
                SubmitOutcome::NotRecognized(guess),
            );
        }

        let feedback = Feedback::evaluate(&self.secret, &guess);
        let grid = self.grid.with_feedback(self.row, &feedback);

        if guess == self.secret {
            // Freeze on the winning row
            let next = Self {
                grid,
                accepting_input: false,
                validating: false,
                ..self
            };
            return (next, SubmitOutcome::Won(feedback));
        }

        let completed = self.row;
        let next = Self {
            grid,
            row: completed + 1,
            column: 0,
            validating: false,
            ..self
        };

        if completed == MAX_GUESSES - 1 {
            let secret = next.secret.clone();
            (next, SubmitOutcome::Lost { feedback, secret })
        } else {
            (next, SubmitOutcome::Continue(feedback))
        }
    }

    /// Drop the pending guess without scoring it
    ///
    /// Used when the dictionary could not be reached; the row stays filled.
    #[must_use]
    pub fn abort_submission(self) -> Self {
        Self {
            validating: false,
            ..self
        }
    }
}
