//! Wuurdle
//!
//! A terminal Wordle clone. The secret word comes from a remote random-word
//! service and every guess is checked against a remote dictionary.
//!
//! # Quick Start
//!
//! ```rust
//! use wuurdle::core::{Feedback, Word};
//!
//! let secret = Word::new("crane").unwrap();
//! let guess = Word::new("arose").unwrap();
//!
//! let feedback = Feedback::evaluate(&secret, &guess);
//! assert_eq!(feedback.to_emoji(), "🟨🟩⬛⬛🟩");
//! ```

// Core domain types
pub mod core;

// Keystroke-driven game state
pub mod session;

// Remote word services
pub mod api;

// Secret word selection
pub mod word_source;

// Settings file
pub mod config;

// Log file setup
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
