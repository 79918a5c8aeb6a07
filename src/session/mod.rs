//! Input/session controller
//!
//! Turns keystrokes and dictionary answers into game state transitions.

mod key;
mod state;

pub use key::KeyInput;
pub use state::{KeyEffect, Phase, SessionState, SubmitOutcome};
