//! Full-screen terminal front end

mod app;
mod rendering;

pub use app::{App, MessageStyle, Notice, key_input, run_tui};
pub use rendering::ui;
