//! TUI application state and event loop

use crate::api::{ApiError, WordApi};
use crate::core::Word;
use crate::session::{KeyEffect, KeyInput, SessionState, SubmitOutcome};
use crate::word_source::{RetryPolicy, fetch_secret_word};
use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Application state
#[derive(Default)]
pub struct App {
    /// `None` until the secret word has been fetched
    pub session: Option<SessionState>,
    /// Blocking notice; while set, keys only dismiss it
    pub notice: Option<Notice>,
    pub should_quit: bool,
    /// Animation frame for the loading screen
    pub frame: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Success,
    Error,
}

impl App {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.session.is_none()
    }

    /// Begin the game once the secret word is known
    pub fn start(&mut self, secret: Word) {
        self.session = Some(SessionState::new(secret));
    }

    pub fn tick(&mut self) {
        self.frame = self.frame.wrapping_add(1);
    }

    /// Handle a terminal key event
    ///
    /// Returns the guess to check with the dictionary when the key submitted
    /// a full row.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Word> {
        // Held keys do not type
        if key.kind != KeyEventKind::Press {
            return None;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return None;
        }

        if self.notice.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                self.notice = None;
            }
            return None;
        }

        if key.code == KeyCode::Esc {
            self.should_quit = true;
            return None;
        }

        let state = self.session.take()?;
        let (next, effect) = state.apply_key(key_input(&key));
        self.session = Some(next);

        match effect {
            KeyEffect::Submit(guess) => {
                tracing::debug!(guess = %guess, "checking guess");
                Some(guess)
            }
            KeyEffect::Updated | KeyEffect::Ignored => None,
        }
    }

    /// Apply the dictionary's answer for the pending guess
    pub fn apply_check(&mut self, result: Result<bool, ApiError>) {
        let Some(state) = self.session.take() else {
            return;
        };

        let next = match result {
            Ok(exists) => {
                let (next, outcome) = state.resolve_submission(exists);
                self.notify(&outcome);
                next
            }
            Err(e) => {
                tracing::error!(error = %e, "dictionary check failed");
                state.abort_submission()
            }
        };

        self.session = Some(next);
    }

    fn notify(&mut self, outcome: &SubmitOutcome) {
        tracing::info!(?outcome, "guess resolved");

        self.notice = match outcome {
            SubmitOutcome::NotRecognized(_) => Some(Notice {
                text: "That word does not exist or at least I do not know it".to_string(),
                style: MessageStyle::Error,
            }),
            SubmitOutcome::Won(_) => Some(Notice {
                text: "You win".to_string(),
                style: MessageStyle::Success,
            }),
            SubmitOutcome::Lost { secret, .. } => Some(Notice {
                text: format!("You lost, word was: {}", secret.text().to_uppercase()),
                style: MessageStyle::Error,
            }),
            SubmitOutcome::Continue(_) | SubmitOutcome::Ignored => None,
        };
    }
}

/// Decode a terminal key into a session keystroke
#[must_use]
pub fn key_input(key: &KeyEvent) -> KeyInput {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return KeyInput::Other;
    }

    match key.code {
        KeyCode::Char(c) => KeyInput::from_char(c),
        KeyCode::Backspace => KeyInput::Backspace,
        KeyCode::Enter => KeyInput::Enter,
        _ => KeyInput::Other,
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails, if the secret word
/// cannot be fetched, or on an I/O error while reading events.
pub async fn run_tui<A>(api: Arc<A>, policy: RetryPolicy) -> Result<()>
where
    A: WordApi + 'static,
{
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, App::new(), api, policy).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

async fn run_app<B, A>(
    terminal: &mut Terminal<B>,
    mut app: App,
    api: Arc<A>,
    policy: RetryPolicy,
) -> Result<()>
where
    B: ratatui::backend::Backend,
    A: WordApi + 'static,
{
    let mut events = EventStream::new();
    let (check_tx, mut check_rx) = mpsc::unbounded_channel::<Result<bool, ApiError>>();
    let mut ticker = tokio::time::interval(Duration::from_millis(120));

    let secret_api = Arc::clone(&api);
    let mut secret_task =
        tokio::spawn(async move { fetch_secret_word(&*secret_api, policy).await });

    while !app.should_quit {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        tokio::select! {
            joined = &mut secret_task, if app.is_loading() => {
                let secret = joined
                    .context("secret word task failed")?
                    .context("failed to fetch a secret word")?;
                app.start(secret);
            }
            Some(result) = check_rx.recv() => app.apply_check(result),
            event = events.next() => match event {
                Some(Ok(Event::Key(key))) => {
                    if let Some(guess) = app.handle_key(key) {
                        let api = Arc::clone(&api);
                        let tx = check_tx.clone();
                        tokio::spawn(async move {
                            let result = api.exists(guess.text()).await;
                            // Receiver is gone only when the app is exiting
                            let _ = tx.send(result);
                        });
                    }
                }
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e).context("failed to read terminal events"),
                None => break,
            },
            _ = ticker.tick(), if app.is_loading() => app.tick(),
        }
    }

    secret_task.abort();
    Ok(())
}
