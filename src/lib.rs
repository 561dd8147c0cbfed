//! # brain-quest
//!
//! A terminal quiz that resolves its questions once at startup, falling back
//! to a built-in set when the source is unreachable or malformed.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use brain_quest::{Config, Quiz, QuizError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), QuizError> {
//!     // Fetch questions from the default endpoint and run the quiz
//!     Quiz::new(Config::default()).run().await
//! }
//! ```

mod app;
pub mod config;
mod data;
pub mod logging;
mod models;
mod progression;
pub mod terminal;
mod ui;

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use thiserror::Error;
use tokio::sync::oneshot::{self, error::TryRecvError};
use tracing_subscriber::util::TryInitError;

pub use app::App;
pub use config::{Config, LogConfig, QuestionSource};
pub use data::{
    fallback_questions, parse_questions, questions_from_value, Origin, QuestionSet, ResolveError,
    Resolver,
};
pub use models::{Phase, Question, QuestionId, QuizState};
pub use progression::{Outcome, Progression};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Error type for running the quiz.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizError {
    /// Terminal IO failed during the quiz.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("failed to open log file {}: {source}", path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to install log subscriber: {0}")]
    Logging(#[from] TryInitError),
}

/// A quiz run in the terminal.
pub struct Quiz {
    config: Config,
}

impl Quiz {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Run the quiz in the terminal.
    ///
    /// Takes over the terminal, shows a loading screen while the question set
    /// is resolved, then hands control to the user until they quit.
    pub async fn run(self) -> Result<(), QuizError> {
        let mut term = terminal::init()?;
        let result = run_app(&mut term, &self.config).await;
        terminal::restore(&mut term)?;
        result
    }
}

async fn run_app(terminal: &mut terminal::AppTerminal, config: &Config) -> Result<(), QuizError> {
    let resolver = Resolver::from_config(config);
    let (tx, mut rx) = oneshot::channel();
    tokio::spawn(async move {
        let _ = tx.send(resolver.resolve().await);
    });

    let Some(questions) = wait_for_questions(terminal, &mut rx).await? else {
        return Ok(());
    };

    let mut app = App::new(questions);
    run_event_loop(terminal, &mut app)
}

/// Show the loading screen until the resolver reports. `None` means the user quit.
async fn wait_for_questions(
    terminal: &mut terminal::AppTerminal,
    rx: &mut oneshot::Receiver<QuestionSet>,
) -> Result<Option<QuestionSet>, QuizError> {
    let mut tick = 0usize;

    loop {
        if let Some(questions) = poll_resolution(rx) {
            return Ok(Some(questions));
        }

        terminal.draw(|frame| ui::render_loading(frame, tick))?;
        tick = tick.wrapping_add(1);

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && handle_loading_input(key.code) {
                    return Ok(None);
                }
            }
        }

        // Let the resolver make progress on a single-threaded runtime.
        tokio::task::yield_now().await;
    }
}

/// Check for a resolved question set without blocking.
///
/// A resolver that went away without reporting yields the built-in set.
fn poll_resolution(rx: &mut oneshot::Receiver<QuestionSet>) -> Option<QuestionSet> {
    match rx.try_recv() {
        Ok(questions) => Some(questions),
        Err(TryRecvError::Closed) => {
            tracing::warn!("question resolver ended without a result, using built-in questions");
            Some(QuestionSet::fallback("question resolver ended early"))
        }
        Err(TryRecvError::Empty) => None,
    }
}

/// Returns true if the app should exit while questions are loading.
fn handle_loading_input(key: KeyCode) -> bool {
    matches!(key, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
}

fn run_event_loop(terminal: &mut terminal::AppTerminal, app: &mut App) -> Result<(), QuizError> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if handle_input(app, key.code) {
                break;
            }
        }
    }

    Ok(())
}

/// Returns true if the app should exit.
fn handle_input(app: &mut App, key: KeyCode) -> bool {
    match app.phase() {
        Phase::Welcome => handle_welcome_input(app, key),
        Phase::InProgress => handle_quiz_input(app, key),
        Phase::Complete => handle_result_input(app, key),
    }
}

fn handle_welcome_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Enter => {
            app.start();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

fn handle_quiz_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Up | KeyCode::Char('k') => {
            app.highlight_previous();
            false
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.highlight_next();
            false
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.select_highlighted();
            false
        }
        KeyCode::Char('n') | KeyCode::Tab => {
            app.advance();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

fn handle_result_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Down | KeyCode::Char('j') => {
            app.scroll_results_down();
            false
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.scroll_results_up();
            false
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.restart();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(app: &mut App, keys: &[KeyCode]) -> bool {
        keys.iter().any(|key| handle_input(app, *key))
    }

    #[test]
    fn test_keyboard_walkthrough() {
        let mut app = App::new(QuestionSet::fallback("test"));
        assert!(!press(&mut app, &[KeyCode::Enter]));
        assert_eq!(app.phase(), Phase::InProgress);

        // "n" does nothing until an answer is chosen
        press(&mut app, &[KeyCode::Char('n')]);
        assert_eq!(app.state().current_question, 0);

        for _ in 0..app.total_questions() {
            press(&mut app, &[KeyCode::Char(' '), KeyCode::Char('n')]);
        }
        assert_eq!(app.phase(), Phase::Complete);
        assert_eq!(app.state().score, 1);

        press(&mut app, &[KeyCode::Char('r')]);
        assert_eq!(app.phase(), Phase::Welcome);
        assert_eq!(app.state(), &QuizState::new());
    }

    #[test]
    fn test_navigation_picks_highlighted_option() {
        let mut app = App::new(QuestionSet::fallback("test"));
        press(
            &mut app,
            &[KeyCode::Enter, KeyCode::Down, KeyCode::Down, KeyCode::Up, KeyCode::Enter],
        );
        assert_eq!(app.progression().current_answer(), Some("Saturn"));
    }

    #[test]
    fn test_resolution_pending_then_ready() {
        let (tx, mut rx) = oneshot::channel();
        assert!(poll_resolution(&mut rx).is_none());

        let set = QuestionSet::new(fallback_questions()[..2].to_vec(), Origin::File("q.json".into()))
            .unwrap();
        tx.send(set.clone()).unwrap();
        assert_eq!(poll_resolution(&mut rx), Some(set));
    }

    #[test]
    fn test_dropped_resolver_uses_built_in_questions() {
        let (tx, mut rx) = oneshot::channel::<QuestionSet>();
        drop(tx);

        let questions = poll_resolution(&mut rx).unwrap();
        assert!(questions.is_fallback());
        assert_eq!(questions.as_slice(), fallback_questions().as_slice());
    }

    #[test]
    fn test_quit_while_loading() {
        assert!(handle_loading_input(KeyCode::Esc));
        assert!(handle_loading_input(KeyCode::Char('q')));
        assert!(!handle_loading_input(KeyCode::Enter));
        assert!(!handle_loading_input(KeyCode::Char('j')));
    }

    #[test]
    fn test_quit_from_every_phase() {
        let mut app = App::new(QuestionSet::fallback("test"));
        assert!(handle_input(&mut app, KeyCode::Char('q')));
        app.start();
        assert!(handle_input(&mut app, KeyCode::Char('Q')));
        for _ in 0..app.total_questions() {
            app.select_highlighted();
            app.advance();
        }
        assert!(handle_input(&mut app, KeyCode::Char('q')));
    }
}
