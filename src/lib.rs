//! # quiz-review
//!
//! A self-paced multiple-choice quiz for the terminal that brings missed
//! questions back in periodic review rounds.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use quiz_review::{Quiz, QuizError, SessionConfig};
//!
//! fn main() -> Result<(), QuizError> {
//!     // Load questions from a JSON file
//!     let quiz = Quiz::from_json("questions.json", SessionConfig::default())?;
//!
//!     // Run the quiz in the terminal
//!     quiz.run()?;
//!
//!     Ok(())
//! }
//! ```
//!
//! The session core in [`session`] has no terminal dependency and can be
//! driven directly:
//!
//! ```rust
//! use quiz_review::session::{Mode, QuestionBank, QuizSession, SessionConfig};
//! use quiz_review::load_questions_from_str;
//!
//! let questions = load_questions_from_str(
//!     r#"[{"question": "2 + 2?", "options": [{"label": "A", "text": "4"}, {"label": "B", "text": "5"}], "answer": "A"}]"#,
//! ).unwrap();
//! let mut session = QuizSession::new(QuestionBank::new(questions), SessionConfig::default());
//!
//! let ticket = session.select(0, "A").unwrap();
//! session.fire(ticket);
//! assert_eq!(session.scores().correct, 1);
//! assert_eq!(session.mode(), Mode::Normal);
//! ```

mod app;
mod data;
mod feedback;
pub mod logging;
mod models;
pub mod session;
pub mod terminal;
mod ui;

use std::io;
use std::path::Path;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use thiserror::Error;

pub use app::App;
pub use data::{
    load_questions_from_json, load_questions_from_str, LoadError, DEFAULT_QUESTIONS_PATH,
};
pub use feedback::TerminalBell;
pub use models::{AppState, Question, QuestionId, QuestionOption};
pub use session::SessionConfig;

/// How long the event loop waits for input before checking timers.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Error type for quiz operations.
#[derive(Debug, Error)]
pub enum QuizError {
    /// Error loading questions from file.
    #[error("Failed to load questions: {0}")]
    Load(#[from] LoadError),
    /// IO error during quiz execution.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// The log subscriber could not be installed.
    #[error("Failed to initialise logging: {0}")]
    Logging(String),
}

/// A quiz instance that can be run in the terminal.
pub struct Quiz {
    app: App,
}

impl Quiz {
    /// Create a new quiz from a vector of questions.
    pub fn new(questions: Vec<Question>, config: SessionConfig) -> Self {
        Self {
            app: App::with_questions(questions, config),
        }
    }

    /// Load a quiz from a JSON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the JSON file containing questions.
    /// * `config` - Review interval and auto-advance delay.
    pub fn from_json<P: AsRef<Path>>(path: P, config: SessionConfig) -> Result<Self, QuizError> {
        let questions = load_questions_from_json(path)?;
        Ok(Self::new(questions, config))
    }

    /// Ring the terminal bell on wrong answers.
    pub fn with_bell(mut self) -> Self {
        self.app.session_mut().subscribe(TerminalBell);
        self
    }

    /// Run the quiz in the terminal.
    ///
    /// This will take over the terminal, display the quiz UI, and return
    /// when the user quits.
    pub fn run(mut self) -> Result<(), QuizError> {
        let mut term = terminal::init()?;
        let result = run_event_loop(&mut term, &mut self.app);
        terminal::restore()?;
        result
    }

    /// Get a reference to the underlying app for custom handling.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a mutable reference to the underlying app for custom handling.
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

fn run_event_loop(terminal: &mut terminal::AppTerminal, app: &mut App) -> Result<(), QuizError> {
    loop {
        app.tick(Instant::now());
        terminal.draw(|frame| ui::render(frame, app))?;

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }

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
    match app.state {
        AppState::Welcome => handle_welcome_input(app, key),
        AppState::Quiz if app.jump_input().is_some() => {
            handle_jump_input(app, key);
            false
        }
        AppState::Quiz => handle_quiz_input(app, key),
        AppState::ConfirmReshuffle => {
            handle_confirm_input(app, key);
            false
        }
    }
}

fn handle_welcome_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Enter => {
            app.start_quiz();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

fn handle_quiz_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Up | KeyCode::Char('k') => {
            app.select_previous_option();
            false
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.select_next_option();
            false
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.submit_answer(Instant::now());
            false
        }
        KeyCode::Right | KeyCode::Char('n') => {
            app.next_question();
            false
        }
        KeyCode::Left | KeyCode::Char('p') => {
            app.previous_question();
            false
        }
        KeyCode::Char('g') => {
            app.begin_jump();
            false
        }
        KeyCode::Char('s') | KeyCode::Char('S') => {
            app.request_reshuffle();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

fn handle_jump_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Char(c) => app.jump_input_push(c),
        KeyCode::Backspace => app.jump_input_pop(),
        KeyCode::Enter => app.finish_jump(),
        KeyCode::Esc => app.cancel_jump(),
        _ => {}
    }
}

fn handle_confirm_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Char('y') | KeyCode::Char('Y') => app.confirm_reshuffle(true),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.confirm_reshuffle(false),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sample_question;

    fn quiz_app() -> App {
        let questions = (1..=5).map(sample_question).collect();
        App::with_questions(questions, SessionConfig::default())
    }

    #[test]
    fn test_welcome_keys() {
        let mut app = quiz_app();
        assert!(!handle_input(&mut app, KeyCode::Enter));
        assert_eq!(app.state, AppState::Quiz);
        assert!(handle_input(&mut app, KeyCode::Char('q')));
    }

    #[test]
    fn test_jump_mode_captures_keys() {
        let mut app = quiz_app();
        handle_input(&mut app, KeyCode::Enter);
        handle_input(&mut app, KeyCode::Char('g'));

        // 'q' is swallowed while typing a position
        assert!(!handle_input(&mut app, KeyCode::Char('q')));
        handle_input(&mut app, KeyCode::Char('4'));
        handle_input(&mut app, KeyCode::Enter);
        assert_eq!(app.session().cursor(), 3);
    }

    #[test]
    fn test_reshuffle_dialog_keys() {
        let mut app = quiz_app();
        handle_input(&mut app, KeyCode::Enter);
        handle_input(&mut app, KeyCode::Enter);
        assert_eq!(app.session().ledger().len(), 1);

        handle_input(&mut app, KeyCode::Char('s'));
        assert_eq!(app.state, AppState::ConfirmReshuffle);
        // quitting is not offered inside the dialog
        assert!(!handle_input(&mut app, KeyCode::Char('q')));
        assert_eq!(app.state, AppState::ConfirmReshuffle);

        handle_input(&mut app, KeyCode::Char('y'));
        assert_eq!(app.state, AppState::Quiz);
        assert_eq!(app.session().ledger().len(), 0);
    }

    #[test]
    fn test_error_messages() {
        let err = QuizError::from(LoadError::Empty);
        assert_eq!(
            err.to_string(),
            "Failed to load questions: question source must contain at least one question"
        );
    }
}
