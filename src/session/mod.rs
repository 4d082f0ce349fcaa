//! Quiz session core.
//!
//! A pure state machine over an in-memory question bank: question sequencing,
//! scoring, and the normal/review mode transition. It has no terminal
//! dependency; presenters read [`Snapshot`]s and subscribe to [`SessionEvent`]s.

mod bank;
mod events;
mod ledger;
mod machine;
mod score;
mod snapshot;
mod wrong_queue;

use std::time::Duration;

pub use bank::QuestionBank;
pub use events::{SessionEvent, SessionObserver};
pub use ledger::{AnswerLedger, Outcome};
pub use machine::{QuizSession, ScheduledAdvance};
pub use score::{ScoreTracker, Scores};
pub use snapshot::{NavItem, OptionState, OptionView, Snapshot};
pub use wrong_queue::WrongQueue;

/// Normal-mode answers between review rounds.
pub const DEFAULT_REVIEW_INTERVAL: u32 = 15;

/// Delay between an answer and the automatic move to the next question.
pub const DEFAULT_ADVANCE_DELAY: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    Review,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub review_interval: u32,
    pub advance_delay: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            review_interval: DEFAULT_REVIEW_INTERVAL,
            advance_delay: DEFAULT_ADVANCE_DELAY,
        }
    }
}
