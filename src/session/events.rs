//! Notifications the session emits to presenters and feedback sinks.

use crate::models::QuestionId;

use super::Mode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// An answer was accepted for the question at `cursor`.
    Answered {
        id: QuestionId,
        cursor: usize,
        label: String,
        correct: bool,
        mode: Mode,
    },
    /// Review mode started over `size` missed questions.
    ReviewStarted { size: usize },
    /// Review mode ended; normal mode resumed at `resume_at`.
    ReviewFinished { resume_at: usize },
    Reshuffled,
}

pub trait SessionObserver {
    fn notify(&mut self, event: &SessionEvent);
}

impl<F> SessionObserver for F
where
    F: FnMut(&SessionEvent),
{
    fn notify(&mut self, event: &SessionEvent) {
        self(event)
    }
}
