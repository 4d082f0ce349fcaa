mod question;

pub use question::{Question, QuestionId, QuestionOption};

#[cfg(test)]
pub(crate) use question::sample as sample_question;

/// Which screen the terminal presenter is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Welcome,
    Quiz,
    /// Reshuffle was requested and waits for a yes/no answer.
    ConfirmReshuffle,
}
