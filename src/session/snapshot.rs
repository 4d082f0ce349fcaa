use crate::models::Question;

use super::ledger::Outcome;
use super::score::Scores;
use super::Mode;

/// How an option should be shown once the question has been answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionState {
    Neutral,
    Correct,
    /// The option the user picked, when it was not the answer.
    Wrong,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionView<'a> {
    pub label: &'a str,
    pub text: &'a str,
    pub state: OptionState,
}

/// Everything a presenter needs to draw the current question.
#[derive(Debug, Clone)]
pub struct Snapshot<'a> {
    pub mode: Mode,
    pub cursor: usize,
    pub len: usize,
    /// Denominator of the progress fraction: review list length or full bank length.
    pub progress_total: usize,
    pub question: &'a Question,
    pub marker: Option<&'a str>,
    pub options: Vec<OptionView<'a>>,
    pub scores: Scores,
}

impl Snapshot<'_> {
    pub fn progress(&self) -> f64 {
        if self.progress_total == 0 {
            return 0.0;
        }
        ((self.cursor + 1) as f64 / self.progress_total as f64).min(1.0)
    }

    pub fn is_answered(&self) -> bool {
        self.marker.is_some()
    }
}

pub(crate) fn option_views<'a>(question: &'a Question, marker: Option<&str>) -> Vec<OptionView<'a>> {
    question
        .options
        .iter()
        .map(|option| {
            let state = match marker {
                None => OptionState::Neutral,
                Some(_) if question.is_correct(&option.label) => OptionState::Correct,
                Some(selected) if selected == option.label => OptionState::Wrong,
                Some(_) => OptionState::Neutral,
            };
            OptionView {
                label: &option.label,
                text: &option.text,
                state,
            }
        })
        .collect()
}

/// One cell of the navigation grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub number: usize,
    pub status: Option<Outcome>,
    pub active: bool,
}
