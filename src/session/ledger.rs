//! First accepted answer per question, the durable scoring record.

use std::collections::{HashMap, HashSet};

use crate::models::{Question, QuestionId};

/// How a question currently stands in the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Correct,
    Wrong,
    /// Missed in normal mode, later answered correctly in review.
    Corrected,
}

#[derive(Debug, Clone, Default)]
pub struct AnswerLedger {
    answers: HashMap<QuestionId, String>,
    corrected: HashSet<QuestionId>,
}

impl AnswerLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the answer unless the question already has one. Returns whether it was written.
    pub fn record(&mut self, id: &QuestionId, label: &str) -> bool {
        if self.answers.contains_key(id) {
            return false;
        }
        self.answers.insert(id.clone(), label.to_string());
        true
    }

    /// Notes that a missed question was answered correctly during review.
    /// The original answer is left untouched.
    pub fn mark_corrected(&mut self, id: &QuestionId) {
        self.corrected.insert(id.clone());
    }

    pub fn answer(&self, id: &QuestionId) -> Option<&str> {
        self.answers.get(id).map(String::as_str)
    }

    pub fn contains(&self, id: &QuestionId) -> bool {
        self.answers.contains_key(id)
    }

    pub fn outcome(&self, question: &Question) -> Option<Outcome> {
        let label = self.answer(&question.id)?;
        Some(if question.is_correct(label) {
            Outcome::Correct
        } else if self.corrected.contains(&question.id) {
            Outcome::Corrected
        } else {
            Outcome::Wrong
        })
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn clear(&mut self) {
        self.answers.clear();
        self.corrected.clear();
    }
}
