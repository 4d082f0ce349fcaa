use std::time::Duration;

use rand::Rng;

use crate::models::Question;

use super::bank::QuestionBank;
use super::events::{SessionEvent, SessionObserver};
use super::ledger::{AnswerLedger, Outcome};
use super::score::{ScoreTracker, Scores};
use super::snapshot::{option_views, NavItem, Snapshot};
use super::wrong_queue::WrongQueue;
use super::{Mode, SessionConfig};

/// A deferred advance issued by [`QuizSession::select`].
///
/// Firing it only advances if the user is still on the question that was
/// answered and the active list has not been replaced in the meantime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledAdvance {
    pub cursor: usize,
    pub delay: Duration,
    epoch: u64,
}

/// A question as it sits in the active list, with the user's pick if any.
#[derive(Debug, Clone)]
struct ListEntry {
    question: Question,
    marker: Option<String>,
}

pub struct QuizSession {
    config: SessionConfig,
    bank: QuestionBank,
    ledger: AnswerLedger,
    wrong_queue: WrongQueue,
    scores: ScoreTracker,
    mode: Mode,
    list: Vec<ListEntry>,
    cursor: usize,
    session_counter: u32,
    /// Bumped whenever the active list is replaced.
    epoch: u64,
    observers: Vec<Box<dyn SessionObserver>>,
}

impl QuizSession {
    pub fn new(bank: QuestionBank, config: SessionConfig) -> Self {
        let mut session = Self {
            config,
            bank,
            ledger: AnswerLedger::new(),
            wrong_queue: WrongQueue::new(),
            scores: ScoreTracker::new(),
            mode: Mode::Normal,
            list: Vec::new(),
            cursor: 0,
            session_counter: 0,
            epoch: 0,
            observers: Vec::new(),
        };
        session.start();
        session
    }

    pub fn subscribe<O: SessionObserver + 'static>(&mut self, observer: O) {
        self.observers.push(Box::new(observer));
    }

    /// Puts the session in normal mode on the first question of the bank.
    ///
    /// Review questions not answered yet go back to the wrong queue.
    pub fn start(&mut self) {
        if self.mode == Mode::Review {
            for entry in std::mem::take(&mut self.list) {
                if entry.marker.is_none() {
                    self.wrong_queue.push(entry.question);
                }
            }
        }
        self.mode = Mode::Normal;
        self.list = self.normal_list();
        self.cursor = 0;
        self.epoch += 1;
        tracing::debug!(questions = self.list.len(), "session started");
    }

    /// Records the user's pick for the question at `cursor` in the active list.
    ///
    /// Returns `None` when nothing was recorded: the cursor is out of range, the
    /// label is not an option, or the question already carries an answer.
    pub fn select(&mut self, cursor: usize, label: &str) -> Option<ScheduledAdvance> {
        let mode = self.mode;
        let entry = self.list.get_mut(cursor)?;
        if entry.marker.is_some() {
            tracing::debug!(cursor, "question already answered, ignoring selection");
            return None;
        }
        if !entry.question.has_option(label) {
            tracing::warn!(cursor, label, "selection is not an option of the question");
            return None;
        }
        if mode == Mode::Normal && self.ledger.contains(&entry.question.id) {
            tracing::warn!(cursor, id = %entry.question.id, "identity already answered, ignoring selection");
            return None;
        }

        entry.marker = Some(label.to_string());
        let id = entry.question.id.clone();
        let correct = entry.question.is_correct(label);

        match (mode, correct) {
            (Mode::Normal, true) => {
                self.scores.record_correct();
                self.ledger.record(&id, label);
            }
            (Mode::Normal, false) => {
                self.scores.record_wrong();
                self.ledger.record(&id, label);
            }
            (Mode::Review, true) => {
                self.scores.reverse_wrong();
                self.ledger.mark_corrected(&id);
            }
            // already counted when it was first missed
            (Mode::Review, false) => {}
        }

        if !correct {
            let bank_copy = match self.bank.find(&id) {
                Some(question) => question.clone(),
                None => self.list[cursor].question.clone(),
            };
            if self.wrong_queue.push(bank_copy) {
                tracing::debug!(%id, queued = self.wrong_queue.len(), "question queued for review");
            }
        }

        if mode == Mode::Normal {
            self.session_counter += 1;
        }

        tracing::debug!(%id, cursor, label, correct, ?mode, "answer recorded");
        self.emit(SessionEvent::Answered {
            id,
            cursor,
            label: label.to_string(),
            correct,
            mode,
        });

        Some(ScheduledAdvance {
            cursor,
            delay: self.config.advance_delay,
            epoch: self.epoch,
        })
    }

    /// Runs a deferred advance. Stale tickets do nothing and return `false`.
    pub fn fire(&mut self, ticket: ScheduledAdvance) -> bool {
        if ticket.epoch != self.epoch || ticket.cursor != self.cursor {
            tracing::debug!(
                ticket_cursor = ticket.cursor,
                cursor = self.cursor,
                "stale advance ignored"
            );
            return false;
        }
        self.advance();
        true
    }

    /// Moves the session forward, entering or leaving review when due.
    pub fn advance(&mut self) {
        match self.mode {
            Mode::Review => {
                if self.cursor + 1 < self.list.len() {
                    self.cursor += 1;
                } else {
                    self.exit_review();
                }
            }
            Mode::Normal => {
                if self.review_due() {
                    self.enter_review();
                } else if self.cursor + 1 < self.list.len() {
                    self.cursor += 1;
                }
            }
        }
    }

    /// Jumps to any index of the active list. Out-of-range requests are ignored.
    pub fn goto(&mut self, index: usize) -> bool {
        if index >= self.list.len() {
            return false;
        }
        self.cursor = index;
        true
    }

    pub fn next(&mut self) -> bool {
        self.goto(self.cursor + 1)
    }

    pub fn previous(&mut self) -> bool {
        match self.cursor.checked_sub(1) {
            Some(index) => self.goto(index),
            None => false,
        }
    }

    pub fn reshuffle(&mut self) {
        self.reshuffle_with(&mut rand::rng());
    }

    /// Shuffles the bank and throws away all progress.
    pub fn reshuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.bank.shuffle_with(rng);
        self.ledger.clear();
        self.scores.reset();
        self.session_counter = 0;
        self.start();
        self.wrong_queue.clear();
        tracing::info!(questions = self.bank.len(), "questions reshuffled");
        self.emit(SessionEvent::Reshuffled);
    }

    pub fn review_due(&self) -> bool {
        self.mode == Mode::Normal
            && self.session_counter >= self.config.review_interval
            && !self.wrong_queue.is_empty()
    }

    fn enter_review(&mut self) {
        self.list = self
            .wrong_queue
            .drain()
            .into_iter()
            .map(|question| ListEntry {
                question,
                marker: None,
            })
            .collect();
        self.session_counter = 0;
        self.mode = Mode::Review;
        self.cursor = 0;
        self.epoch += 1;

        let size = self.list.len();
        tracing::info!(size, "entering review");
        self.emit(SessionEvent::ReviewStarted { size });
    }

    fn exit_review(&mut self) {
        self.mode = Mode::Normal;
        self.list = self.normal_list();
        self.cursor = self
            .bank
            .iter()
            .position(|question| !self.ledger.contains(&question.id))
            .unwrap_or(0);
        self.epoch += 1;

        tracing::info!(resume_at = self.cursor, "review finished");
        self.emit(SessionEvent::ReviewFinished {
            resume_at: self.cursor,
        });
    }

    /// The full bank, with markers restored from the ledger.
    fn normal_list(&self) -> Vec<ListEntry> {
        self.bank
            .iter()
            .map(|question| ListEntry {
                question: question.clone(),
                marker: self.ledger.answer(&question.id).map(str::to_string),
            })
            .collect()
    }

    fn emit(&mut self, event: SessionEvent) {
        for observer in &mut self.observers {
            observer.notify(&event);
        }
    }

    pub fn snapshot(&self) -> Option<Snapshot<'_>> {
        let entry = self.list.get(self.cursor)?;
        let progress_total = match self.mode {
            Mode::Review => self.list.len(),
            Mode::Normal => self.bank.len(),
        };
        Some(Snapshot {
            mode: self.mode,
            cursor: self.cursor,
            len: self.list.len(),
            progress_total,
            question: &entry.question,
            marker: entry.marker.as_deref(),
            options: option_views(&entry.question, entry.marker.as_deref()),
            scores: self.scores.scores(),
        })
    }

    pub fn nav_items(&self) -> Vec<NavItem> {
        self.list
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                let status = match self.mode {
                    Mode::Review => entry.marker.as_deref().map(|label| {
                        if entry.question.is_correct(label) {
                            Outcome::Correct
                        } else {
                            Outcome::Wrong
                        }
                    }),
                    Mode::Normal => self.ledger.outcome(&entry.question),
                };
                NavItem {
                    number: entry.question.number,
                    status,
                    active: index == self.cursor,
                }
            })
            .collect()
    }

    pub fn marker(&self, index: usize) -> Option<&str> {
        self.list.get(index)?.marker.as_deref()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Length of the active list.
    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn scores(&self) -> Scores {
        self.scores.scores()
    }

    pub fn session_counter(&self) -> u32 {
        self.session_counter
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn ledger(&self) -> &AnswerLedger {
        &self.ledger
    }

    pub fn wrong_queue(&self) -> &WrongQueue {
        &self.wrong_queue
    }
}
