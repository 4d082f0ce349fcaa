use std::time::Instant;

use crate::models::{AppState, Question};
use crate::session::{QuestionBank, QuizSession, ScheduledAdvance, SessionConfig, Snapshot};

/// A deferred advance waiting for its deadline.
#[derive(Debug, Clone, Copy)]
struct PendingAdvance {
    ticket: ScheduledAdvance,
    due: Instant,
}

/// Terminal presenter state around a [`QuizSession`].
pub struct App {
    pub state: AppState,
    session: QuizSession,
    selected_option: usize,
    pending: Vec<PendingAdvance>,
    /// Digits typed after `g`, naming a question position to jump to.
    jump_input: Option<String>,
}

impl App {
    pub fn with_questions(questions: Vec<Question>, config: SessionConfig) -> Self {
        Self::with_session(QuizSession::new(QuestionBank::new(questions), config))
    }

    pub fn with_session(session: QuizSession) -> Self {
        Self {
            state: AppState::Welcome,
            session,
            selected_option: 0,
            pending: Vec::new(),
            jump_input: None,
        }
    }

    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut QuizSession {
        &mut self.session
    }

    pub fn snapshot(&self) -> Option<Snapshot<'_>> {
        self.session.snapshot()
    }

    pub fn selected_option(&self) -> usize {
        self.selected_option
    }

    pub fn jump_input(&self) -> Option<&str> {
        self.jump_input.as_deref()
    }

    pub fn has_pending_advance(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn start_quiz(&mut self) {
        self.session.start();
        self.reset_highlight();
        self.state = AppState::Quiz;
    }

    fn option_count(&self) -> usize {
        self.snapshot().map_or(0, |snapshot| snapshot.options.len())
    }

    pub fn select_next_option(&mut self) {
        let count = self.option_count();
        if count > 0 {
            self.selected_option = (self.selected_option + 1) % count;
        }
    }

    pub fn select_previous_option(&mut self) {
        let count = self.option_count();
        if count > 0 {
            self.selected_option = (self.selected_option + count - 1) % count;
        }
    }

    /// Answers with the highlighted option, or moves on if the question is already answered.
    pub fn submit_answer(&mut self, now: Instant) {
        let (cursor, answered, label) = match self.snapshot() {
            Some(snapshot) => (
                snapshot.cursor,
                snapshot.is_answered(),
                snapshot
                    .options
                    .get(self.selected_option)
                    .map(|option| option.label.to_string()),
            ),
            None => return,
        };

        if answered {
            self.continue_flow();
            return;
        }
        let Some(label) = label else {
            return;
        };

        if let Some(ticket) = self.session.select(cursor, &label) {
            self.pending.push(PendingAdvance {
                ticket,
                due: now + ticket.delay,
            });
        }
    }

    /// Skips the remaining delay and advances right away.
    pub fn continue_flow(&mut self) {
        let before = (self.session.mode(), self.session.cursor());
        self.session.advance();
        if before != (self.session.mode(), self.session.cursor()) {
            self.reset_highlight();
        }
    }

    pub fn next_question(&mut self) {
        if self.session.next() {
            self.reset_highlight();
        }
    }

    pub fn previous_question(&mut self) {
        if self.session.previous() {
            self.reset_highlight();
        }
    }

    pub fn begin_jump(&mut self) {
        self.jump_input = Some(String::new());
    }

    pub fn jump_input_push(&mut self, c: char) {
        if let Some(input) = &mut self.jump_input {
            if c.is_ascii_digit() && input.len() < 4 {
                input.push(c);
            }
        }
    }

    pub fn jump_input_pop(&mut self) {
        if let Some(input) = &mut self.jump_input {
            input.pop();
        }
    }

    pub fn cancel_jump(&mut self) {
        self.jump_input = None;
    }

    /// Jumps to the 1-based position typed after `g`.
    pub fn finish_jump(&mut self) {
        let Some(input) = self.jump_input.take() else {
            return;
        };
        let Ok(position) = input.parse::<usize>() else {
            return;
        };
        if let Some(index) = position.checked_sub(1) {
            if self.session.goto(index) {
                self.reset_highlight();
            }
        }
    }

    pub fn request_reshuffle(&mut self) {
        self.state = AppState::ConfirmReshuffle;
    }

    pub fn confirm_reshuffle(&mut self, confirmed: bool) {
        if confirmed {
            self.session.reshuffle();
            self.pending.clear();
            self.reset_highlight();
        }
        self.state = AppState::Quiz;
    }

    /// Fires every deferred advance whose deadline has passed.
    pub fn tick(&mut self, now: Instant) {
        if self.pending.iter().all(|pending| pending.due > now) {
            return;
        }

        let (due, waiting): (Vec<_>, Vec<_>) = self
            .pending
            .drain(..)
            .partition(|pending| pending.due <= now);
        self.pending = waiting;

        for pending in due {
            if self.session.fire(pending.ticket) {
                self.reset_highlight();
            }
        }
    }

    fn reset_highlight(&mut self) {
        self.selected_option = 0;
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::models::sample_question;
    use crate::session::{Mode, Scores};

    fn app(size: usize) -> App {
        let questions = (1..=size).map(sample_question).collect();
        let mut app = App::with_questions(questions, SessionConfig::default());
        app.start_quiz();
        app
    }

    #[test]
    fn test_option_highlight_wraps() {
        let mut app = app(3);
        app.select_previous_option();
        assert_eq!(app.selected_option(), 3);
        app.select_next_option();
        assert_eq!(app.selected_option(), 0);
    }

    #[test]
    fn test_answer_advances_after_delay() {
        let mut app = app(3);
        let start = Instant::now();
        app.submit_answer(start);
        assert!(app.has_pending_advance());

        app.tick(start + Duration::from_millis(1999));
        assert_eq!(app.session().cursor(), 0);

        app.tick(start + Duration::from_millis(2000));
        assert_eq!(app.session().cursor(), 1);
        assert!(!app.has_pending_advance());
        assert_eq!(app.session().scores(), Scores { correct: 1, wrong: 0 });
    }

    #[test]
    fn test_navigation_cancels_pending_advance() {
        let mut app = app(5);
        let start = Instant::now();
        app.submit_answer(start);
        app.next_question();
        app.next_question();

        app.tick(start + Duration::from_secs(3));
        assert_eq!(app.session().cursor(), 2);
    }

    #[test]
    fn test_submit_on_answered_question_continues() {
        let mut app = app(3);
        let start = Instant::now();
        app.select_next_option();
        app.submit_answer(start);
        assert_eq!(app.session().scores(), Scores { correct: 0, wrong: 1 });

        app.submit_answer(start);
        assert_eq!(app.session().cursor(), 1);
        assert_eq!(app.session().scores(), Scores { correct: 0, wrong: 1 });

        // the first timer is now stale
        app.tick(start + Duration::from_secs(3));
        assert_eq!(app.session().cursor(), 1);
    }

    #[test]
    fn test_jump_to_position() {
        let mut app = app(12);
        app.begin_jump();
        app.jump_input_push('1');
        app.jump_input_push('x');
        app.jump_input_push('1');
        assert_eq!(app.jump_input(), Some("11"));
        app.finish_jump();
        assert_eq!(app.session().cursor(), 10);
        assert_eq!(app.jump_input(), None);

        app.begin_jump();
        app.jump_input_push('0');
        app.finish_jump();
        assert_eq!(app.session().cursor(), 10);
    }

    #[test]
    fn test_reshuffle_requires_confirmation() {
        let mut app = app(10);
        let start = Instant::now();
        app.submit_answer(start);

        app.request_reshuffle();
        assert_eq!(app.state, AppState::ConfirmReshuffle);
        app.confirm_reshuffle(false);
        assert_eq!(app.state, AppState::Quiz);
        assert_eq!(app.session().ledger().len(), 1);

        app.request_reshuffle();
        app.confirm_reshuffle(true);
        assert_eq!(app.state, AppState::Quiz);
        assert_eq!(app.session().ledger().len(), 0);
        assert_eq!(app.session().scores(), Scores::default());
        assert_eq!(app.session().cursor(), 0);
        assert_eq!(app.session().mode(), Mode::Normal);
        assert!(!app.has_pending_advance());
    }
}
