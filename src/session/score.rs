/// Running correct/wrong totals shown to the user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scores {
    pub correct: u32,
    pub wrong: u32,
}

impl Scores {
    pub fn total(&self) -> u32 {
        self.correct + self.wrong
    }
}

#[derive(Debug, Clone, Default)]
pub struct ScoreTracker {
    scores: Scores,
}

impl ScoreTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scores(&self) -> Scores {
        self.scores
    }

    pub fn record_correct(&mut self) {
        self.scores.correct += 1;
    }

    pub fn record_wrong(&mut self) {
        self.scores.wrong += 1;
    }

    /// A review success turns an earlier miss into a correct answer.
    /// `wrong` never drops below zero.
    pub fn reverse_wrong(&mut self) {
        self.scores.correct += 1;
        if self.scores.wrong == 0 {
            tracing::warn!("review correction without a pending wrong answer, clamping at zero");
        }
        self.scores.wrong = self.scores.wrong.saturating_sub(1);
    }

    pub fn reset(&mut self) {
        self.scores = Scores::default();
    }
}
