use crate::models::{Question, QuestionId};

/// Questions missed since the last review, in the order they were missed.
#[derive(Debug, Clone, Default)]
pub struct WrongQueue {
    questions: Vec<Question>,
}

impl WrongQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the question unless one with the same identity is already queued.
    pub fn push(&mut self, question: Question) -> bool {
        if self.contains(&question.id) {
            return false;
        }
        self.questions.push(question);
        true
    }

    pub fn contains(&self, id: &QuestionId) -> bool {
        self.questions.iter().any(|question| &question.id == id)
    }

    /// Takes every queued question, leaving the queue empty.
    pub fn drain(&mut self) -> Vec<Question> {
        std::mem::take(&mut self.questions)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn clear(&mut self) {
        self.questions.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sample_question;

    #[test]
    fn test_push_deduplicates_by_identity() {
        let mut queue = WrongQueue::new();
        assert!(queue.push(sample_question(1)));
        assert!(queue.push(sample_question(2)));

        let mut copy = sample_question(1);
        copy.text = "edited copy".to_string();
        assert!(!queue.push(copy));

        assert_eq!(queue.len(), 2);
        assert_eq!(queue.iter().next().map(|q| q.text.as_str()), Some("Question 1"));
    }

    #[test]
    fn test_drain_empties_queue_in_order() {
        let mut queue = WrongQueue::new();
        queue.push(sample_question(3));
        queue.push(sample_question(1));

        let drained = queue.drain();
        let numbers: Vec<usize> = drained.iter().map(|q| q.number).collect();
        assert_eq!(numbers, vec![3, 1]);
        assert!(queue.is_empty());
        assert!(queue.push(sample_question(3)));
    }
}
