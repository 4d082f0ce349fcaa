use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{Question, QuestionId};

/// The loaded questions in their current traversal order.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn find(&self, id: &QuestionId) -> Option<&Question> {
        self.questions.iter().find(|question| &question.id == id)
    }

    pub fn position_of(&self, id: &QuestionId) -> Option<usize> {
        self.questions.iter().position(|question| &question.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }

    /// Reorders the bank uniformly at random. Display numbers stay with their question.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.questions.shuffle(rng);
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::models::sample_question;

    fn bank(size: usize) -> QuestionBank {
        QuestionBank::new((1..=size).map(sample_question).collect())
    }

    #[test]
    fn test_position_of() {
        let bank = bank(5);
        assert_eq!(bank.position_of(&QuestionId::from(3)), Some(2));
        assert_eq!(bank.position_of(&QuestionId::from(9)), None);
    }

    #[test]
    fn test_shuffle_keeps_numbers_with_questions() {
        let mut bank = bank(20);
        let mut rng = StdRng::seed_from_u64(7);
        bank.shuffle_with(&mut rng);

        assert_eq!(bank.len(), 20);
        for question in bank.iter() {
            assert_eq!(question.id, QuestionId::from(question.number));
        }

        let mut numbers: Vec<usize> = bank.iter().map(|q| q.number).collect();
        numbers.sort_unstable();
        assert_eq!(numbers, (1..=20).collect::<Vec<_>>());
    }
}
