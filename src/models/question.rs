use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable key for a question across list copies and bank reorderings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct QuestionId(String);

impl QuestionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<usize> for QuestionId {
    fn from(position: usize) -> Self {
        Self(position.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionOption {
    pub label: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: QuestionId,
    /// 1-based load position, never changes after load.
    pub number: usize,
    pub text: String,
    pub code: Option<String>,
    pub options: Vec<QuestionOption>,
    pub answer: String,
}

impl Question {
    pub fn option(&self, label: &str) -> Option<&QuestionOption> {
        self.options.iter().find(|option| option.label == label)
    }

    pub fn has_option(&self, label: &str) -> bool {
        self.option(label).is_some()
    }

    pub fn is_correct(&self, label: &str) -> bool {
        self.answer == label
    }
}

#[cfg(test)]
pub(crate) fn sample(position: usize) -> Question {
    Question {
        id: QuestionId::from(position),
        number: position,
        text: format!("Question {}", position),
        code: None,
        options: ["A", "B", "C", "D"]
            .iter()
            .map(|label| QuestionOption {
                label: label.to_string(),
                text: format!("Option {}", label),
            })
            .collect(),
        answer: "A".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_lookup() {
        let question = sample(3);
        assert_eq!(question.option("C").map(|o| o.text.as_str()), Some("Option C"));
        assert!(question.has_option("D"));
        assert!(!question.has_option("E"));
    }

    #[test]
    fn test_is_correct() {
        let question = sample(1);
        assert!(question.is_correct("A"));
        assert!(!question.is_correct("B"));
    }

    #[test]
    fn test_id_from_position() {
        assert_eq!(QuestionId::from(7).as_str(), "7");
        assert_eq!(QuestionId::new("q-7").to_string(), "q-7");
    }
}
