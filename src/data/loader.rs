use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::models::{Question, QuestionId, QuestionOption};

pub const DEFAULT_QUESTIONS_PATH: &str = "questions.json";

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse questions: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("question source must contain at least one question")]
    Empty,
    #[error("question {number} has no options")]
    NoOptions { number: usize },
}

/// One record as it appears in the question source.
#[derive(Deserialize)]
struct QuestionRecord {
    #[serde(default)]
    id: Option<RawId>,
    #[serde(alias = "text")]
    question: String,
    #[serde(default)]
    code: Option<String>,
    options: Vec<QuestionOption>,
    answer: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(u64),
    Text(String),
}

impl RawId {
    /// `0` and blank strings count as missing, like an absent id.
    fn into_id(self) -> Option<QuestionId> {
        match self {
            RawId::Number(0) => None,
            RawId::Number(n) => Some(QuestionId::new(n.to_string())),
            RawId::Text(text) if text.trim().is_empty() => None,
            RawId::Text(text) => Some(QuestionId::new(text)),
        }
    }
}

pub fn load_questions_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<Question>, LoadError> {
    let path = path.as_ref();
    let json_content = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let questions = load_questions_from_str(&json_content)?;
    tracing::info!(count = questions.len(), path = %path.display(), "loaded questions");
    Ok(questions)
}

pub fn load_questions_from_str(json: &str) -> Result<Vec<Question>, LoadError> {
    let records: Vec<QuestionRecord> = serde_json::from_str(json)?;
    if records.is_empty() {
        return Err(LoadError::Empty);
    }

    let mut seen = HashSet::with_capacity(records.len());
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| -> Result<Question, LoadError> {
            let number = index + 1;
            let mut question = into_question(record, number)?;
            if seen.contains(&question.id) {
                let fallback = unique_fallback(&question.id, number, &seen);
                tracing::warn!(
                    id = %question.id,
                    %fallback,
                    number,
                    "duplicate question identity, using fallback"
                );
                question.id = fallback;
            }
            seen.insert(question.id.clone());
            Ok(question)
        })
        .collect()
}

/// Picks an identity no earlier record uses: `<id>#<number>`, then `<id>#<number>-2`, ...
fn unique_fallback(id: &QuestionId, number: usize, seen: &HashSet<QuestionId>) -> QuestionId {
    let base = format!("{}#{}", id, number);
    let mut candidate = QuestionId::new(base.clone());
    let mut attempt = 2;
    while seen.contains(&candidate) {
        candidate = QuestionId::new(format!("{}-{}", base, attempt));
        attempt += 1;
    }
    candidate
}

fn into_question(record: QuestionRecord, number: usize) -> Result<Question, LoadError> {
    if record.options.is_empty() {
        return Err(LoadError::NoOptions { number });
    }

    let id = record
        .id
        .and_then(RawId::into_id)
        .unwrap_or_else(|| QuestionId::from(number));

    let question = Question {
        id,
        number,
        text: record.question,
        code: record.code,
        options: record.options,
        answer: record.answer,
    };

    if !question.has_option(&question.answer) {
        tracing::warn!(
            number,
            answer = %question.answer,
            "answer label does not match any option"
        );
    }

    Ok(question)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_QUESTIONS: &str = r#"[
        {
            "id": 42,
            "question": "Which keyword declares an immutable binding?",
            "options": [
                {"label": "A", "text": "let"},
                {"label": "B", "text": "var"}
            ],
            "answer": "A"
        },
        {
            "text": "What does `?` do?",
            "code": "let x = parse()?;",
            "options": [
                {"label": "A", "text": "Panics"},
                {"label": "B", "text": "Propagates the error"}
            ],
            "answer": "B"
        }
    ]"#;

    #[test]
    fn test_load_assigns_numbers_and_backfills_ids() {
        let questions = load_questions_from_str(TWO_QUESTIONS).unwrap();
        assert_eq!(questions.len(), 2);

        assert_eq!(questions[0].id, QuestionId::new("42"));
        assert_eq!(questions[0].number, 1);

        assert_eq!(questions[1].id, QuestionId::from(2));
        assert_eq!(questions[1].number, 2);
        assert_eq!(questions[1].code.as_deref(), Some("let x = parse()?;"));
        assert_eq!(questions[1].text, "What does `?` do?");
    }

    #[test]
    fn test_string_ids_are_kept() {
        let json = r#"[{"id": "ownership-1", "question": "q", "options": [{"label": "A", "text": "a"}], "answer": "A"}]"#;
        let questions = load_questions_from_str(json).unwrap();
        assert_eq!(questions[0].id.as_str(), "ownership-1");
    }

    #[test]
    fn test_blank_string_id_falls_back_to_position() {
        let json = r#"[{"id": " ", "question": "q", "options": [{"label": "A", "text": "a"}], "answer": "A"}]"#;
        let questions = load_questions_from_str(json).unwrap();
        assert_eq!(questions[0].id, QuestionId::from(1));
    }

    #[test]
    fn test_zero_id_falls_back_to_position() {
        let json = r#"[{"question": "q", "options": [{"label": "A", "text": "a"}], "answer": "A"},
                       {"id": 0, "question": "q", "options": [{"label": "A", "text": "a"}], "answer": "A"}]"#;
        let questions = load_questions_from_str(json).unwrap();
        assert_eq!(questions[1].id, QuestionId::from(2));
    }

    #[test]
    fn test_colliding_ids_are_made_unique() {
        // the second record has no id and would take position "2", already used by the first
        let json = r#"[
            {"id": 2, "question": "q1", "options": [{"label": "A", "text": "a"}, {"label": "B", "text": "b"}], "answer": "A"},
            {"question": "q2", "options": [{"label": "A", "text": "a"}, {"label": "B", "text": "b"}], "answer": "A"},
            {"id": "2#2", "question": "q3", "options": [{"label": "A", "text": "a"}], "answer": "A"},
            {"id": 2, "question": "q4", "options": [{"label": "A", "text": "a"}], "answer": "A"}
        ]"#;
        let questions = load_questions_from_str(json).unwrap();
        let ids: Vec<&str> = questions.iter().map(|q| q.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "2#2", "2#2#3", "2#4"]);
    }

    #[test]
    fn test_colliding_ids_keep_scores_consistent() {
        use crate::session::{QuestionBank, QuizSession, SessionConfig};

        let json = r#"[
            {"id": 2, "question": "q1", "options": [{"label": "A", "text": "a"}, {"label": "B", "text": "b"}], "answer": "A"},
            {"question": "q2", "options": [{"label": "A", "text": "a"}, {"label": "B", "text": "b"}], "answer": "A"},
            {"question": "q3", "options": [{"label": "A", "text": "a"}, {"label": "B", "text": "b"}], "answer": "A"}
        ]"#;
        let questions = load_questions_from_str(json).unwrap();
        let mut session = QuizSession::new(QuestionBank::new(questions), SessionConfig::default());

        assert!(session.select(0, "B").is_some());
        assert!(session.select(1, "A").is_some());
        assert_eq!(session.scores().total() as usize, session.ledger().len());
        assert_eq!(session.ledger().len(), 2);
    }

    #[test]
    fn test_empty_source_is_rejected() {
        assert!(matches!(load_questions_from_str("[]"), Err(LoadError::Empty)));
    }

    #[test]
    fn test_question_without_options_is_rejected() {
        let json = r#"[{"question": "q", "options": [], "answer": "A"}]"#;
        assert!(matches!(
            load_questions_from_str(json),
            Err(LoadError::NoOptions { number: 1 })
        ));
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        assert!(matches!(
            load_questions_from_str("{not json"),
            Err(LoadError::Parse(_))
        ));
    }

    #[test]
    fn test_unknown_answer_label_still_loads() {
        let json = r#"[{"question": "q", "options": [{"label": "A", "text": "a"}], "answer": "Z"}]"#;
        let questions = load_questions_from_str(json).unwrap();
        assert!(!questions[0].has_option("Z"));
    }

    #[test]
    fn test_bundled_questions_load() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_QUESTIONS_PATH);
        let questions = load_questions_from_json(path).unwrap();
        assert_eq!(questions.len(), 20);
        assert!(questions.iter().all(|q| q.has_option(&q.answer)));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = load_questions_from_json("does/not/exist.json").unwrap_err();
        assert!(err.to_string().contains("does/not/exist.json"));
    }
}
