//! JSON-backed question sources.
//!
//! A question file is a JSON array of objects with `question`, `options` and
//! `correctAnswer` fields.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use quiz_core::model::{QuestionSet, QuestionSource};

use crate::repository::{QuestionRecord, QuestionRepository, StorageError, records_into_set};

const EMBEDDED_QUESTIONS: &str = include_str!("../data/questions.json");

/// Parse and validate the contents of a question file.
///
/// # Errors
///
/// Returns `StorageError::Serialization` for malformed JSON or missing fields,
/// and `StorageError::InvalidQuestions` for entries that fail validation.
pub fn parse_question_set(raw: &str) -> Result<QuestionSet, StorageError> {
    let records: Vec<QuestionRecord> =
        serde_json::from_str(raw).map_err(|e| StorageError::Serialization(e.to_string()))?;
    records_into_set(records)
}

/// Reads questions from a JSON file on every load.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl QuestionRepository for JsonFileRepository {
    async fn load_questions(&self) -> Result<QuestionSet, StorageError> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| match source.kind() {
                ErrorKind::NotFound => StorageError::NotFound(self.path.clone()),
                _ => StorageError::Io {
                    path: self.path.clone(),
                    source,
                },
            })?;
        let set = parse_question_set(&raw)?;
        tracing::debug!(path = %self.path.display(), count = set.len(), "loaded question file");
        Ok(set)
    }
}

/// Serves the question bank compiled into this crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedRepository;

#[async_trait]
impl QuestionRepository for EmbeddedRepository {
    async fn load_questions(&self) -> Result<QuestionSet, StorageError> {
        parse_question_set(EMBEDDED_QUESTIONS)
    }
}

/// Pick the repository matching the configured source.
#[must_use]
pub fn repository_for(source: &QuestionSource) -> Arc<dyn QuestionRepository> {
    match source {
        QuestionSource::Embedded => Arc::new(EmbeddedRepository),
        QuestionSource::File(path) => Arc::new(JsonFileRepository::new(path.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::{QuestionError, QuestionSetError};

    #[tokio::test]
    async fn embedded_bank_is_valid() {
        let set = EmbeddedRepository.load_questions().await.unwrap();
        assert!(!set.is_empty());
        for question in &set {
            assert!(question.has_option(question.correct_answer()));
        }
    }

    #[test]
    fn parses_camel_case_and_aliases() {
        let raw = r#"[
            {"question": "Q1", "options": ["a", "b"], "correctAnswer": "b"},
            {"prompt": "Q2", "options": ["c", "d"], "correct_answer": "c"}
        ]"#;

        let set = parse_question_set(raw).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.get(0).unwrap().correct_answer(), "b");
        assert_eq!(set.get(1).unwrap().prompt(), "Q2");
    }

    #[test]
    fn empty_array_is_an_empty_set() {
        let set = parse_question_set("[]").unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn missing_correct_answer_is_a_serialization_error() {
        let raw = r#"[{"question": "Q1", "options": ["a"]}]"#;
        let err = parse_question_set(raw).unwrap_err();
        assert!(matches!(err, StorageError::Serialization(msg) if msg.contains("correctAnswer")));
    }

    #[test]
    fn answer_outside_options_is_reported_with_index() {
        let raw = r#"[
            {"question": "Q1", "options": ["a", "b"], "correctAnswer": "a"},
            {"question": "Q2", "options": ["c", "d"], "correctAnswer": "z"}
        ]"#;
        let err = parse_question_set(raw).unwrap_err();
        assert!(matches!(
            err,
            StorageError::InvalidQuestions(QuestionSetError::InvalidQuestion {
                index: 1,
                source: QuestionError::CorrectAnswerNotAnOption { .. },
            })
        ));
    }

    #[tokio::test]
    async fn repository_for_picks_file_source() {
        let repo = repository_for(&QuestionSource::File(PathBuf::from(
            "definitely/not/here.json",
        )));
        let err = repo.load_questions().await.unwrap_err();
        assert!(matches!(err, StorageError::NotFound(path) if path.ends_with("here.json")));
    }
}
