use async_trait::async_trait;
use quiz_core::model::{QuestionDraft, QuestionSet, QuestionSetError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by question sources.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("question file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error(transparent)]
    InvalidQuestions(#[from] QuestionSetError),

    #[error("backend error: {0}")]
    Backend(String),
}

/// Wire shape of one entry in a question file.
///
/// Mirrors `QuestionDraft` so sources can deserialize without leaking
/// format concerns into the domain layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    #[serde(alias = "prompt")]
    pub question: String,
    pub options: Vec<String>,
    #[serde(rename = "correctAnswer", alias = "correct_answer")]
    pub correct_answer: String,
}

impl QuestionRecord {
    #[must_use]
    pub fn new(
        question: impl Into<String>,
        options: impl IntoIterator<Item = impl Into<String>>,
        correct_answer: impl Into<String>,
    ) -> Self {
        Self {
            question: question.into(),
            options: options.into_iter().map(Into::into).collect(),
            correct_answer: correct_answer.into(),
        }
    }

    #[must_use]
    pub fn into_draft(self) -> QuestionDraft {
        QuestionDraft {
            prompt: self.question,
            options: self.options,
            correct_answer: self.correct_answer,
        }
    }
}

/// Validate records in order into a `QuestionSet`.
///
/// # Errors
///
/// Returns `StorageError::InvalidQuestions` for the first malformed record.
pub fn records_into_set(records: Vec<QuestionRecord>) -> Result<QuestionSet, StorageError> {
    Ok(QuestionSet::from_drafts(
        records.into_iter().map(QuestionRecord::into_draft),
    )?)
}

/// Source of the fixed question list, read once at startup.
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// Load and validate the full question list.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the source cannot be read or holds malformed
    /// questions. An empty list is not an error.
    async fn load_questions(&self) -> Result<QuestionSet, StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    records: Arc<Mutex<Vec<QuestionRecord>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_records(records: Vec<QuestionRecord>) -> Self {
        Self {
            records: Arc::new(Mutex::new(records)),
        }
    }

    /// Append a record to the list served by later loads.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Backend` if the internal lock is poisoned.
    pub fn push(&self, record: QuestionRecord) -> Result<(), StorageError> {
        let mut guard = self
            .records
            .lock()
            .map_err(|e| StorageError::Backend(e.to_string()))?;
        guard.push(record);
        Ok(())
    }
}

#[async_trait]
impl QuestionRepository for InMemoryRepository {
    async fn load_questions(&self) -> Result<QuestionSet, StorageError> {
        let records = {
            let guard = self
                .records
                .lock()
                .map_err(|e| StorageError::Backend(e.to_string()))?;
            guard.clone()
        };
        records_into_set(records)
    }
}
