#![forbid(unsafe_code)]

pub mod json;
pub mod repository;

pub use json::{EmbeddedRepository, JsonFileRepository, parse_question_set, repository_for};
pub use repository::{InMemoryRepository, QuestionRecord, QuestionRepository, StorageError};
