use serde::Serialize;
use services::{QuizServiceError, SessionError};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewError {
    /// The question list could not be read or was malformed.
    LoadFailed,
    NoQuestions,
    /// The intent does not apply to the current screen; nothing changed.
    Rejected,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::LoadFailed => "Could not load the questions.",
            ViewError::NoQuestions => "No questions found. Check your question file.",
            ViewError::Rejected => "That action is not available right now.",
            ViewError::Unknown => "Something went wrong. Please try again.",
        }
    }
}

impl From<&SessionError> for ViewError {
    fn from(err: &SessionError) -> Self {
        match err {
            SessionError::NoQuestions => ViewError::NoQuestions,
            SessionError::NotInProgress { .. }
            | SessionError::AlreadyAnswered { .. }
            | SessionError::UnknownOption { .. }
            | SessionError::NotFinished { .. } => ViewError::Rejected,
            _ => ViewError::Unknown,
        }
    }
}

impl From<&QuizServiceError> for ViewError {
    fn from(err: &QuizServiceError) -> Self {
        match err {
            QuizServiceError::Storage(_) => ViewError::LoadFailed,
            QuizServiceError::Session(session) => ViewError::from(session),
            _ => ViewError::Unknown,
        }
    }
}
