use serde::Serialize;

use quiz_core::model::{Phase, Question, Session, SessionId, SessionStatus};

/// Read-only copy of the question on screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionView {
    pub prompt: String,
    pub options: Vec<String>,
    pub correct_answer: String,
}

impl From<&Question> for QuestionView {
    fn from(question: &Question) -> Self {
        Self {
            prompt: question.prompt().to_owned(),
            options: question.options().to_vec(),
            correct_answer: question.correct_answer().to_owned(),
        }
    }
}

/// Snapshot of a session for rendering.
///
/// Owns its data so hosts can keep or serialize it while the session moves on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionView {
    pub session_id: SessionId,
    pub status: SessionStatus,
    pub phase: Phase,
    /// 1-based position of the current question while in progress.
    pub question_number: Option<usize>,
    pub current_question: Option<QuestionView>,
    pub selected_option: Option<String>,
    pub locked: bool,
    pub score: u32,
    pub total_questions: usize,
    /// Whether the selection on the current question was correct.
    pub last_feedback: Option<bool>,
}

impl SessionView {
    #[must_use]
    pub fn from_session(session: &Session) -> Self {
        let current_question = session.current_question().map(QuestionView::from);
        let question_number = current_question
            .as_ref()
            .map(|_| session.question_index() + 1);

        Self {
            session_id: session.id(),
            status: session.status(),
            phase: session.phase(),
            question_number,
            current_question,
            selected_option: session.selected_option().map(str::to_owned),
            locked: session.is_locked(),
            score: session.score(),
            total_questions: session.total_questions(),
            last_feedback: session.current_feedback(),
        }
    }

    #[must_use]
    pub fn is_last_question(&self) -> bool {
        self.question_number == Some(self.total_questions)
    }
}
