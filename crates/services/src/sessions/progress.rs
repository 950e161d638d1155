use quiz_core::model::{Phase, Session};

/// Aggregated view of session progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionProgress {
    pub total: usize,
    pub answered: usize,
    pub remaining: usize,
    pub is_complete: bool,
}

impl SessionProgress {
    #[must_use]
    pub fn from_session(session: &Session) -> Self {
        let total = session.total_questions();
        let remaining = match session.phase() {
            Phase::NotStarted => total,
            Phase::InProgress => {
                let done = session.question_index() + usize::from(session.is_locked());
                total.saturating_sub(done)
            }
            Phase::Finished => 0,
        };
        Self {
            total,
            answered: session.answers().len(),
            remaining,
            is_complete: session.phase() == Phase::Finished,
        }
    }
}
