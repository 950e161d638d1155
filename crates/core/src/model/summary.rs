use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::{AnswerRecord, SessionId};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SummaryError {
    #[error("completed_at is before started_at")]
    InvalidTimeRange,

    #[error("{answers} answers recorded for a quiz of {total} questions")]
    TooManyAnswers { answers: usize, total: u32 },

    #[error("too many questions for a single session: {len}")]
    TooManyQuestions { len: usize },
}

/// Aggregate summary for a finished play-through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    session_id: SessionId,
    started_at: DateTime<Utc>,
    completed_at: DateTime<Utc>,
    total: u32,
    correct: u32,
    incorrect: u32,
}

impl SessionSummary {
    /// Build a summary from the answer records of a session.
    ///
    /// Questions that were skipped (advanced without a selection) count as
    /// unanswered.
    ///
    /// # Errors
    ///
    /// Returns `SummaryError::InvalidTimeRange` if `completed_at` is before `started_at`.
    /// Returns `SummaryError::TooManyAnswers` if there are more records than questions.
    pub fn from_answers(
        session_id: SessionId,
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
        total_questions: usize,
        answers: &[AnswerRecord],
    ) -> Result<Self, SummaryError> {
        if completed_at < started_at {
            return Err(SummaryError::InvalidTimeRange);
        }
        let total = u32::try_from(total_questions)
            .map_err(|_| SummaryError::TooManyQuestions { len: total_questions })?;
        if answers.len() > total_questions {
            return Err(SummaryError::TooManyAnswers {
                answers: answers.len(),
                total,
            });
        }

        let mut correct = 0_u32;
        let mut incorrect = 0_u32;
        for answer in answers {
            if answer.correct {
                correct = correct.saturating_add(1);
            } else {
                incorrect = incorrect.saturating_add(1);
            }
        }

        Ok(Self {
            session_id,
            started_at,
            completed_at,
            total,
            correct,
            incorrect,
        })
    }

    #[must_use]
    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    #[must_use]
    pub fn correct(&self) -> u32 {
        self.correct
    }

    #[must_use]
    pub fn incorrect(&self) -> u32 {
        self.incorrect
    }

    #[must_use]
    pub fn unanswered(&self) -> u32 {
        self.total
            .saturating_sub(self.correct)
            .saturating_sub(self.incorrect)
    }

    /// Share of correct answers, rounded down to a whole percent.
    #[must_use]
    pub fn percentage(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        self.correct.saturating_mul(100) / self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;
    use chrono::Duration;

    fn record(question_index: usize, correct: bool) -> AnswerRecord {
        AnswerRecord {
            question_index,
            selected: format!("option-{question_index}"),
            correct,
            answered_at: fixed_now(),
        }
    }

    #[test]
    fn summary_counts_answers() {
        let now = fixed_now();
        let answers = vec![record(0, true), record(1, false), record(3, true)];

        let summary = SessionSummary::from_answers(
            SessionId::new(),
            now,
            now + Duration::seconds(30),
            4,
            &answers,
        )
        .unwrap();

        assert_eq!(summary.total(), 4);
        assert_eq!(summary.correct(), 2);
        assert_eq!(summary.incorrect(), 1);
        assert_eq!(summary.unanswered(), 1);
        assert_eq!(summary.percentage(), 50);
    }

    #[test]
    fn percentage_rounds_down() {
        let now = fixed_now();
        let answers = vec![record(0, true), record(1, false), record(2, true)];
        let summary =
            SessionSummary::from_answers(SessionId::new(), now, now, 3, &answers).unwrap();
        assert_eq!(summary.percentage(), 66);
    }

    #[test]
    fn inverted_time_range_is_rejected() {
        let now = fixed_now();
        let err = SessionSummary::from_answers(
            SessionId::new(),
            now,
            now - Duration::seconds(1),
            1,
            &[],
        )
        .unwrap_err();
        assert_eq!(err, SummaryError::InvalidTimeRange);
    }

    #[test]
    fn more_answers_than_questions_is_rejected() {
        let now = fixed_now();
        let err = SessionSummary::from_answers(
            SessionId::new(),
            now,
            now,
            1,
            &[record(0, true), record(1, true)],
        )
        .unwrap_err();
        assert_eq!(err, SummaryError::TooManyAnswers { answers: 2, total: 1 });
    }
}
