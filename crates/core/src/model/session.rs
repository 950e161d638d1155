use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Clock;
use crate::model::{Question, QuestionSet, SessionId, SessionSummary, SummaryError};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// Rejected transitions. A rejected call never mutates the session.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("no questions available")]
    NoQuestions,

    #[error("session is {phase}, not in progress")]
    NotInProgress { phase: Phase },

    #[error("an answer was already selected for this question: `{selected}`")]
    AlreadyAnswered { selected: String },

    #[error("`{option}` is not an option of the current question")]
    UnknownOption { option: String },

    #[error("session is {phase}, not finished")]
    NotFinished { phase: Phase },

    #[error(transparent)]
    Summary(#[from] SummaryError),
}

//
// ─── PHASE & STATUS ────────────────────────────────────────────────────────────
//

/// Coarse lifecycle stage of a play-through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    NotStarted,
    InProgress,
    Finished,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Phase::NotStarted => "not started",
            Phase::InProgress => "in progress",
            Phase::Finished => "finished",
        };
        f.write_str(label)
    }
}

/// What the presentation layer should show for a session.
///
/// `Unavailable` is reported once a start was attempted over an empty
/// question set; the phase itself stays `NotStarted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    NotStarted,
    Unavailable,
    InProgress,
    Finished,
}

//
// ─── TRANSITION RESULTS ────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    Started,
    /// `start` was called on a session that already left `NotStarted`.
    AlreadyStarted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    NextQuestion { index: usize },
    Finished { score: u32, total: usize },
}

/// Outcome of a scored selection, handed to presentation collaborators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub session_id: SessionId,
    pub question_index: usize,
    pub option: String,
    pub was_correct: bool,
}

/// One scored selection. At most one exists per question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRecord {
    pub question_index: usize,
    pub selected: String,
    pub correct: bool,
    pub answered_at: DateTime<Utc>,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One play-through over a fixed question set.
///
/// All transitions are synchronous. The lock on the current question is
/// derived from the selection, so a question is locked exactly when an option
/// has been selected for it.
#[derive(Clone)]
pub struct Session {
    id: SessionId,
    questions: Arc<QuestionSet>,
    clock: Clock,
    phase: Phase,
    unavailable: bool,
    question_index: usize,
    selected_option: Option<String>,
    score: u32,
    answers: Vec<AnswerRecord>,
    started_at: Option<DateTime<Utc>>,
    completed_at: Option<DateTime<Utc>>,
}

impl Session {
    #[must_use]
    pub fn new(questions: Arc<QuestionSet>, clock: Clock) -> Self {
        Self {
            id: SessionId::new(),
            questions,
            clock,
            phase: Phase::NotStarted,
            unavailable: false,
            question_index: 0,
            selected_option: None,
            score: 0,
            answers: Vec::new(),
            started_at: None,
            completed_at: None,
        }
    }

    /// Move a fresh session into `InProgress` at the first question.
    ///
    /// Calling this on a session that already left `NotStarted` changes
    /// nothing and reports `StartOutcome::AlreadyStarted`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoQuestions` when the question set is empty; the
    /// session then reports `SessionStatus::Unavailable`.
    pub fn start(&mut self) -> Result<StartOutcome, SessionError> {
        if self.phase != Phase::NotStarted {
            return Ok(StartOutcome::AlreadyStarted);
        }
        self.begin()?;
        Ok(StartOutcome::Started)
    }

    /// Play again: discard this play-through and begin a new one.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoQuestions` when the question set is empty.
    pub fn reset(&mut self) -> Result<(), SessionError> {
        if self.questions.is_empty() {
            self.unavailable = true;
            return Err(SessionError::NoQuestions);
        }
        self.id = SessionId::new();
        self.begin()
    }

    fn begin(&mut self) -> Result<(), SessionError> {
        if self.questions.is_empty() {
            self.unavailable = true;
            return Err(SessionError::NoQuestions);
        }
        self.phase = Phase::InProgress;
        self.unavailable = false;
        self.question_index = 0;
        self.selected_option = None;
        self.score = 0;
        self.answers.clear();
        self.started_at = Some(self.clock.now());
        self.completed_at = None;
        Ok(())
    }

    /// Select an answer for the current question and lock it.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotInProgress` outside `InProgress`,
    /// `SessionError::AlreadyAnswered` when the question is locked, and
    /// `SessionError::UnknownOption` when `option` is not offered.
    pub fn select_option(&mut self, option: &str) -> Result<Feedback, SessionError> {
        if self.phase != Phase::InProgress {
            return Err(SessionError::NotInProgress { phase: self.phase });
        }
        if let Some(selected) = &self.selected_option {
            return Err(SessionError::AlreadyAnswered {
                selected: selected.clone(),
            });
        }

        let was_correct = {
            let Some(question) = self.questions.get(self.question_index) else {
                return Err(SessionError::NotInProgress { phase: self.phase });
            };
            if !question.has_option(option) {
                return Err(SessionError::UnknownOption {
                    option: option.to_owned(),
                });
            }
            question.is_correct(option)
        };

        if was_correct {
            self.score += 1;
        }
        self.selected_option = Some(option.to_owned());
        self.answers.push(AnswerRecord {
            question_index: self.question_index,
            selected: option.to_owned(),
            correct: was_correct,
            answered_at: self.clock.now(),
        });

        Ok(Feedback {
            session_id: self.id,
            question_index: self.question_index,
            option: option.to_owned(),
            was_correct,
        })
    }

    /// Move to the next question, or finish after the last one.
    ///
    /// Advancing without a selection is allowed; gating the next-question
    /// affordance on `is_locked` is up to the caller.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotInProgress` outside `InProgress`, which makes
    /// repeated calls after finishing a no-op.
    pub fn advance(&mut self) -> Result<Advance, SessionError> {
        if self.phase != Phase::InProgress {
            return Err(SessionError::NotInProgress { phase: self.phase });
        }

        let last_index = self.questions.last_index().unwrap_or(0);
        if self.question_index < last_index {
            self.question_index += 1;
            self.selected_option = None;
            return Ok(Advance::NextQuestion {
                index: self.question_index,
            });
        }

        self.phase = Phase::Finished;
        self.completed_at = Some(self.clock.now());
        Ok(Advance::Finished {
            score: self.score,
            total: self.questions.len(),
        })
    }

    /// Build the summary of a finished play-through.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotFinished` before the last advance and
    /// `SessionError::Summary` if the recorded timestamps are inconsistent.
    pub fn summary(&self) -> Result<SessionSummary, SessionError> {
        let (Phase::Finished, Some(started_at), Some(completed_at)) =
            (self.phase, self.started_at, self.completed_at)
        else {
            return Err(SessionError::NotFinished { phase: self.phase });
        };
        Ok(SessionSummary::from_answers(
            self.id,
            started_at,
            completed_at,
            self.questions.len(),
            &self.answers,
        )?)
    }

    #[must_use]
    pub fn id(&self) -> SessionId {
        self.id
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn status(&self) -> SessionStatus {
        match self.phase {
            Phase::NotStarted if self.unavailable => SessionStatus::Unavailable,
            Phase::NotStarted => SessionStatus::NotStarted,
            Phase::InProgress => SessionStatus::InProgress,
            Phase::Finished => SessionStatus::Finished,
        }
    }

    #[must_use]
    pub fn questions(&self) -> &QuestionSet {
        &self.questions
    }

    #[must_use]
    pub fn question_index(&self) -> usize {
        self.question_index
    }

    /// The question being answered, only while in progress.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        match self.phase {
            Phase::InProgress => self.questions.get(self.question_index),
            Phase::NotStarted | Phase::Finished => None,
        }
    }

    #[must_use]
    pub fn selected_option(&self) -> Option<&str> {
        self.selected_option.as_deref()
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.selected_option.is_some()
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn answers(&self) -> &[AnswerRecord] {
        &self.answers
    }

    /// Correctness of the selection on the current question, if any.
    #[must_use]
    pub fn current_feedback(&self) -> Option<bool> {
        if self.phase != Phase::InProgress || self.selected_option.is_none() {
            return None;
        }
        self.answers
            .last()
            .filter(|answer| answer.question_index == self.question_index)
            .map(|answer| answer.correct)
    }

    #[must_use]
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("id", &self.id)
            .field("questions_len", &self.questions.len())
            .field("phase", &self.phase)
            .field("unavailable", &self.unavailable)
            .field("question_index", &self.question_index)
            .field("selected_option", &self.selected_option)
            .field("score", &self.score)
            .field("answers_len", &self.answers.len())
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
