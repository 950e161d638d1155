use std::fmt;
use std::sync::Arc;

use quiz_core::Clock;
use quiz_core::model::{
    Advance, Feedback, Phase, QuestionSet, Session, SessionError, SessionSummary, StartOutcome,
};

use super::progress::SessionProgress;
use super::view::SessionView;
use crate::feedback::{FeedbackEvent, FeedbackPublisher};

//
// ─── CONTROLLER ────────────────────────────────────────────────────────────────
//

/// Owns the quiz session and applies start/select/advance/reset transitions.
///
/// Presentation code reads `view()` and calls the transitions; it holds no
/// session state of its own. Each accepted selection is also published on the
/// feedback channel, if one is attached.
pub struct QuizController {
    session: Session,
    feedback: Option<FeedbackPublisher>,
}

impl QuizController {
    #[must_use]
    pub fn new(questions: Arc<QuestionSet>, clock: Clock) -> Self {
        Self {
            session: Session::new(questions, clock),
            feedback: None,
        }
    }

    #[must_use]
    pub fn with_feedback(mut self, publisher: FeedbackPublisher) -> Self {
        self.feedback = Some(publisher);
        self
    }

    /// # Errors
    ///
    /// Returns `SessionError::NoQuestions` when there is nothing to play.
    pub fn start(&mut self) -> Result<StartOutcome, SessionError> {
        match self.session.start() {
            Ok(StartOutcome::Started) => {
                tracing::info!(
                    session_id = %self.session.id(),
                    total = self.session.total_questions(),
                    "quiz started"
                );
                Ok(StartOutcome::Started)
            }
            Ok(StartOutcome::AlreadyStarted) => {
                tracing::debug!(phase = %self.session.phase(), "start ignored, session already started");
                Ok(StartOutcome::AlreadyStarted)
            }
            Err(err) => {
                tracing::warn!(error = %err, "quiz unavailable");
                Err(err)
            }
        }
    }

    /// # Errors
    ///
    /// Returns the rejection from `Session::select_option`; state is unchanged.
    pub fn select_option(&mut self, option: &str) -> Result<Feedback, SessionError> {
        let feedback = self.session.select_option(option).inspect_err(|err| {
            tracing::warn!(
                session_id = %self.session.id(),
                question_index = self.session.question_index(),
                error = %err,
                "selection rejected"
            );
        })?;

        tracing::debug!(
            session_id = %feedback.session_id,
            question_index = feedback.question_index,
            correct = feedback.was_correct,
            score = self.session.score(),
            "option selected"
        );
        if let Some(publisher) = &self.feedback {
            publisher.publish(FeedbackEvent::from(&feedback));
        }
        Ok(feedback)
    }

    /// # Errors
    ///
    /// Returns `SessionError::NotInProgress` outside a running quiz.
    pub fn advance(&mut self) -> Result<Advance, SessionError> {
        if self.session.phase() == Phase::InProgress && !self.session.is_locked() {
            tracing::debug!(
                question_index = self.session.question_index(),
                "advancing without a selection"
            );
        }

        let outcome = self.session.advance().inspect_err(|err| {
            tracing::warn!(error = %err, "advance rejected");
        })?;

        match outcome {
            Advance::NextQuestion { index } => {
                tracing::debug!(session_id = %self.session.id(), question_index = index, "next question");
            }
            Advance::Finished { score, total } => {
                tracing::info!(session_id = %self.session.id(), score, total, "quiz finished");
            }
        }
        Ok(outcome)
    }

    /// Play again.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoQuestions` when there is nothing to play.
    pub fn reset(&mut self) -> Result<(), SessionError> {
        let previous = self.session.id();
        self.session.reset().inspect_err(|err| {
            tracing::warn!(error = %err, "reset rejected");
        })?;
        tracing::info!(
            previous_session_id = %previous,
            session_id = %self.session.id(),
            "quiz restarted"
        );
        Ok(())
    }

    #[must_use]
    pub fn view(&self) -> SessionView {
        SessionView::from_session(&self.session)
    }

    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        SessionProgress::from_session(&self.session)
    }

    /// # Errors
    ///
    /// Returns `SessionError::NotFinished` before the quiz ends.
    pub fn summary(&self) -> Result<SessionSummary, SessionError> {
        self.session.summary()
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }
}

impl fmt::Debug for QuizController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizController")
            .field("session", &self.session)
            .field("feedback_attached", &self.feedback.is_some())
            .finish()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
