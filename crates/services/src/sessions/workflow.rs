use std::sync::Arc;

use quiz_core::Clock;
use quiz_core::model::{QuestionSet, QuizSettings};
use storage::{QuestionRepository, repository_for};

use super::controller::QuizController;
use crate::error::QuizServiceError;
use crate::feedback::FeedbackPublisher;

/// Orchestrates question loading and controller construction.
#[derive(Clone)]
pub struct QuizLoopService {
    clock: Clock,
    questions: Arc<dyn QuestionRepository>,
    feedback: Option<FeedbackPublisher>,
}

impl QuizLoopService {
    #[must_use]
    pub fn new(clock: Clock, questions: Arc<dyn QuestionRepository>) -> Self {
        Self {
            clock,
            questions,
            feedback: None,
        }
    }

    /// Build a service reading from the source named in `settings`.
    #[must_use]
    pub fn from_settings(clock: Clock, settings: &QuizSettings) -> Self {
        Self::new(clock, repository_for(settings.question_source()))
    }

    /// Attach a feedback publisher to every controller this service opens.
    #[must_use]
    pub fn with_feedback(mut self, publisher: FeedbackPublisher) -> Self {
        self.feedback = Some(publisher);
        self
    }

    /// Load the question list.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::Storage` if the source cannot be read or holds
    /// malformed questions.
    pub async fn load_questions(&self) -> Result<Arc<QuestionSet>, QuizServiceError> {
        let set = self.questions.load_questions().await.inspect_err(|err| {
            tracing::error!(error = %err, "failed to load questions");
        })?;
        tracing::info!(count = set.len(), "question set loaded");
        Ok(Arc::new(set))
    }

    /// Load the questions and return a controller on the start screen.
    ///
    /// An empty question list still yields a controller; starting it reports
    /// the quiz as unavailable.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::Storage` for load failures.
    pub async fn open_session(&self) -> Result<QuizController, QuizServiceError> {
        let questions = self.load_questions().await?;
        let controller = QuizController::new(questions, self.clock);
        Ok(match &self.feedback {
            Some(publisher) => controller.with_feedback(publisher.clone()),
            None => controller,
        })
    }

    /// Open a session and start it immediately.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::Storage` for load failures and
    /// `QuizServiceError::Session` when there are no questions.
    pub async fn start_session(&self) -> Result<QuizController, QuizServiceError> {
        let mut controller = self.open_session().await?;
        controller.start()?;
        Ok(controller)
    }
}
