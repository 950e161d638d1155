use services::{QuizController, QuizLoopService};

use crate::vm::error::ViewError;
use crate::vm::screen_vm::{ScreenVm, map_screen};

/// What the player asked for on the current screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Start,
    Select(String),
    Next,
    PlayAgain,
}

/// Screen-level wrapper over a `QuizController`.
///
/// Every intent is applied to the controller and the resulting screen is
/// re-derived from its view; no presentation state is cached here.
pub struct QuizVm {
    controller: QuizController,
}

impl QuizVm {
    #[must_use]
    pub fn new(controller: QuizController) -> Self {
        Self { controller }
    }

    #[must_use]
    pub fn screen(&self) -> ScreenVm {
        let summary = self.controller.summary().ok();
        map_screen(&self.controller.view(), summary.as_ref())
    }

    /// Apply `intent` and return the screen to render next.
    ///
    /// # Errors
    ///
    /// Returns `ViewError::NoQuestions` when starting an empty quiz and
    /// `ViewError::Rejected` for intents the current screen does not accept.
    /// The session is unchanged in both cases; `screen()` still reflects it.
    pub fn dispatch(&mut self, intent: QuizIntent) -> Result<ScreenVm, ViewError> {
        let result = match &intent {
            QuizIntent::Start => self.controller.start().map(|_| ()),
            QuizIntent::Select(option) => self.controller.select_option(option).map(|_| ()),
            QuizIntent::Next => self.controller.advance().map(|_| ()),
            QuizIntent::PlayAgain => self.controller.reset(),
        };
        if let Err(err) = result {
            tracing::debug!(?intent, error = %err, "intent not applied");
            return Err(ViewError::from(&err));
        }
        Ok(self.screen())
    }

    #[must_use]
    pub fn controller(&self) -> &QuizController {
        &self.controller
    }
}

/// Load the questions and land on the start screen.
///
/// # Errors
///
/// Returns `ViewError::LoadFailed` when the question source is unreadable.
pub async fn open_quiz(quiz_loop: &QuizLoopService) -> Result<QuizVm, ViewError> {
    let controller = quiz_loop
        .open_session()
        .await
        .map_err(|err| ViewError::from(&err))?;
    Ok(QuizVm::new(controller))
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::time::fixed_clock;
    use std::sync::Arc;
    use storage::{InMemoryRepository, QuestionRecord};

    fn quiz_loop(records: Vec<QuestionRecord>) -> QuizLoopService {
        QuizLoopService::new(
            fixed_clock(),
            Arc::new(InMemoryRepository::with_records(records)),
        )
    }

    fn two_questions() -> Vec<QuestionRecord> {
        vec![
            QuestionRecord::new("Largest planet?", ["Jupiter", "Mars"], "Jupiter"),
            QuestionRecord::new("H2O is?", ["Water", "Salt"], "Water"),
        ]
    }

    #[tokio::test]
    async fn walks_every_screen() {
        let mut vm = open_quiz(&quiz_loop(two_questions())).await.unwrap();
        assert!(matches!(vm.screen(), ScreenVm::Start(_)));

        let ScreenVm::Quiz(quiz) = vm.dispatch(QuizIntent::Start).unwrap() else {
            panic!("expected quiz screen");
        };
        assert!(!quiz.show_next);

        let ScreenVm::Quiz(quiz) = vm.dispatch(QuizIntent::Select("Mars".into())).unwrap() else {
            panic!("expected quiz screen");
        };
        assert!(quiz.show_next);

        vm.dispatch(QuizIntent::Next).unwrap();
        vm.dispatch(QuizIntent::Select("Water".into())).unwrap();
        let ScreenVm::Result(result) = vm.dispatch(QuizIntent::Next).unwrap() else {
            panic!("expected result screen");
        };
        assert_eq!(result.score_line, "You got 1 of 2 questions right!");
        assert_eq!(result.percentage_label.as_deref(), Some("50%"));

        let ScreenVm::Quiz(quiz) = vm.dispatch(QuizIntent::PlayAgain).unwrap() else {
            panic!("expected quiz screen");
        };
        assert_eq!(quiz.progress_label, "Question 1 of 2");
        assert_eq!(quiz.score_label, "Score: 0");
    }

    #[tokio::test]
    async fn second_selection_is_rejected() {
        let mut vm = open_quiz(&quiz_loop(two_questions())).await.unwrap();
        vm.dispatch(QuizIntent::Start).unwrap();
        vm.dispatch(QuizIntent::Select("Jupiter".into())).unwrap();

        assert_eq!(
            vm.dispatch(QuizIntent::Select("Mars".into())).unwrap_err(),
            ViewError::Rejected
        );
        assert_eq!(vm.controller().view().score, 1);
    }

    #[tokio::test]
    async fn empty_quiz_lands_on_unavailable() {
        let mut vm = open_quiz(&quiz_loop(Vec::new())).await.unwrap();

        let err = vm.dispatch(QuizIntent::Start).unwrap_err();
        assert_eq!(err, ViewError::NoQuestions);
        assert!(matches!(vm.screen(), ScreenVm::Unavailable(_)));
    }

    #[tokio::test]
    async fn malformed_source_fails_to_open() {
        let records = vec![QuestionRecord::new("Broken?", ["a"], "z")];
        let err = open_quiz(&quiz_loop(records)).await.err().unwrap();
        assert_eq!(err, ViewError::LoadFailed);
        assert_eq!(err.message(), "Could not load the questions.");
    }
}
