use serde::Serialize;
use services::{QuestionView, SessionView};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionHighlight {
    Neutral,
    Correct,
    Incorrect,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackGlyph {
    Correct,
    Incorrect,
}

impl FeedbackGlyph {
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            FeedbackGlyph::Correct => "✔",
            FeedbackGlyph::Incorrect => "✘",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OptionVm {
    pub label: String,
    pub highlight: OptionHighlight,
    pub enabled: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct QuizScreenVm {
    pub progress_label: String,
    pub score_label: String,
    pub prompt: String,
    pub options: Vec<OptionVm>,
    pub feedback: Option<FeedbackGlyph>,
    /// The next-question affordance is only offered once an answer is locked.
    pub show_next: bool,
    pub next_label: String,
}

/// Map the current question of an in-progress session.
///
/// Once an option is selected every option is disabled, the correct one is
/// highlighted and a wrong selection is marked incorrect.
#[must_use]
pub fn map_quiz_screen(view: &SessionView, question: &QuestionView) -> QuizScreenVm {
    let selected = view.selected_option.as_deref();

    let options = question
        .options
        .iter()
        .map(|option| {
            let highlight = match selected {
                None => OptionHighlight::Neutral,
                Some(_) if *option == question.correct_answer => OptionHighlight::Correct,
                Some(choice) if choice == option.as_str() => OptionHighlight::Incorrect,
                Some(_) => OptionHighlight::Neutral,
            };
            OptionVm {
                label: option.clone(),
                highlight,
                enabled: !view.locked,
            }
        })
        .collect();

    let feedback = view.last_feedback.map(|correct| {
        if correct {
            FeedbackGlyph::Correct
        } else {
            FeedbackGlyph::Incorrect
        }
    });

    let number = view.question_number.unwrap_or(1);
    let next_label = if view.is_last_question() {
        "See results"
    } else {
        "Next question"
    };

    QuizScreenVm {
        progress_label: format!("Question {number} of {}", view.total_questions),
        score_label: format!("Score: {}", view.score),
        prompt: question.prompt.clone(),
        options,
        feedback,
        show_next: view.locked,
        next_label: next_label.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::{QuestionDraft, QuestionSet};
    use quiz_core::time::fixed_clock;
    use services::QuizController;
    use std::sync::Arc;

    fn controller() -> QuizController {
        let set = QuestionSet::from_drafts([
            QuestionDraft::new("Capital of Peru?", ["Lima", "Quito", "Bogotá"], "Lima"),
            QuestionDraft::new("Square root of 81?", ["7", "9"], "9"),
        ])
        .unwrap();
        let mut controller = QuizController::new(Arc::new(set), fixed_clock());
        controller.start().unwrap();
        controller
    }

    fn screen(controller: &QuizController) -> QuizScreenVm {
        let view = controller.view();
        let question = view.current_question.clone().unwrap();
        map_quiz_screen(&view, &question)
    }

    fn highlights(vm: &QuizScreenVm) -> Vec<OptionHighlight> {
        vm.options.iter().map(|option| option.highlight).collect()
    }

    #[test]
    fn unanswered_question_is_neutral_and_enabled() {
        let vm = screen(&controller());

        assert_eq!(vm.progress_label, "Question 1 of 2");
        assert_eq!(vm.prompt, "Capital of Peru?");
        assert!(vm.options.iter().all(|option| option.enabled));
        assert!(
            highlights(&vm)
                .iter()
                .all(|h| *h == OptionHighlight::Neutral)
        );
        assert_eq!(vm.feedback, None);
        assert!(!vm.show_next);
    }

    #[test]
    fn wrong_answer_marks_choice_and_reveals_correct() {
        let mut controller = controller();
        controller.select_option("Quito").unwrap();
        let vm = screen(&controller);

        assert_eq!(
            highlights(&vm),
            vec![
                OptionHighlight::Correct,
                OptionHighlight::Incorrect,
                OptionHighlight::Neutral
            ]
        );
        assert!(vm.options.iter().all(|option| !option.enabled));
        assert_eq!(vm.feedback, Some(FeedbackGlyph::Incorrect));
        assert_eq!(vm.feedback.unwrap().symbol(), "✘");
        assert!(vm.show_next);
        assert_eq!(vm.next_label, "Next question");
    }

    #[test]
    fn right_answer_on_last_question() {
        let mut controller = controller();
        controller.select_option("Lima").unwrap();
        controller.advance().unwrap();
        controller.select_option("9").unwrap();
        let vm = screen(&controller);

        assert_eq!(
            highlights(&vm),
            vec![OptionHighlight::Neutral, OptionHighlight::Correct]
        );
        assert_eq!(vm.feedback, Some(FeedbackGlyph::Correct));
        assert_eq!(vm.score_label, "Score: 2");
        assert_eq!(vm.next_label, "See results");
    }
}
