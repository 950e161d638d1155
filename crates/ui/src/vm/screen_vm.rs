use quiz_core::model::{SessionStatus, SessionSummary};
use serde::Serialize;
use services::SessionView;

use crate::vm::quiz_vm::{QuizScreenVm, map_quiz_screen};
use crate::vm::time_fmt::format_elapsed;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StartScreenVm {
    pub title: String,
    pub subtitle: String,
    pub question_count_label: String,
    pub start_label: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResultScreenVm {
    pub title: String,
    pub score: u32,
    pub total: usize,
    pub score_line: String,
    pub percentage_label: Option<String>,
    pub elapsed_label: Option<String>,
    pub play_again_label: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct UnavailableScreenVm {
    pub message: String,
}

impl Default for UnavailableScreenVm {
    fn default() -> Self {
        Self {
            message: "No questions found. Check your question file.".to_string(),
        }
    }
}

/// The screen a host should render for the current session state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum ScreenVm {
    Start(StartScreenVm),
    Quiz(QuizScreenVm),
    Result(ResultScreenVm),
    Unavailable(UnavailableScreenVm),
}

/// Pick and populate the screen for `view`.
///
/// `summary` only enriches the result screen.
#[must_use]
pub fn map_screen(view: &SessionView, summary: Option<&SessionSummary>) -> ScreenVm {
    match view.status {
        SessionStatus::NotStarted => ScreenVm::Start(map_start_screen(view.total_questions)),
        SessionStatus::Unavailable => ScreenVm::Unavailable(UnavailableScreenVm::default()),
        SessionStatus::InProgress => match &view.current_question {
            Some(question) => ScreenVm::Quiz(map_quiz_screen(view, question)),
            None => ScreenVm::Unavailable(UnavailableScreenVm::default()),
        },
        SessionStatus::Finished => ScreenVm::Result(map_result_screen(view, summary)),
    }
}

#[must_use]
pub fn map_start_screen(total_questions: usize) -> StartScreenVm {
    let question_count_label = match total_questions {
        1 => "1 question".to_string(),
        n => format!("{n} questions"),
    };
    StartScreenVm {
        title: "Quiz".to_string(),
        subtitle: "Test your knowledge!".to_string(),
        question_count_label,
        start_label: "Start game".to_string(),
    }
}

#[must_use]
pub fn map_result_screen(view: &SessionView, summary: Option<&SessionSummary>) -> ResultScreenVm {
    ResultScreenVm {
        title: "Quiz finished!".to_string(),
        score: view.score,
        total: view.total_questions,
        score_line: format!(
            "You got {} of {} questions right!",
            view.score, view.total_questions
        ),
        percentage_label: summary.map(|s| format!("{}%", s.percentage())),
        elapsed_label: summary.map(|s| format_elapsed(s.started_at(), s.completed_at())),
        play_again_label: "Play again".to_string(),
    }
}
