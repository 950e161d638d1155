mod error;
mod quiz_vm;
mod screen_vm;
mod session_vm;
mod time_fmt;

pub use error::ViewError;
pub use quiz_vm::{FeedbackGlyph, OptionHighlight, OptionVm, QuizScreenVm, map_quiz_screen};
pub use screen_vm::{
    ResultScreenVm, ScreenVm, StartScreenVm, UnavailableScreenVm, map_result_screen, map_screen,
    map_start_screen,
};
pub use session_vm::{QuizIntent, QuizVm, open_quiz};
pub use time_fmt::format_elapsed;
