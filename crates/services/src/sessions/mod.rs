mod controller;
mod progress;
mod view;
mod workflow;

// Public API of the session subsystem.
pub use controller::QuizController;
pub use progress::SessionProgress;
pub use view::{QuestionView, SessionView};
pub use workflow::QuizLoopService;
