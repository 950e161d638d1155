#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod feedback;
pub mod logging;
pub mod sessions;

pub use quiz_core::Clock;
pub use quiz_core::model::SessionError;

pub use config::QuizConfig;
pub use error::{ConfigError, FeedbackError, QuizServiceError};
pub use feedback::{
    FeedbackEvent, FeedbackPublisher, FeedbackSink, FeedbackSubscriber, NoopFeedbackSink,
    RecordingFeedbackSink, feedback_channel, spawn_feedback_worker,
};
pub use logging::{LogFormat, LoggingConfig};
pub use sessions::{QuestionView, QuizController, QuizLoopService, SessionProgress, SessionView};
