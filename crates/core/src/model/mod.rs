mod ids;
mod question;
mod question_set;
mod session;
mod settings;
mod summary;

pub use ids::{ParseIdError, SessionId};

pub use question::{Question, QuestionDraft, QuestionError};
pub use question_set::{QuestionSet, QuestionSetError};
pub use session::{
    Advance, AnswerRecord, Feedback, Phase, Session, SessionError, SessionStatus, StartOutcome,
};
pub use settings::{FeedbackSettings, QuestionSource, QuizSettings, QuizSettingsDraft, SettingsError};
pub use summary::{SessionSummary, SummaryError};
