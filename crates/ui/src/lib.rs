#![forbid(unsafe_code)]

pub mod cue;
pub mod vm;

pub use cue::{AnimationVariant, CueFeedbackSink, CuePlayer, FeedbackCue, SoundClip, cue_for};
pub use vm::{QuizIntent, QuizVm, ScreenVm, ViewError, open_quiz};
