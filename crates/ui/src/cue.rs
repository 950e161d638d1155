//! Sound and animation cues derived from feedback events.

use async_trait::async_trait;
use quiz_core::model::FeedbackSettings;
use serde::Serialize;
use services::{FeedbackError, FeedbackEvent, FeedbackSink};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimationVariant {
    Success,
    Failure,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SoundClip {
    Correct,
    Incorrect,
}

impl SoundClip {
    #[must_use]
    pub fn file_name(self) -> &'static str {
        match self {
            SoundClip::Correct => "correct.mp3",
            SoundClip::Incorrect => "incorrect.mp3",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FeedbackCue {
    pub animation: Option<AnimationVariant>,
    pub sound: Option<SoundClip>,
}

impl FeedbackCue {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.animation.is_none() && self.sound.is_none()
    }
}

#[must_use]
pub fn cue_for(event: &FeedbackEvent, settings: FeedbackSettings) -> FeedbackCue {
    let (animation, sound) = if event.was_correct {
        (AnimationVariant::Success, SoundClip::Correct)
    } else {
        (AnimationVariant::Failure, SoundClip::Incorrect)
    };
    FeedbackCue {
        animation: settings.animation_enabled.then_some(animation),
        sound: settings.sound_enabled.then_some(sound),
    }
}

/// Host-provided output for cues (audio element, canvas animation, ...).
#[async_trait]
pub trait CuePlayer: Send + Sync {
    /// # Errors
    ///
    /// Returns `FeedbackError::Playback` when the host cannot play the cue.
    async fn play_cue(&self, cue: FeedbackCue) -> Result<(), FeedbackError>;
}

/// Adapts a `CuePlayer` into the feedback worker's sink.
#[derive(Debug, Clone)]
pub struct CueFeedbackSink<P> {
    player: P,
    settings: FeedbackSettings,
}

impl<P: CuePlayer> CueFeedbackSink<P> {
    #[must_use]
    pub fn new(player: P, settings: FeedbackSettings) -> Self {
        Self { player, settings }
    }

    #[must_use]
    pub fn player(&self) -> &P {
        &self.player
    }
}

#[async_trait]
impl<P: CuePlayer> FeedbackSink for CueFeedbackSink<P> {
    async fn play(&self, event: FeedbackEvent) -> Result<(), FeedbackError> {
        let cue = cue_for(&event, self.settings);
        if cue.is_empty() {
            return Ok(());
        }
        tracing::trace!(?cue, question_index = event.question_index, "playing feedback cue");
        self.player.play_cue(cue).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::SessionId;
    use services::{feedback_channel, spawn_feedback_worker};
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct CapturingPlayer {
        cues: Arc<Mutex<Vec<FeedbackCue>>>,
    }

    #[async_trait]
    impl CuePlayer for CapturingPlayer {
        async fn play_cue(&self, cue: FeedbackCue) -> Result<(), FeedbackError> {
            self.cues.lock().unwrap().push(cue);
            Ok(())
        }
    }

    fn event(was_correct: bool) -> FeedbackEvent {
        FeedbackEvent {
            session_id: SessionId::new(),
            question_index: 0,
            was_correct,
        }
    }

    #[test]
    fn correct_and_incorrect_cues() {
        let settings = FeedbackSettings::default();

        let cue = cue_for(&event(true), settings);
        assert_eq!(cue.animation, Some(AnimationVariant::Success));
        assert_eq!(cue.sound.map(SoundClip::file_name), Some("correct.mp3"));

        let cue = cue_for(&event(false), settings);
        assert_eq!(cue.animation, Some(AnimationVariant::Failure));
        assert_eq!(cue.sound, Some(SoundClip::Incorrect));
    }

    #[test]
    fn settings_mute_individual_cues() {
        let cue = cue_for(
            &event(true),
            FeedbackSettings {
                sound_enabled: false,
                animation_enabled: true,
            },
        );
        assert_eq!(cue.sound, None);
        assert_eq!(cue.animation, Some(AnimationVariant::Success));
    }

    #[tokio::test]
    async fn worker_drives_the_player() {
        let (publisher, subscriber) = feedback_channel();
        let player = CapturingPlayer::default();
        let sink = CueFeedbackSink::new(player.clone(), FeedbackSettings::default());
        let handle = spawn_feedback_worker(subscriber, Arc::new(sink), FeedbackSettings::default());

        publisher.publish(event(false));
        drop(publisher);
        handle.await.unwrap();

        let cues = player.cues.lock().unwrap().clone();
        assert_eq!(cues.len(), 1);
        assert_eq!(cues[0].animation, Some(AnimationVariant::Failure));
    }

    #[tokio::test]
    async fn muted_sink_skips_the_player() {
        let player = CapturingPlayer::default();
        let sink = CueFeedbackSink::new(
            player.clone(),
            FeedbackSettings {
                sound_enabled: false,
                animation_enabled: false,
            },
        );

        sink.play(event(true)).await.unwrap();
        assert!(player.cues.lock().unwrap().is_empty());
    }
}
