//! Feedback events emitted on every scored selection.
//!
//! The channel keeps only the most recent event: a slow consumer skips
//! intermediate events instead of queueing them, and nothing is replayed.
//! Playback happens on an independent task; its outcome never flows back
//! into the session.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use quiz_core::model::{Feedback, FeedbackSettings, SessionId};
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::error::FeedbackError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedbackEvent {
    pub session_id: SessionId,
    pub question_index: usize,
    pub was_correct: bool,
}

impl From<&Feedback> for FeedbackEvent {
    fn from(feedback: &Feedback) -> Self {
        Self {
            session_id: feedback.session_id,
            question_index: feedback.question_index,
            was_correct: feedback.was_correct,
        }
    }
}

/// Create a connected publisher/subscriber pair.
#[must_use]
pub fn feedback_channel() -> (FeedbackPublisher, FeedbackSubscriber) {
    let (tx, rx) = watch::channel(None);
    (
        FeedbackPublisher { tx: Arc::new(tx) },
        FeedbackSubscriber { rx },
    )
}

/// Sending half, held by the controller. Publishing never blocks or fails.
#[derive(Clone, Debug)]
pub struct FeedbackPublisher {
    tx: Arc<watch::Sender<Option<FeedbackEvent>>>,
}

impl FeedbackPublisher {
    pub fn publish(&self, event: FeedbackEvent) {
        // send_replace stores the value even with no live subscriber.
        self.tx.send_replace(Some(event));
    }

    #[must_use]
    pub fn subscribe(&self) -> FeedbackSubscriber {
        FeedbackSubscriber {
            rx: self.tx.subscribe(),
        }
    }
}

#[derive(Debug)]
pub struct FeedbackSubscriber {
    rx: watch::Receiver<Option<FeedbackEvent>>,
}

impl FeedbackSubscriber {
    /// The most recent event, without marking it seen.
    #[must_use]
    pub fn latest(&self) -> Option<FeedbackEvent> {
        *self.rx.borrow()
    }

    /// Wait for an event newer than the last one returned.
    ///
    /// Returns `None` once every publisher has been dropped and the latest
    /// event has been seen.
    pub async fn next_event(&mut self) -> Option<FeedbackEvent> {
        loop {
            self.rx.changed().await.ok()?;
            if let Some(event) = *self.rx.borrow_and_update() {
                return Some(event);
            }
        }
    }
}

/// Presentation-side output for feedback (sound clip, animation trigger).
#[async_trait]
pub trait FeedbackSink: Send + Sync {
    /// Play the cue for `event`.
    ///
    /// # Errors
    ///
    /// Returns `FeedbackError` when the cue cannot be played. The worker logs
    /// and discards it.
    async fn play(&self, event: FeedbackEvent) -> Result<(), FeedbackError>;
}

/// Sink that discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopFeedbackSink;

#[async_trait]
impl FeedbackSink for NoopFeedbackSink {
    async fn play(&self, _event: FeedbackEvent) -> Result<(), FeedbackError> {
        Ok(())
    }
}

/// Sink that remembers what it was asked to play; optionally fails every call.
#[derive(Debug, Clone, Default)]
pub struct RecordingFeedbackSink {
    played: Arc<Mutex<Vec<FeedbackEvent>>>,
    fail: bool,
}

impl RecordingFeedbackSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn failing() -> Self {
        Self {
            played: Arc::default(),
            fail: true,
        }
    }

    /// Events received so far, including ones that failed to play.
    #[must_use]
    pub fn played(&self) -> Vec<FeedbackEvent> {
        self.played
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl FeedbackSink for RecordingFeedbackSink {
    async fn play(&self, event: FeedbackEvent) -> Result<(), FeedbackError> {
        if let Ok(mut guard) = self.played.lock() {
            guard.push(event);
        }
        if self.fail {
            return Err(FeedbackError::Playback("simulated output failure".into()));
        }
        Ok(())
    }
}

/// Spawn the fire-and-forget playback task.
///
/// The task ends when every `FeedbackPublisher` has been dropped. Sink
/// errors are logged and swallowed. With all cues disabled, events are
/// consumed without playing anything.
pub fn spawn_feedback_worker(
    mut subscriber: FeedbackSubscriber,
    sink: Arc<dyn FeedbackSink>,
    settings: FeedbackSettings,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(event) = subscriber.next_event().await {
            if !settings.any_enabled() {
                tracing::trace!(?event, "feedback cues disabled");
                continue;
            }
            if let Err(err) = sink.play(event).await {
                tracing::warn!(
                    session_id = %event.session_id,
                    question_index = event.question_index,
                    error = %err,
                    "feedback playback failed"
                );
            }
        }
        tracing::debug!("feedback channel closed, worker exiting");
    })
}
