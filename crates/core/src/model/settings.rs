use std::path::PathBuf;

use thiserror::Error;

/// Where the question list is read from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum QuestionSource {
    /// The bank bundled with the application.
    #[default]
    Embedded,
    /// A JSON file on disk.
    File(PathBuf),
}

/// Which presentation cues accompany a selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeedbackSettings {
    pub sound_enabled: bool,
    pub animation_enabled: bool,
}

impl Default for FeedbackSettings {
    fn default() -> Self {
        Self {
            sound_enabled: true,
            animation_enabled: true,
        }
    }
}

impl FeedbackSettings {
    /// True when at least one cue should be produced.
    #[must_use]
    pub fn any_enabled(&self) -> bool {
        self.sound_enabled || self.animation_enabled
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuizSettings {
    question_source: QuestionSource,
    feedback: FeedbackSettings,
}

#[derive(Clone, Debug, Default)]
pub struct QuizSettingsDraft {
    pub questions_path: Option<String>,
    pub sound_enabled: Option<bool>,
    pub animation_enabled: Option<bool>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("question file path cannot be blank")]
    EmptyQuestionPath,
}

impl QuizSettingsDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and normalize the draft into settings.
    ///
    /// A missing path selects the embedded question bank.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::EmptyQuestionPath` if a path is present but blank.
    pub fn validate(self) -> Result<QuizSettings, SettingsError> {
        let question_source = match self.questions_path {
            None => QuestionSource::Embedded,
            Some(raw) => {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    return Err(SettingsError::EmptyQuestionPath);
                }
                QuestionSource::File(PathBuf::from(trimmed))
            }
        };

        let defaults = FeedbackSettings::default();
        Ok(QuizSettings {
            question_source,
            feedback: FeedbackSettings {
                sound_enabled: self.sound_enabled.unwrap_or(defaults.sound_enabled),
                animation_enabled: self
                    .animation_enabled
                    .unwrap_or(defaults.animation_enabled),
            },
        })
    }
}

impl QuizSettings {
    #[must_use]
    pub fn new(question_source: QuestionSource, feedback: FeedbackSettings) -> Self {
        Self {
            question_source,
            feedback,
        }
    }

    #[must_use]
    pub fn question_source(&self) -> &QuestionSource {
        &self.question_source
    }

    #[must_use]
    pub fn feedback(&self) -> FeedbackSettings {
        self.feedback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_draft_uses_embedded_bank_and_all_cues() {
        let settings = QuizSettingsDraft::new().validate().unwrap();
        assert_eq!(settings.question_source(), &QuestionSource::Embedded);
        assert!(settings.feedback().sound_enabled);
        assert!(settings.feedback().animation_enabled);
    }

    #[test]
    fn path_is_trimmed() {
        let settings = QuizSettingsDraft {
            questions_path: Some("  data/questions.json ".into()),
            sound_enabled: Some(false),
            ..QuizSettingsDraft::default()
        }
        .validate()
        .unwrap();

        assert_eq!(
            settings.question_source(),
            &QuestionSource::File(PathBuf::from("data/questions.json"))
        );
        assert!(!settings.feedback().sound_enabled);
        assert!(settings.feedback().any_enabled());
    }

    #[test]
    fn blank_path_is_rejected() {
        let err = QuizSettingsDraft {
            questions_path: Some("   ".into()),
            ..QuizSettingsDraft::default()
        }
        .validate()
        .unwrap_err();
        assert_eq!(err, SettingsError::EmptyQuestionPath);
    }
}
