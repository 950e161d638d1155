//! Configuration for quiz hosts.
//!
//! Read from a TOML file, then overridden by `QUIZ_*` environment variables:
//!
//! ```toml
//! [questions]
//! path = "questions.json"   # omit to use the embedded bank
//!
//! [feedback]
//! sound = true
//! animation = true
//!
//! [logging]
//! format = "text"           # text | json | pretty
//! level = "info"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use quiz_core::model::{QuizSettings, QuizSettingsDraft};

use crate::error::ConfigError;
use crate::logging::{LogFormat, LoggingConfig};

/// Default file name looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "quiz.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizConfig {
    pub questions: QuestionsConfig,
    pub feedback: FeedbackConfig,
    pub logging: LoggingSection,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuestionsConfig {
    pub path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedbackConfig {
    pub sound: bool,
    pub animation: bool,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            sound: true,
            animation: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    pub format: String,
    pub level: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            format: LogFormat::Text.to_string(),
            level: "info".to_string(),
        }
    }
}

impl QuizConfig {
    /// Load from `QUIZ_CONFIG`, else `quiz.toml` when present, else defaults,
    /// then apply environment overrides.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or parsed, or an
    /// override holds an invalid value.
    pub fn load() -> Result<Self, ConfigError> {
        let base = match resolve_config_path() {
            Some(path) => Self::load_from_path(&path)?,
            None => Self::default(),
        };
        base.apply_overrides_from(|key| std::env::var(key).ok())
    }

    /// Load from a specific path without environment overrides.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Read` or `ConfigError::Parse`.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded quiz config");
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed TOML.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    /// Apply `QUIZ_QUESTIONS_PATH`, `QUIZ_FEEDBACK_SOUND`,
    /// `QUIZ_FEEDBACK_ANIMATION`, `QUIZ_LOG_FORMAT` and `QUIZ_LOG_LEVEL`
    /// looked up through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for unparseable booleans or formats.
    pub fn apply_overrides_from(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(path) = lookup("QUIZ_QUESTIONS_PATH") {
            self.questions.path = Some(path);
        }
        if let Some(raw) = lookup("QUIZ_FEEDBACK_SOUND") {
            self.feedback.sound = parse_bool("QUIZ_FEEDBACK_SOUND", &raw)?;
        }
        if let Some(raw) = lookup("QUIZ_FEEDBACK_ANIMATION") {
            self.feedback.animation = parse_bool("QUIZ_FEEDBACK_ANIMATION", &raw)?;
        }
        if let Some(format) = lookup("QUIZ_LOG_FORMAT") {
            self.logging.format = format;
        }
        if let Some(level) = lookup("QUIZ_LOG_LEVEL") {
            self.logging.level = level;
        }
        Ok(self)
    }

    /// Validate into domain settings.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Settings` if the question path is blank.
    pub fn settings(&self) -> Result<QuizSettings, ConfigError> {
        Ok(QuizSettingsDraft {
            questions_path: self.questions.path.clone(),
            sound_enabled: Some(self.feedback.sound),
            animation_enabled: Some(self.feedback.animation),
        }
        .validate()?)
    }

    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for an unknown log format.
    pub fn logging_config(&self) -> Result<LoggingConfig, ConfigError> {
        let format = self
            .logging
            .format
            .parse::<LogFormat>()
            .map_err(|_| ConfigError::InvalidValue {
                key: "logging.format",
                value: self.logging.format.clone(),
            })?;
        Ok(LoggingConfig::new(format, self.logging.level.clone()))
    }
}

/// Resolve the config file: `QUIZ_CONFIG` if set, else `quiz.toml` if it exists.
#[must_use]
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("QUIZ_CONFIG") {
        return Some(PathBuf::from(path));
    }
    let local = PathBuf::from(DEFAULT_CONFIG_FILE);
    local.is_file().then_some(local)
}

fn parse_bool(key: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key,
            value: raw.to_string(),
        }),
    }
}
