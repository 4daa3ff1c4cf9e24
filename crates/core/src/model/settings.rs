use std::collections::HashMap;

use thiserror::Error;

use crate::model::result::DEFAULT_PASS_THRESHOLD;
use crate::model::topic::TopicKey;

/// Questions drawn per attempt when no configuration overrides it.
pub const DEFAULT_SAMPLE_SIZE: u32 = 20;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("sample size must be > 0")]
    InvalidSampleSize,

    #[error("pass threshold must be between 0 and 100, got {0}")]
    InvalidPassThreshold(u8),
}

/// Sampling and scoring knobs for one quiz attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizSettings {
    sample_size: u32,
    pass_threshold: u8,
}

impl QuizSettings {
    /// # Errors
    ///
    /// Returns `SettingsError` if `sample_size` is zero or the threshold exceeds 100.
    pub fn new(sample_size: u32, pass_threshold: u8) -> Result<Self, SettingsError> {
        if sample_size == 0 {
            return Err(SettingsError::InvalidSampleSize);
        }
        if pass_threshold > 100 {
            return Err(SettingsError::InvalidPassThreshold(pass_threshold));
        }
        Ok(Self {
            sample_size,
            pass_threshold,
        })
    }

    #[must_use]
    pub fn sample_size(&self) -> u32 {
        self.sample_size
    }

    #[must_use]
    pub fn pass_threshold(&self) -> u8 {
        self.pass_threshold
    }
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            sample_size: DEFAULT_SAMPLE_SIZE,
            pass_threshold: DEFAULT_PASS_THRESHOLD,
        }
    }
}

/// Default quiz settings plus optional per-topic overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizPolicy {
    default: QuizSettings,
    overrides: HashMap<TopicKey, QuizSettings>,
}

impl QuizPolicy {
    #[must_use]
    pub fn new(default: QuizSettings) -> Self {
        Self {
            default,
            overrides: HashMap::new(),
        }
    }

    #[must_use]
    pub fn with_override(mut self, topic: TopicKey, settings: QuizSettings) -> Self {
        self.overrides.insert(topic, settings);
        self
    }

    #[must_use]
    pub fn default_settings(&self) -> QuizSettings {
        self.default
    }

    #[must_use]
    pub fn for_topic(&self, topic: TopicKey) -> QuizSettings {
        self.overrides.get(&topic).copied().unwrap_or(self.default)
    }
}
