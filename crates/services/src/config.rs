//! Loading app configuration from TOML.
//!
//! Every key is optional; a missing file section falls back to defaults.
//!
//! ```toml
//! [quiz]
//! sample_size = 20
//! pass_threshold = 50
//!
//! [topics.first_aid]
//! pass_threshold = 80
//!
//! [tone]
//! unit_ms = 80
//! frequency_hz = 600
//! ```

use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use tracing::info;

use gdpt_core::model::{QuizPolicy, QuizSettings, TopicKey};
use gdpt_core::signal::ToneSettings;

use crate::error::ConfigError;

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawConfig {
    quiz: RawQuiz,
    topics: HashMap<String, RawQuiz>,
    tone: RawTone,
}

#[derive(Debug, Default, Clone, Copy, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawQuiz {
    sample_size: Option<u32>,
    pass_threshold: Option<u8>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawTone {
    unit_ms: Option<u64>,
    frequency_hz: Option<u32>,
}

impl RawQuiz {
    fn resolve(self, base: QuizSettings) -> Result<QuizSettings, ConfigError> {
        Ok(QuizSettings::new(
            self.sample_size.unwrap_or(base.sample_size()),
            self.pass_threshold.unwrap_or(base.pass_threshold()),
        )?)
    }
}

/// Validated runtime configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub quiz: QuizPolicy,
    pub tone: ToneSettings,
}

impl AppConfig {
    /// Parse and validate a TOML document.
    ///
    /// Per-topic sections inherit unset keys from `[quiz]`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for malformed TOML, unknown topic keys, or
    /// out-of-range values.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let parsed: RawConfig = toml::from_str(raw)?;

        let default = parsed.quiz.resolve(QuizSettings::default())?;
        let mut policy = QuizPolicy::new(default);
        for (key, overrides) in parsed.topics {
            let topic: TopicKey = key.parse()?;
            policy = policy.with_override(topic, overrides.resolve(default)?);
        }

        let base_tone = ToneSettings::default();
        let tone = ToneSettings::new(
            parsed
                .tone
                .unit_ms
                .map_or(base_tone.unit(), Duration::from_millis),
            parsed.tone.frequency_hz.unwrap_or(base_tone.frequency_hz()),
        )?;

        Ok(Self { quiz: policy, tone })
    }

    /// Read and parse the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Io` if the file cannot be read, otherwise as
    /// [`from_toml_str`](Self::from_toml_str).
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&raw)?;
        info!(path = %path.display(), "loaded config (TOML)");
        Ok(config)
    }
}
