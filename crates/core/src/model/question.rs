use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use crate::model::ids::QuestionId;
use crate::model::topic::TopicKey;

/// Number of answer options every question carries (labels A–D).
pub const OPTION_COUNT: usize = 4;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question text cannot be empty")]
    EmptyQuestion,

    #[error("option {label} cannot be empty")]
    EmptyOption { label: char },

    #[error("correct answer index {index} is out of range (expected 0..{OPTION_COUNT})")]
    CorrectAnswerOutOfRange { index: usize },

    #[error("invalid image url: {raw}")]
    InvalidImageUrl { raw: String },
}

//
// ─── DRAFT ─────────────────────────────────────────────────────────────────────
//

/// Unvalidated question input, as produced by seed data or an authoring form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct QuestionDraft {
    pub topic: Option<TopicKey>,
    pub question: String,
    pub options: [String; OPTION_COUNT],
    pub correct_answer: usize,
    #[serde(default)]
    pub explanation: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl QuestionDraft {
    #[must_use]
    pub fn new(
        topic: TopicKey,
        question: impl Into<String>,
        options: [&str; OPTION_COUNT],
        correct_answer: usize,
    ) -> Self {
        Self {
            topic: Some(topic),
            question: question.into(),
            options: options.map(str::to_owned),
            correct_answer,
            explanation: None,
            image_url: None,
        }
    }

    #[must_use]
    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = Some(explanation.into());
        self
    }

    #[must_use]
    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    /// Trim, normalize and check the draft.
    ///
    /// A draft without a topic falls back to `fallback_topic`, which lets an
    /// authoring form preselect the topic it was opened from.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` for blank text/options, an out-of-range answer
    /// index, or an unparseable image url.
    pub fn validate(self, fallback_topic: TopicKey) -> Result<ValidatedQuestion, QuestionError> {
        let question = self.question.trim().to_owned();
        if question.is_empty() {
            return Err(QuestionError::EmptyQuestion);
        }

        let options = self.options.map(|option| option.trim().to_owned());
        if let Some(position) = options.iter().position(String::is_empty) {
            return Err(QuestionError::EmptyOption {
                label: option_label(position),
            });
        }

        if self.correct_answer >= OPTION_COUNT {
            return Err(QuestionError::CorrectAnswerOutOfRange {
                index: self.correct_answer,
            });
        }

        let explanation = normalize_optional(self.explanation);
        let image_url = normalize_optional(self.image_url);
        if let Some(raw) = image_url.as_deref() {
            if !raw.starts_with('/') && Url::parse(raw).is_err() {
                return Err(QuestionError::InvalidImageUrl { raw: raw.to_owned() });
            }
        }

        Ok(ValidatedQuestion {
            topic: self.topic.unwrap_or(fallback_topic),
            question,
            options,
            correct_answer: self.correct_answer,
            explanation,
            image_url,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedQuestion {
    topic: TopicKey,
    question: String,
    options: [String; OPTION_COUNT],
    correct_answer: usize,
    explanation: Option<String>,
    image_url: Option<String>,
}

impl ValidatedQuestion {
    #[must_use]
    pub fn assign_id(self, id: QuestionId) -> Question {
        Question {
            id,
            topic: self.topic,
            question: self.question,
            options: self.options,
            correct_answer: self.correct_answer,
            explanation: self.explanation,
            image_url: self.image_url,
        }
    }
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// An immutable multiple-choice question.
///
/// `correct_answer` is always a valid index into `options`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    id: QuestionId,
    topic: TopicKey,
    question: String,
    options: [String; OPTION_COUNT],
    correct_answer: usize,
    explanation: Option<String>,
    image_url: Option<String>,
}

impl Question {
    #[must_use]
    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    #[must_use]
    pub fn topic(&self) -> TopicKey {
        self.topic
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.question
    }

    #[must_use]
    pub fn options(&self) -> &[String; OPTION_COUNT] {
        &self.options
    }

    #[must_use]
    pub fn correct_answer(&self) -> usize {
        self.correct_answer
    }

    #[must_use]
    pub fn explanation(&self) -> Option<&str> {
        self.explanation.as_deref()
    }

    #[must_use]
    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    #[must_use]
    pub fn is_correct(&self, selected: usize) -> bool {
        selected == self.correct_answer
    }
}

/// Letter label shown next to an option (`0 -> 'A'`).
#[must_use]
pub fn option_label(index: usize) -> char {
    u8::try_from(index)
        .ok()
        .filter(|i| usize::from(*i) < OPTION_COUNT)
        .map_or('?', |i| char::from(b'A' + i))
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
