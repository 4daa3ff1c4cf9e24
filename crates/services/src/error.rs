//! Shared error types for the services crate.

use std::path::PathBuf;

use thiserror::Error;

use gdpt_core::model::{QuestionError, SettingsError, TopicParseError};
use gdpt_core::signal::ToneSettingsError;
use storage::repository::StorageError;

/// Coarse classification used by the UI to decide how to surface an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller passed a value outside the accepted range.
    InvalidArgument,
    /// The operation is not allowed in the current phase.
    InvalidState,
}

/// Misuse of a `QuizSession`. The session is left unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("quiz has no questions")]
    NoQuestions,
    #[error("current question is already answered")]
    AlreadyAnswered,
    #[error("current question has not been answered yet")]
    NotAnswered,
    #[error("quiz is already finished")]
    Finished,
    #[error("answer index {index} is out of range")]
    AnswerOutOfRange { index: usize },
}

impl QuizError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            QuizError::AnswerOutOfRange { .. } => ErrorKind::InvalidArgument,
            QuizError::NoQuestions
            | QuizError::AlreadyAnswered
            | QuizError::NotAnswered
            | QuizError::Finished => ErrorKind::InvalidState,
        }
    }
}

/// Errors emitted by `QuizService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizServiceError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `SignalPlayer`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SignalError {
    #[error("a signal is already playing")]
    Busy,
    #[error("nothing to play")]
    EmptySequence,
    #[error("audio output unavailable: {0}")]
    Unavailable(String),
}

/// Errors emitted by `DashboardService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DashboardError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `AuthoringService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AuthoringError {
    #[error("question has no topic")]
    MissingTopic,
    #[error(transparent)]
    Invalid(#[from] QuestionError),
    #[error(transparent)]
    Storage(StorageError),
}

impl From<StorageError> for AuthoringError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Validation(inner) => AuthoringError::Invalid(inner),
            other => AuthoringError::Storage(other),
        }
    }
}

/// Errors emitted while loading `AppConfig`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error(transparent)]
    Topic(#[from] TopicParseError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Tone(#[from] ToneSettingsError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
