#![forbid(unsafe_code)]

pub mod app_services;
pub mod authoring_service;
pub mod config;
pub mod dashboard_service;
pub mod error;
pub mod quiz;
pub mod signal_player;

pub use gdpt_core::Clock;

pub use app_services::AppServices;
pub use authoring_service::AuthoringService;
pub use config::AppConfig;
pub use dashboard_service::{DashboardService, TopicSummary};
pub use error::{
    AppServicesError, AuthoringError, ConfigError, DashboardError, ErrorKind, QuizError,
    QuizServiceError, SignalError,
};
pub use quiz::{AnswerFeedback, QuizPhase, QuizService, QuizSession, sample_questions};
pub use signal_player::{SignalPlayer, SilentSink, ToneSink};
