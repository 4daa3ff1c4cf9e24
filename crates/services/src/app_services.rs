use std::sync::Arc;

use storage::repository::Storage;

use crate::Clock;
use crate::authoring_service::AuthoringService;
use crate::config::AppConfig;
use crate::dashboard_service::DashboardService;
use crate::error::AppServicesError;
use crate::quiz::QuizService;
use crate::signal_player::{SignalPlayer, ToneSink};

/// Assembles app-facing services over one shared question pool.
#[derive(Clone)]
pub struct AppServices {
    quiz: Arc<QuizService>,
    dashboard: Arc<DashboardService>,
    authoring: Arc<AuthoringService>,
    signal_player: Arc<SignalPlayer>,
}

impl AppServices {
    #[must_use]
    pub fn new(storage: &Storage, config: &AppConfig, clock: Clock, sink: Arc<dyn ToneSink>) -> Self {
        let quiz = Arc::new(QuizService::new(
            Arc::clone(&storage.questions),
            config.quiz.clone(),
        ));
        let dashboard = Arc::new(DashboardService::new(Arc::clone(&storage.questions)));
        let authoring = Arc::new(AuthoringService::new(Arc::clone(&storage.questions)));
        let signal_player = Arc::new(SignalPlayer::new(sink, config.tone, clock));

        Self {
            quiz,
            dashboard,
            authoring,
            signal_player,
        }
    }

    /// Build services over the built-in question bank.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::Storage` if the seed bank fails validation.
    pub fn seeded(
        config: &AppConfig,
        clock: Clock,
        sink: Arc<dyn ToneSink>,
    ) -> Result<Self, AppServicesError> {
        let storage = Storage::seeded()?;
        Ok(Self::new(&storage, config, clock, sink))
    }

    #[must_use]
    pub fn quiz(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz)
    }

    #[must_use]
    pub fn dashboard(&self) -> Arc<DashboardService> {
        Arc::clone(&self.dashboard)
    }

    #[must_use]
    pub fn authoring(&self) -> Arc<AuthoringService> {
        Arc::clone(&self.authoring)
    }

    #[must_use]
    pub fn signal_player(&self) -> Arc<SignalPlayer> {
        Arc::clone(&self.signal_player)
    }
}
