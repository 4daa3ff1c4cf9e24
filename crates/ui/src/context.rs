use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use gdpt_core::model::TopicKey;
use services::{DashboardService, QuizService, SignalPlayer};

pub trait UiApp: Send + Sync {
    /// Topic to open instead of the dashboard on first render.
    fn initial_topic(&self) -> Option<TopicKey>;

    fn dashboard(&self) -> Arc<DashboardService>;
    fn quiz(&self) -> Arc<QuizService>;
    fn signal_player(&self) -> Arc<SignalPlayer>;
}

#[derive(Clone)]
pub struct AppContext {
    initial_topic: Option<TopicKey>,
    initial_topic_pending: Arc<AtomicBool>,

    dashboard: Arc<DashboardService>,
    quiz: Arc<QuizService>,
    signal_player: Arc<SignalPlayer>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        let initial_topic = app.initial_topic();

        Self {
            initial_topic,
            initial_topic_pending: Arc::new(AtomicBool::new(initial_topic.is_some())),
            dashboard: app.dashboard(),
            quiz: app.quiz(),
            signal_player: app.signal_player(),
        }
    }

    /// The launch topic, handed out once.
    #[must_use]
    pub fn take_initial_topic(&self) -> Option<TopicKey> {
        if self.initial_topic_pending.swap(false, Ordering::AcqRel) {
            self.initial_topic
        } else {
            None
        }
    }

    #[must_use]
    pub fn dashboard(&self) -> Arc<DashboardService> {
        Arc::clone(&self.dashboard)
    }

    #[must_use]
    pub fn quiz(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz)
    }

    #[must_use]
    pub fn signal_player(&self) -> Arc<SignalPlayer> {
        Arc::clone(&self.signal_player)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
