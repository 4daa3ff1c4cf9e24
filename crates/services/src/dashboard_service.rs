use std::sync::Arc;

use gdpt_core::content::topics::TOPICS;
use gdpt_core::model::{Section, TopicConfig};
use storage::repository::QuestionRepository;

use crate::error::DashboardError;

/// One dashboard card: static topic metadata plus the current pool size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicSummary {
    pub config: &'static TopicConfig,
    pub question_count: usize,
}

impl TopicSummary {
    #[must_use]
    pub fn has_quiz(&self) -> bool {
        self.question_count > 0
    }
}

/// Read-only view of topics for the home screen.
#[derive(Clone)]
pub struct DashboardService {
    questions: Arc<dyn QuestionRepository>,
}

impl DashboardService {
    #[must_use]
    pub fn new(questions: Arc<dyn QuestionRepository>) -> Self {
        Self { questions }
    }

    /// Every topic in registry order with its question count.
    ///
    /// # Errors
    ///
    /// Returns `DashboardError::Storage` if the pool cannot be read.
    pub async fn topics(&self) -> Result<Vec<TopicSummary>, DashboardError> {
        let counts = self.questions.count_by_topic().await?;
        Ok(TOPICS
            .iter()
            .map(|config| TopicSummary {
                config,
                question_count: counts.get(&config.key).copied().unwrap_or(0),
            })
            .collect())
    }

    /// Topics grouped by dashboard section, empty sections omitted.
    ///
    /// # Errors
    ///
    /// Returns `DashboardError::Storage` if the pool cannot be read.
    pub async fn sections(&self) -> Result<Vec<(Section, Vec<TopicSummary>)>, DashboardError> {
        let topics = self.topics().await?;
        Ok(Section::ALL
            .into_iter()
            .map(|section| {
                let members = topics
                    .iter()
                    .filter(|summary| summary.config.section == section)
                    .cloned()
                    .collect::<Vec<_>>();
                (section, members)
            })
            .filter(|(_, members)| !members.is_empty())
            .collect())
    }
}
