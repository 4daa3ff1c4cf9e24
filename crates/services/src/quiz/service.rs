use std::sync::{Arc, Mutex, PoisonError};

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

use gdpt_core::model::{QuizPolicy, TopicKey};
use storage::repository::QuestionRepository;

use super::plan::sample_questions;
use super::session::QuizSession;
use crate::error::QuizServiceError;

/// Starts quiz attempts from the shared question pool.
#[derive(Clone)]
pub struct QuizService {
    questions: Arc<dyn QuestionRepository>,
    policy: QuizPolicy,
    rng: Arc<Mutex<StdRng>>,
}

impl QuizService {
    #[must_use]
    pub fn new(questions: Arc<dyn QuestionRepository>, policy: QuizPolicy) -> Self {
        Self::with_rng(questions, policy, StdRng::from_rng(&mut rand::rng()))
    }

    /// Deterministic sampling, for tests and reproducible demos.
    #[must_use]
    pub fn with_seed(questions: Arc<dyn QuestionRepository>, policy: QuizPolicy, seed: u64) -> Self {
        Self::with_rng(questions, policy, StdRng::seed_from_u64(seed))
    }

    fn with_rng(questions: Arc<dyn QuestionRepository>, policy: QuizPolicy, rng: StdRng) -> Self {
        Self {
            questions,
            policy,
            rng: Arc::new(Mutex::new(rng)),
        }
    }

    #[must_use]
    pub fn policy(&self) -> &QuizPolicy {
        &self.policy
    }

    /// Sample a fresh session for `topic`.
    ///
    /// A topic with no questions yields a session in the `Empty` phase.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::Storage` if the pool cannot be read.
    pub async fn start_quiz(&self, topic: TopicKey) -> Result<QuizSession, QuizServiceError> {
        let pool = self.questions.questions_for_topic(topic).await?;
        let available = pool.len();
        let settings = self.policy.for_topic(topic);

        let questions = {
            let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
            sample_questions(topic, pool, settings.sample_size(), &mut *rng)
        };

        info!(
            topic = %topic,
            available,
            sampled = questions.len(),
            pass_threshold = settings.pass_threshold(),
            "quiz started"
        );
        Ok(QuizSession::new(topic, questions, settings.pass_threshold()))
    }

    /// Throw `session` away and sample a new one for the same topic.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::Storage` if the pool cannot be read.
    pub async fn retry(&self, session: &QuizSession) -> Result<QuizSession, QuizServiceError> {
        self.start_quiz(session.topic()).await
    }
}
