use async_trait::async_trait;
use gdpt_core::model::{Question, QuestionDraft, QuestionError, QuestionId, TopicKey};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

use crate::seed::seed_questions;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("conflict: question {0} already exists")]
    Conflict(QuestionId),

    #[error("connection error: {0}")]
    Connection(String),

    #[error(transparent)]
    Validation(#[from] QuestionError),
}

/// Repository contract for the shared question pool.
///
/// One writer (seeding, authoring) and many readers (quiz sessions,
/// dashboard). Questions are never updated or deleted.
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// Validate a draft and append it under a freshly minted id.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Validation` if the draft is malformed.
    async fn add_question(
        &self,
        draft: QuestionDraft,
        fallback_topic: TopicKey,
    ) -> Result<QuestionId, StorageError>;

    /// Insert an already-built question, keeping its id.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Conflict` if the id is taken.
    async fn insert_question(&self, question: Question) -> Result<(), StorageError>;

    /// Fetch one question by id.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if missing.
    async fn get_question(&self, id: &QuestionId) -> Result<Question, StorageError>;

    /// All questions for a topic, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend is unavailable.
    async fn questions_for_topic(&self, topic: TopicKey) -> Result<Vec<Question>, StorageError>;

    /// Number of questions per topic. Topics without questions are absent.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend is unavailable.
    async fn count_by_topic(&self) -> Result<HashMap<TopicKey, usize>, StorageError>;
}

/// In-memory question pool. Nothing survives the process.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    questions: Arc<Mutex<Vec<Question>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self {
            questions: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A pool preloaded with the built-in question bank.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Validation` if a seed entry is malformed.
    pub fn seeded() -> Result<Self, StorageError> {
        let questions = seed_questions()?;
        Ok(Self {
            questions: Arc::new(Mutex::new(questions)),
        })
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Vec<Question>>, StorageError> {
        self.questions
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))
    }
}

#[async_trait]
impl QuestionRepository for InMemoryRepository {
    async fn add_question(
        &self,
        draft: QuestionDraft,
        fallback_topic: TopicKey,
    ) -> Result<QuestionId, StorageError> {
        let validated = draft.validate(fallback_topic)?;
        let id = QuestionId::generate();
        let mut guard = self.lock()?;
        guard.push(validated.assign_id(id.clone()));
        Ok(id)
    }

    async fn insert_question(&self, question: Question) -> Result<(), StorageError> {
        let mut guard = self.lock()?;
        if guard.iter().any(|existing| existing.id() == question.id()) {
            return Err(StorageError::Conflict(question.id().clone()));
        }
        guard.push(question);
        Ok(())
    }

    async fn get_question(&self, id: &QuestionId) -> Result<Question, StorageError> {
        let guard = self.lock()?;
        guard
            .iter()
            .find(|question| question.id() == id)
            .cloned()
            .ok_or(StorageError::NotFound)
    }

    async fn questions_for_topic(&self, topic: TopicKey) -> Result<Vec<Question>, StorageError> {
        let guard = self.lock()?;
        Ok(guard
            .iter()
            .filter(|question| question.topic() == topic)
            .cloned()
            .collect())
    }

    async fn count_by_topic(&self) -> Result<HashMap<TopicKey, usize>, StorageError> {
        let guard = self.lock()?;
        let mut counts = HashMap::new();
        for question in guard.iter() {
            *counts.entry(question.topic()).or_insert(0) += 1;
        }
        Ok(counts)
    }
}

/// Aggregates repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub questions: Arc<dyn QuestionRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let questions: Arc<dyn QuestionRepository> = Arc::new(InMemoryRepository::new());
        Self { questions }
    }

    /// In-memory storage preloaded with the built-in question bank.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Validation` if a seed entry is malformed.
    pub fn seeded() -> Result<Self, StorageError> {
        let questions: Arc<dyn QuestionRepository> = Arc::new(InMemoryRepository::seeded()?);
        Ok(Self { questions })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(topic: TopicKey) -> QuestionDraft {
        QuestionDraft::new(topic, "Q?", ["a", "b", "c", "d"], 1)
    }

    #[tokio::test]
    async fn added_questions_are_queryable_by_topic() {
        let repo = InMemoryRepository::new();
        let id = repo
            .add_question(draft(TopicKey::Knots), TopicKey::Knots)
            .await
            .unwrap();
        repo.add_question(draft(TopicKey::Morse), TopicKey::Knots)
            .await
            .unwrap();

        let knots = repo.questions_for_topic(TopicKey::Knots).await.unwrap();
        assert_eq!(knots.len(), 1);
        assert_eq!(knots[0].id(), &id);
        assert_eq!(repo.get_question(&id).await.unwrap().correct_answer(), 1);
    }

    #[tokio::test]
    async fn invalid_draft_is_rejected_without_insert() {
        let repo = InMemoryRepository::new();
        let mut bad = draft(TopicKey::Knots);
        bad.question = "  ".into();

        let err = repo.add_question(bad, TopicKey::Knots).await.unwrap_err();
        assert!(matches!(err, StorageError::Validation(QuestionError::EmptyQuestion)));
        assert!(repo.count_by_topic().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn insert_rejects_duplicate_ids() {
        let repo = InMemoryRepository::new();
        let question = draft(TopicKey::Doctrine)
            .validate(TopicKey::Doctrine)
            .unwrap()
            .assign_id(QuestionId::new("doctrine-x"));

        repo.insert_question(question.clone()).await.unwrap();
        let err = repo.insert_question(question).await.unwrap_err();
        assert!(matches!(err, StorageError::Conflict(_)));
    }

    #[tokio::test]
    async fn missing_question_is_not_found() {
        let repo = InMemoryRepository::new();
        let err = repo.get_question(&QuestionId::new("nope")).await.unwrap_err();
        assert!(matches!(err, StorageError::NotFound));
    }

    #[tokio::test]
    async fn clones_share_the_pool() {
        let repo = InMemoryRepository::new();
        let other = repo.clone();
        repo.add_question(draft(TopicKey::Cipher), TopicKey::Cipher)
            .await
            .unwrap();
        let counts = other.count_by_topic().await.unwrap();
        assert_eq!(counts.get(&TopicKey::Cipher), Some(&1));
    }
}
