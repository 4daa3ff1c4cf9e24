use std::sync::Arc;

use tracing::info;

use gdpt_core::model::{QuestionDraft, QuestionId, TopicKey};
use storage::repository::QuestionRepository;

use crate::error::AuthoringError;

/// Appends user-written questions to the shared pool.
#[derive(Clone)]
pub struct AuthoringService {
    questions: Arc<dyn QuestionRepository>,
}

impl AuthoringService {
    #[must_use]
    pub fn new(questions: Arc<dyn QuestionRepository>) -> Self {
        Self { questions }
    }

    /// Validate `draft` and add it under a new id.
    ///
    /// # Errors
    ///
    /// Returns `AuthoringError::MissingTopic` if the draft names no topic,
    /// `AuthoringError::Invalid` for validation failures, and
    /// `AuthoringError::Storage` if the pool rejects the write.
    pub async fn add_question(&self, draft: QuestionDraft) -> Result<QuestionId, AuthoringError> {
        let topic = draft.topic.ok_or(AuthoringError::MissingTopic)?;
        self.add_question_to(topic, draft).await
    }

    /// Like [`add_question`](Self::add_question), filing topic-less drafts
    /// under `topic`.
    ///
    /// # Errors
    ///
    /// Same as [`add_question`](Self::add_question), minus `MissingTopic`.
    pub async fn add_question_to(
        &self,
        topic: TopicKey,
        draft: QuestionDraft,
    ) -> Result<QuestionId, AuthoringError> {
        let validated_topic = draft.topic.unwrap_or(topic);
        let id = self.questions.add_question(draft, topic).await?;
        info!(topic = %validated_topic, id = %id, "question added");
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gdpt_core::model::QuestionError;
    use storage::repository::InMemoryRepository;

    fn service() -> (AuthoringService, Arc<InMemoryRepository>) {
        let repo = Arc::new(InMemoryRepository::new());
        (AuthoringService::new(repo.clone()), repo)
    }

    #[tokio::test]
    async fn valid_draft_is_stored() {
        let (service, repo) = service();
        let draft = QuestionDraft::new(TopicKey::FirstAid, "Q?", ["a", "b", "c", "d"], 2);

        let id = service.add_question(draft).await.unwrap();
        let stored = repo.get_question(&id).await.unwrap();
        assert_eq!(stored.topic(), TopicKey::FirstAid);
        assert_eq!(stored.correct_answer(), 2);
    }

    #[tokio::test]
    async fn draft_without_topic_needs_a_target() {
        let (service, repo) = service();
        let mut draft = QuestionDraft::new(TopicKey::Knots, "Q?", ["a", "b", "c", "d"], 0);
        draft.topic = None;

        let err = service.add_question(draft.clone()).await.unwrap_err();
        assert!(matches!(err, AuthoringError::MissingTopic));

        let id = service.add_question_to(TopicKey::Doctrine, draft).await.unwrap();
        assert_eq!(repo.get_question(&id).await.unwrap().topic(), TopicKey::Doctrine);
    }

    #[tokio::test]
    async fn invalid_draft_reports_the_field() {
        let (service, repo) = service();
        let draft = QuestionDraft::new(TopicKey::Knots, "Q?", ["a", "", "c", "d"], 0);

        let err = service.add_question(draft).await.unwrap_err();
        assert!(matches!(
            err,
            AuthoringError::Invalid(QuestionError::EmptyOption { label: 'B' })
        ));
        assert!(repo.count_by_topic().await.unwrap().is_empty());
    }
}
