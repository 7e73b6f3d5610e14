//! In-memory poll store - used when no database is configured, and in tests.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use polls_core::domain::{Choice, Question};
use polls_core::error::RepoError;
use polls_core::ports::{BaseRepository, ChoiceRepository, QuestionRepository};

/// In-memory store for questions and choices using async RwLocks.
///
/// Note: Data is lost on process restart.
pub struct InMemoryPollStore {
    questions: RwLock<HashMap<Uuid, Question>>,
    choices: RwLock<HashMap<Uuid, Choice>>,
}

impl InMemoryPollStore {
    pub fn new() -> Self {
        Self {
            questions: RwLock::new(HashMap::new()),
            choices: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryPollStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<Question, Uuid> for InMemoryPollStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Question>, RepoError> {
        Ok(self.questions.read().await.get(&id).cloned())
    }

    async fn save(&self, question: Question) -> Result<Question, RepoError> {
        self.questions
            .write()
            .await
            .insert(question.id, question.clone());
        Ok(question)
    }
}

#[async_trait]
impl QuestionRepository for InMemoryPollStore {
    async fn find_published(
        &self,
        now: DateTime<Utc>,
        limit: u64,
    ) -> Result<Vec<Question>, RepoError> {
        let store = self.questions.read().await;
        let mut published: Vec<Question> = store
            .values()
            .filter(|q| q.is_published(now))
            .cloned()
            .collect();

        published.sort_by(|a, b| b.pub_date.cmp(&a.pub_date));
        published.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
        Ok(published)
    }

    async fn find_published_by_id(
        &self,
        id: Uuid,
        now: DateTime<Utc>,
    ) -> Result<Option<Question>, RepoError> {
        let store = self.questions.read().await;
        Ok(store.get(&id).filter(|q| q.is_published(now)).cloned())
    }
}

#[async_trait]
impl BaseRepository<Choice, Uuid> for InMemoryPollStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Choice>, RepoError> {
        Ok(self.choices.read().await.get(&id).cloned())
    }

    async fn save(&self, choice: Choice) -> Result<Choice, RepoError> {
        // A choice must hang off an existing question.
        if !self
            .questions
            .read()
            .await
            .contains_key(&choice.question_id)
        {
            return Err(RepoError::Constraint(format!(
                "question {} does not exist",
                choice.question_id
            )));
        }

        self.choices.write().await.insert(choice.id, choice.clone());
        Ok(choice)
    }
}

#[async_trait]
impl ChoiceRepository for InMemoryPollStore {
    async fn find_by_question(&self, question_id: Uuid) -> Result<Vec<Choice>, RepoError> {
        let store = self.choices.read().await;
        let mut choices: Vec<Choice> = store
            .values()
            .filter(|c| c.question_id == question_id)
            .cloned()
            .collect();

        choices.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(choices)
    }

    async fn increment_votes(
        &self,
        question_id: Uuid,
        choice_id: Uuid,
    ) -> Result<Option<Choice>, RepoError> {
        // The write lock serializes concurrent votes.
        let mut store = self.choices.write().await;
        let Some(choice) = store
            .get_mut(&choice_id)
            .filter(|c| c.question_id == question_id)
        else {
            return Ok(None);
        };

        choice.votes += 1;
        Ok(Some(choice.clone()))
    }
}
