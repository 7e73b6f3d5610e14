use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::{Choice, Question};
use crate::error::RepoError;

/// Generic repository trait defining the standard read/write operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Save an entity (create or update).
    async fn save(&self, entity: T) -> Result<T, RepoError>;
}

/// Question repository.
#[async_trait]
pub trait QuestionRepository: BaseRepository<Question, Uuid> {
    /// Questions with `pub_date <= now`, newest first, at most `limit` of them.
    async fn find_published(
        &self,
        now: DateTime<Utc>,
        limit: u64,
    ) -> Result<Vec<Question>, RepoError>;

    /// A single question, only if it is published at `now`.
    async fn find_published_by_id(
        &self,
        id: Uuid,
        now: DateTime<Utc>,
    ) -> Result<Option<Question>, RepoError>;
}

/// Choice repository.
#[async_trait]
pub trait ChoiceRepository: BaseRepository<Choice, Uuid> {
    /// All choices of a question, oldest first.
    async fn find_by_question(&self, question_id: Uuid) -> Result<Vec<Choice>, RepoError>;

    /// Atomically add one vote to a choice of the given question.
    ///
    /// Returns the updated choice, or `None` when the question has no such choice.
    async fn increment_votes(
        &self,
        question_id: Uuid,
        choice_id: Uuid,
    ) -> Result<Option<Choice>, RepoError>;
}
