//! PostgreSQL repository implementations.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect};
use uuid::Uuid;

use polls_core::domain::{Choice, Question};
use polls_core::error::RepoError;
use polls_core::ports::{ChoiceRepository, QuestionRepository};

use super::entity::choice::{self, Entity as ChoiceEntity};
use super::entity::question::{self, Entity as QuestionEntity};
use super::postgres_base::{PostgresBaseRepository, query_error};

/// PostgreSQL question repository.
pub type PostgresQuestionRepository = PostgresBaseRepository<QuestionEntity>;

/// PostgreSQL choice repository.
pub type PostgresChoiceRepository = PostgresBaseRepository<ChoiceEntity>;

#[async_trait]
impl QuestionRepository for PostgresQuestionRepository {
    async fn find_published(
        &self,
        now: DateTime<Utc>,
        limit: u64,
    ) -> Result<Vec<Question>, RepoError> {
        tracing::debug!(%now, limit, "Finding published questions");

        let result = QuestionEntity::find()
            .filter(question::Column::PubDate.lte(now))
            .order_by_desc(question::Column::PubDate)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(query_error)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn find_published_by_id(
        &self,
        id: Uuid,
        now: DateTime<Utc>,
    ) -> Result<Option<Question>, RepoError> {
        let result = QuestionEntity::find_by_id(id)
            .filter(question::Column::PubDate.lte(now))
            .one(&self.db)
            .await
            .map_err(query_error)?;

        Ok(result.map(Into::into))
    }
}

#[async_trait]
impl ChoiceRepository for PostgresChoiceRepository {
    async fn find_by_question(&self, question_id: Uuid) -> Result<Vec<Choice>, RepoError> {
        let result = ChoiceEntity::find()
            .filter(choice::Column::QuestionId.eq(question_id))
            .order_by_asc(choice::Column::CreatedAt)
            .order_by_asc(choice::Column::Id)
            .all(&self.db)
            .await
            .map_err(query_error)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn increment_votes(
        &self,
        question_id: Uuid,
        choice_id: Uuid,
    ) -> Result<Option<Choice>, RepoError> {
        // Single UPDATE so concurrent votes never lose an increment.
        let updated = ChoiceEntity::update_many()
            .col_expr(
                choice::Column::Votes,
                Expr::col(choice::Column::Votes).add(1),
            )
            .filter(choice::Column::Id.eq(choice_id))
            .filter(choice::Column::QuestionId.eq(question_id))
            .exec_with_returning(&self.db)
            .await
            .map_err(query_error)?;

        Ok(updated.into_iter().next().map(Into::into))
    }
}
