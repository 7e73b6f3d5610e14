//! Poll use cases - listing, detail lookups and voting.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::{Choice, Poll, Question};
use crate::error::DomainError;
use crate::ports::{ChoiceRepository, QuestionRepository};

/// Maximum number of questions shown on the index page.
pub const LATEST_QUESTION_LIMIT: u64 = 5;

/// Message shown when a vote is submitted without a valid choice.
pub const INVALID_VOTE_MESSAGE: &str = "You didn't select a choice.";

/// Application service over the question and choice repositories.
#[derive(Clone)]
pub struct PollService {
    questions: Arc<dyn QuestionRepository>,
    choices: Arc<dyn ChoiceRepository>,
}

impl PollService {
    pub fn new(questions: Arc<dyn QuestionRepository>, choices: Arc<dyn ChoiceRepository>) -> Self {
        Self { questions, choices }
    }

    /// The most recently published questions, newest first.
    pub async fn latest_questions(&self, now: DateTime<Utc>) -> Result<Vec<Question>, DomainError> {
        Ok(self
            .questions
            .find_published(now, LATEST_QUESTION_LIMIT)
            .await?)
    }

    /// A published question with its choices. Future questions are not found.
    pub async fn published_poll(&self, id: Uuid, now: DateTime<Utc>) -> Result<Poll, DomainError> {
        let question = self
            .questions
            .find_published_by_id(id, now)
            .await?
            .ok_or(DomainError::NotFound {
                entity_type: "Question",
                id,
            })?;

        self.with_choices(question).await
    }

    /// A question with its choices, regardless of publish date.
    pub async fn poll(&self, id: Uuid) -> Result<Poll, DomainError> {
        let question = self
            .questions
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound {
                entity_type: "Question",
                id,
            })?;

        self.with_choices(question).await
    }

    /// Count one vote for the submitted choice of `poll`.
    ///
    /// `submitted` is the raw form value; anything that is not the id of one
    /// of the poll's choices is rejected without touching the store.
    pub async fn vote(&self, poll: &Poll, submitted: Option<&str>) -> Result<Choice, DomainError> {
        let question_id = poll.question.id;

        let choice_id = submitted
            .and_then(|raw| Uuid::parse_str(raw.trim()).ok())
            .filter(|id| poll.choice(*id).is_some())
            .ok_or_else(|| {
                tracing::warn!(%question_id, ?submitted, "Rejected vote");
                DomainError::InvalidVote
            })?;

        let choice = self
            .choices
            .increment_votes(question_id, choice_id)
            .await?
            .ok_or(DomainError::InvalidVote)?;

        tracing::info!(%question_id, %choice_id, votes = choice.votes, "Vote recorded");
        Ok(choice)
    }

    async fn with_choices(&self, question: Question) -> Result<Poll, DomainError> {
        let choices = self.choices.find_by_question(question.id).await?;
        Ok(Poll::new(question, choices))
    }
}
