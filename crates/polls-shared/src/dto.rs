//! Data Transfer Objects - form bodies and template contexts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use polls_core::domain::{Choice, Poll, Question};

/// Body of `POST /polls/{id}/vote/`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VoteForm {
    pub choice: Option<String>,
}

/// A question as rendered in a page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionView {
    pub id: Uuid,
    pub question_text: String,
    pub pub_date: DateTime<Utc>,
    pub was_published_recently: bool,
}

impl QuestionView {
    pub fn new(question: &Question, now: DateTime<Utc>) -> Self {
        Self {
            id: question.id,
            question_text: question.question_text.clone(),
            pub_date: question.pub_date,
            was_published_recently: question.was_published_recently(now),
        }
    }
}

/// A choice as rendered in a page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChoiceView {
    pub id: Uuid,
    pub choice_text: String,
    pub votes: i32,
}

impl From<&Choice> for ChoiceView {
    fn from(choice: &Choice) -> Self {
        Self {
            id: choice.id,
            choice_text: choice.choice_text.clone(),
            votes: choice.votes,
        }
    }
}

/// Context of the index page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexContext {
    pub latest_question_list: Vec<QuestionView>,
}

impl IndexContext {
    pub fn new(questions: &[Question], now: DateTime<Utc>) -> Self {
        Self {
            latest_question_list: questions.iter().map(|q| QuestionView::new(q, now)).collect(),
        }
    }
}

/// Context of the detail page, optionally carrying a vote error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailContext {
    pub question: QuestionView,
    pub choices: Vec<ChoiceView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl DetailContext {
    pub fn new(poll: &Poll, now: DateTime<Utc>) -> Self {
        Self {
            question: QuestionView::new(&poll.question, now),
            choices: poll.choices.iter().map(ChoiceView::from).collect(),
            error_message: None,
        }
    }

    pub fn with_error(mut self, message: impl Into<String>) -> Self {
        self.error_message = Some(message.into());
        self
    }
}

/// Context of the results page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultsContext {
    pub question: QuestionView,
    pub choices: Vec<ChoiceView>,
    pub total_votes: i64,
}

impl ResultsContext {
    pub fn new(poll: &Poll, now: DateTime<Utc>) -> Self {
        Self {
            question: QuestionView::new(&poll.question, now),
            choices: poll.choices.iter().map(ChoiceView::from).collect(),
            total_votes: poll.total_votes(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_context_omits_missing_error() {
        let question = Question::new("Past question.", Utc::now());
        let poll = Poll::new(question.clone(), vec![Choice::new(question.id, "Yes")]);

        let plain = serde_json::to_value(DetailContext::new(&poll, Utc::now())).unwrap();
        assert!(plain.get("error_message").is_none());
        assert_eq!(plain["choices"][0]["choice_text"], "Yes");

        let failed = serde_json::to_value(
            DetailContext::new(&poll, Utc::now()).with_error("You didn't select a choice."),
        )
        .unwrap();
        assert_eq!(failed["error_message"], "You didn't select a choice.");
    }

    #[test]
    fn test_index_context_keeps_order() {
        let now = Utc::now();
        let newer = Question::new("Past question 2.", now - chrono::Duration::days(5));
        let older = Question::new("Past question 1.", now - chrono::Duration::days(30));

        let context = IndexContext::new(&[newer, older], now);
        let texts: Vec<_> = context
            .latest_question_list
            .iter()
            .map(|q| q.question_text.as_str())
            .collect();
        assert_eq!(texts, vec!["Past question 2.", "Past question 1."]);
        assert!(!context.latest_question_list[0].was_published_recently);
    }
}
