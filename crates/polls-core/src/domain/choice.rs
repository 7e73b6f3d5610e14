use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Choice entity - one selectable answer to a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub id: Uuid,
    pub question_id: Uuid,
    pub choice_text: String,
    pub votes: i32,
    pub created_at: DateTime<Utc>,
}

impl Choice {
    /// Create a new choice with no votes.
    pub fn new(question_id: Uuid, choice_text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            question_id,
            choice_text: choice_text.into(),
            votes: 0,
            created_at: Utc::now(),
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.choice_text)
    }
}
