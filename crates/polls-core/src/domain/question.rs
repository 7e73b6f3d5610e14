use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Question entity - a poll prompt with a publish date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: Uuid,
    pub question_text: String,
    pub pub_date: DateTime<Utc>,
}

impl Question {
    /// Create a new question with a generated ID.
    pub fn new(question_text: impl Into<String>, pub_date: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            question_text: question_text.into(),
            pub_date,
        }
    }

    /// Whether the question is visible at `now`.
    pub fn is_published(&self, now: DateTime<Utc>) -> bool {
        self.pub_date <= now
    }

    /// True when the question went live within the day before `now`.
    pub fn was_published_recently(&self, now: DateTime<Utc>) -> bool {
        now - Duration::days(1) <= self.pub_date && self.pub_date <= now
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.question_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_was_published_recently_with_future_question() {
        let now = Utc::now();
        let question = Question::new("Future question.", now + Duration::days(30));
        assert!(!question.was_published_recently(now));
    }

    #[test]
    fn test_was_published_recently_with_old_question() {
        let now = Utc::now();
        let question = Question::new("Old question.", now - Duration::days(30));
        assert!(!question.was_published_recently(now));
    }

    #[test]
    fn test_was_published_recently_with_recent_question() {
        let now = Utc::now();
        let question = Question::new("Recent question.", now - Duration::hours(1));
        assert!(question.was_published_recently(now));
    }

    #[test]
    fn test_was_published_recently_at_boundaries() {
        let now = Utc::now();
        let just_inside = Question::new("q", now - Duration::hours(23) - Duration::minutes(59));
        let just_outside = Question::new("q", now - Duration::days(1) - Duration::seconds(1));
        let right_now = Question::new("q", now);

        assert!(just_inside.was_published_recently(now));
        assert!(!just_outside.was_published_recently(now));
        assert!(right_now.was_published_recently(now));
    }

    #[test]
    fn test_is_published() {
        let now = Utc::now();
        assert!(Question::new("past", now - Duration::days(5)).is_published(now));
        assert!(!Question::new("future", now + Duration::days(5)).is_published(now));
    }

    #[test]
    fn test_display_is_question_text() {
        let question = Question::new("What's new?", Utc::now());
        assert_eq!(question.to_string(), "What's new?");
    }
}
