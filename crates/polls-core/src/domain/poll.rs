use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Choice, Question};

/// A question together with its choices, in creation order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Poll {
    pub question: Question,
    pub choices: Vec<Choice>,
}

impl Poll {
    pub fn new(question: Question, choices: Vec<Choice>) -> Self {
        Self { question, choices }
    }

    /// Look up one of this poll's choices.
    pub fn choice(&self, id: Uuid) -> Option<&Choice> {
        self.choices.iter().find(|c| c.id == id)
    }

    pub fn total_votes(&self) -> i64 {
        self.choices.iter().map(|c| i64::from(c.votes)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_choice_lookup_is_scoped_to_poll() {
        let question = Question::new("Favourite colour?", Utc::now());
        let red = Choice::new(question.id, "Red");
        let stray = Choice::new(Uuid::new_v4(), "Stray");
        let poll = Poll::new(question, vec![red.clone()]);

        assert_eq!(poll.choice(red.id), Some(&red));
        assert!(poll.choice(stray.id).is_none());
    }

    #[test]
    fn test_total_votes() {
        let question = Question::new("q", Utc::now());
        let mut a = Choice::new(question.id, "a");
        let mut b = Choice::new(question.id, "b");
        a.votes = 3;
        b.votes = 4;
        let poll = Poll::new(question, vec![a, b]);
        assert_eq!(poll.total_votes(), 7);
    }
}
