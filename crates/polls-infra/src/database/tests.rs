use chrono::{Duration, Utc};
use polls_core::domain::{Choice, Question};
use polls_core::ports::{BaseRepository, ChoiceRepository, QuestionRepository};
use sea_orm::{DatabaseBackend, MockDatabase};
use uuid::Uuid;

use crate::database::entity::{choice, question};
use crate::database::postgres_repo::{PostgresChoiceRepository, PostgresQuestionRepository};

fn question_model(text: &str, days: i64) -> question::Model {
    question::Model {
        id: Uuid::new_v4(),
        question_text: text.to_owned(),
        pub_date: (Utc::now() + Duration::days(days)).into(),
    }
}

#[tokio::test]
async fn test_find_question_by_id() {
    let model = question_model("What's up?", -1);
    let id = model.id;

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![model]])
        .into_connection();

    let repo = PostgresQuestionRepository::new(db);

    let result: Option<Question> = repo.find_by_id(id).await.unwrap();

    let question = result.unwrap();
    assert_eq!(question.question_text, "What's up?");
    assert_eq!(question.id, id);
}

#[tokio::test]
async fn test_find_published_filters_orders_and_limits() {
    let newer = question_model("Past question 2.", -5);
    let older = question_model("Past question 1.", -30);

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![newer, older]])
        .into_connection();

    let repo = PostgresQuestionRepository::new(db);
    let questions = repo.find_published(Utc::now(), 5).await.unwrap();

    let texts: Vec<_> = questions.iter().map(|q| q.question_text.as_str()).collect();
    assert_eq!(texts, vec!["Past question 2.", "Past question 1."]);

    let log = format!("{:?}", repo.db.into_transaction_log());
    assert!(log.contains("pub_date"));
    assert!(log.contains("<= $1"));
    assert!(log.contains("DESC"));
    assert!(log.contains("LIMIT $2"));
}

#[tokio::test]
async fn test_find_published_by_id_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![Vec::<question::Model>::new()])
        .into_connection();

    let repo = PostgresQuestionRepository::new(db);
    let result = repo
        .find_published_by_id(Uuid::new_v4(), Utc::now())
        .await
        .unwrap();

    assert!(result.is_none());
}

#[tokio::test]
async fn test_increment_votes_returns_updated_choice() {
    let question_id = Uuid::new_v4();
    let choice_id = Uuid::new_v4();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![choice::Model {
            id: choice_id,
            question_id,
            choice_text: "Not much".to_owned(),
            votes: 3,
            created_at: Utc::now().into(),
        }]])
        .into_connection();

    let repo = PostgresChoiceRepository::new(db);
    let updated: Option<Choice> = repo.increment_votes(question_id, choice_id).await.unwrap();

    assert_eq!(updated.unwrap().votes, 3);

    let log = format!("{:?}", repo.db.into_transaction_log());
    assert!(log.contains("UPDATE"));
    assert!(log.contains("+ $1"));
    assert!(log.contains("question_id"));
    assert!(log.contains("RETURNING"));
}

#[tokio::test]
async fn test_increment_votes_for_unmatched_choice() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![Vec::<choice::Model>::new()])
        .into_connection();

    let repo = PostgresChoiceRepository::new(db);
    let updated = repo
        .increment_votes(Uuid::new_v4(), Uuid::new_v4())
        .await
        .unwrap();

    assert!(updated.is_none());
}
