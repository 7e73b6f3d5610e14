//! Poll pages: index, detail, results and the vote form target.

use actix_web::http::header;
use actix_web::{HttpResponse, web};
use chrono::Utc;
use uuid::Uuid;

use polls_core::DomainError;
use polls_core::service::INVALID_VOTE_MESSAGE;
use polls_shared::dto::{DetailContext, IndexContext, ResultsContext, VoteForm};

use crate::middleware::error::AppResult;
use crate::state::AppState;
use crate::templates::{DETAIL_TEMPLATE, INDEX_TEMPLATE, RESULTS_TEMPLATE};

fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body)
}

pub fn results_url(question_id: Uuid) -> String {
    format!("/polls/{}/results/", question_id)
}

/// GET /polls/
pub async fn index(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let now = Utc::now();
    let questions = state.polls.latest_questions(now).await?;

    let body = state
        .templates
        .render(INDEX_TEMPLATE, &IndexContext::new(&questions, now))?;
    Ok(html(body))
}

/// GET /polls/{question_id}/ - 404 until the question is published.
pub async fn detail(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let now = Utc::now();
    let poll = state.polls.published_poll(path.into_inner(), now).await?;

    let body = state
        .templates
        .render(DETAIL_TEMPLATE, &DetailContext::new(&poll, now))?;
    Ok(html(body))
}

/// GET /polls/{question_id}/results/ - no publish date check.
pub async fn results(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let poll = state.polls.poll(path.into_inner()).await?;

    let body = state
        .templates
        .render(RESULTS_TEMPLATE, &ResultsContext::new(&poll, Utc::now()))?;
    Ok(html(body))
}

/// POST /polls/{question_id}/vote/
///
/// Redirects to the results page on success. A missing or foreign choice
/// re-renders the detail page with an error message and a 200 status.
pub async fn vote(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    form: Option<web::Form<VoteForm>>,
) -> AppResult<HttpResponse> {
    let question_id = path.into_inner();
    let poll = state.polls.poll(question_id).await?;
    let submitted = form.and_then(|f| f.into_inner().choice);

    match state.polls.vote(&poll, submitted.as_deref()).await {
        Ok(_) => Ok(HttpResponse::Found()
            .insert_header((header::LOCATION, results_url(question_id)))
            .finish()),
        Err(DomainError::InvalidVote) => {
            let context = DetailContext::new(&poll, Utc::now()).with_error(INVALID_VOTE_MESSAGE);
            Ok(html(state.templates.render(DETAIL_TEMPLATE, &context)?))
        }
        Err(e) => Err(e.into()),
    }
}
