//! HTTP handlers and route configuration.

mod health;
mod polls;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/polls")
            .route("/", web::get().to(polls::index))
            .route("/{question_id}/", web::get().to(polls::detail))
            .route("/{question_id}/results/", web::get().to(polls::results))
            .route("/{question_id}/vote/", web::post().to(polls::vote)),
    )
    .service(web::scope("/api").route("/health", web::get().to(health::health_check)));
}
