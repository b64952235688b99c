mod handlers;
mod models;

use axum::{
    routing::{get, post},
    Router,
};

use crate::AppState;

pub use models::{ErrorResponse, ExplainRequest, FollowUpRequest};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/technologies", get(handlers::list_technologies))
        .route("/technologies/:technology/topics", get(handlers::list_topics))
        .route("/explain", post(handlers::explain))
        .route("/follow-up", post(handlers::follow_up))
        .fallback(handlers::not_found)
        .with_state(state)
}
