use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tokio_util::sync::CancellationToken;

use crate::catalog::{self, Technology, Topic};
use crate::content::AiResponse;
use crate::language::Language;
use crate::AppState;

use super::models::{ErrorResponse, ExplainRequest, FollowUpRequest};

type ApiError = (StatusCode, Json<ErrorResponse>);

fn error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}

fn lookup_technology(id: &str) -> Result<&'static Technology, ApiError> {
    catalog::find_technology(id)
        .ok_or_else(|| error(StatusCode::NOT_FOUND, format!("unknown technology \"{id}\"")))
}

fn check_selection(technology: &str, topic: &str) -> Result<(), ApiError> {
    let tech = lookup_technology(technology)?;
    if tech.find_topic(topic).is_none() {
        return Err(error(
            StatusCode::BAD_REQUEST,
            format!("unknown topic \"{topic}\" for technology \"{technology}\""),
        ));
    }
    Ok(())
}

fn resolve_language(state: &AppState, code: Option<&str>) -> Language {
    code.map(Language::from_code)
        .unwrap_or(state.default_language)
}

pub async fn list_technologies() -> Json<&'static [Technology]> {
    Json(catalog::technologies())
}

pub async fn list_topics(
    Path(technology): Path<String>,
) -> Result<Json<&'static [Topic]>, ApiError> {
    Ok(Json(lookup_technology(&technology)?.topics))
}

pub async fn explain(
    State(state): State<AppState>,
    Json(payload): Json<ExplainRequest>,
) -> Result<Json<AiResponse>, ApiError> {
    check_selection(&payload.technology, &payload.topic)?;
    let language = resolve_language(&state, payload.language.as_deref());

    let response = state
        .tutor
        .explain(
            &payload.technology,
            &payload.topic,
            language,
            &CancellationToken::new(),
        )
        .await;
    Ok(Json(response))
}

pub async fn follow_up(
    State(state): State<AppState>,
    Json(payload): Json<FollowUpRequest>,
) -> Result<Json<AiResponse>, ApiError> {
    let question = payload.question.trim();
    if question.is_empty() {
        return Err(error(
            StatusCode::BAD_REQUEST,
            "Field \"question\" must be a non-empty string",
        ));
    }
    check_selection(&payload.technology, &payload.topic)?;
    let language = resolve_language(&state, payload.language.as_deref());

    let response = state
        .tutor
        .follow_up(
            question,
            &payload.technology,
            &payload.topic,
            language,
            &CancellationToken::new(),
        )
        .await;
    Ok(Json(response))
}

pub async fn not_found() -> Response {
    error(StatusCode::NOT_FOUND, "route not found").into_response()
}
