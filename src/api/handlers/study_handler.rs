use axum::{Json, body::Bytes, extract::State, response::IntoResponse};
use serde_json::Value;
use tracing::{error, warn};

use crate::{
    api::{app_state::AppState, dto::study_dto::*, handlers::parse_body},
    error::{AppError, Result},
    observability::Endpoint,
};

pub async fn study_helper(
    State(state): State<AppState>,
    body: Bytes,
) -> std::result::Result<impl IntoResponse, AppError> {
    let timer = state.metrics.start(Endpoint::Study);
    let outcome = run(&state, &body).await;
    timer.finish(outcome.as_ref().err());

    let result = outcome.inspect_err(|e| {
        error!(error = %e, kind = e.kind(), "Error in study-helper handler");
    })?;

    Ok(Json(StudyResponse { result }))
}

async fn run(state: &AppState, body: &Bytes) -> Result<Value> {
    let request: StudyRequest = parse_body(body)?;
    let action = request.action_name().inspect_err(|e| {
        warn!(error = ?e, "Rejected non-string study action");
    })?;
    let content = request.content_text();
    state
        .study_service
        .process(content.as_deref(), action)
        .await
}
