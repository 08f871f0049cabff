use axum::{Json, body::Bytes, extract::State, response::IntoResponse};
use serde_json::Value;
use tracing::error;

use crate::{
    api::{app_state::AppState, dto::mindmap_dto::*, handlers::parse_body},
    error::{AppError, Result},
    observability::Endpoint,
};

pub async fn generate_mindmap(
    State(state): State<AppState>,
    body: Bytes,
) -> std::result::Result<impl IntoResponse, AppError> {
    let timer = state.metrics.start(Endpoint::MindMap);
    let outcome = run(&state, &body).await;
    timer.finish(outcome.as_ref().err());

    let mindmap = outcome.inspect_err(|e| {
        error!(error = %e, kind = e.kind(), "Error in generate-mindmap handler");
    })?;

    Ok(Json(GenerateMindMapResponse { mindmap }))
}

async fn run(state: &AppState, body: &Bytes) -> Result<Value> {
    let request: GenerateMindMapRequest = parse_body(body)?;
    state.mindmap_service.generate(&request.concept_text()).await
}
