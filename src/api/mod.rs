//! API 模块
//!
//! 提供两个生成端点：`/functions/v1/generate-mindmap` 和 `/functions/v1/study-helper`。

pub mod app_state;
pub mod cors;
pub mod dto;
pub mod handlers;
pub mod routes;

use crate::api::app_state::AppState;
use crate::api::cors::cors_headers_middleware;
use axum::Router;
use tower_http::trace::TraceLayer;

pub fn create_router(app_state: AppState) -> Router {
    let functions = Router::new()
        .merge(routes::mindmap_routes::create_mindmap_router())
        .merge(routes::study_routes::create_study_router());

    Router::new()
        .nest("/functions/v1", functions)
        .layer(axum::middleware::from_fn(cors_headers_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
