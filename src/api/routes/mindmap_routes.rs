//! Mind Map Routes

use axum::{Router, routing::post};

use crate::api::app_state::AppState;
use crate::api::handlers::{mindmap_handler::*, preflight};

/// 创建思维导图路由器
pub fn create_mindmap_router() -> Router<AppState> {
    Router::new().route("/generate-mindmap", post(generate_mindmap).options(preflight))
}
