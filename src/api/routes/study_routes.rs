//! Study Helper Routes

use axum::{Router, routing::post};

use crate::api::app_state::AppState;
use crate::api::handlers::{preflight, study_handler::*};

/// 创建学习助手路由器
pub fn create_study_router() -> Router<AppState> {
    Router::new().route("/study-helper", post(study_helper).options(preflight))
}
