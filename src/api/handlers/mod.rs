//! Handlers 模块

pub mod mindmap_handler;
pub mod study_handler;

use axum::{body::Bytes, http::StatusCode};
use serde::de::DeserializeOwned;

use crate::error::{AppError, Result};

/// CORS 预检：空响应体，CORS 头由中间件附加
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

/// 请求体无法解析时按 500 处理，而不是使用 Json 提取器的 4xx 拒绝
pub(crate) fn parse_body<T: DeserializeOwned>(body: &Bytes) -> Result<T> {
    serde_json::from_slice(body).map_err(|e| AppError::InvalidRequest(e.to_string()))
}
