//! 错误处理模块
//!
//! 定义应用程序的错误类型，以及到 HTTP 响应的唯一转换点。

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 网关限流时返回给客户端的固定消息
pub const RATE_LIMITED_MESSAGE: &str = "Rate limit exceeded. Please try again later.";

/// 网关要求付费时返回给客户端的固定消息
pub const PAYMENT_REQUIRED_MESSAGE: &str = "Payment required. Please add credits to continue.";

/// 应用程序错误类型
#[derive(Error, Debug)]
pub enum AppError {
    /// 配置错误（例如缺少网关凭证）
    #[error("{0}")]
    Config(String),

    /// 网关返回 429
    #[error("Rate limit exceeded. Please try again later.")]
    UpstreamRateLimited,

    /// 网关返回 402
    #[error("Payment required. Please add credits to continue.")]
    UpstreamPaymentRequired,

    /// 其他网关失败：非成功状态、传输错误、缺少 tool call
    #[error("{0}")]
    Upstream(String),

    /// tool call 参数无法解析
    #[error("Failed to parse AI result: {0}")]
    ResultParse(String),

    /// 无法识别的 action，携带原始值用于日志
    #[error("Invalid action")]
    InvalidAction(String),

    /// 请求体不是合法 JSON
    #[error("Invalid request body: {0}")]
    InvalidRequest(String),
}

impl AppError {
    /// 错误对应的 HTTP 状态码
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::UpstreamRateLimited => StatusCode::TOO_MANY_REQUESTS,
            AppError::UpstreamPaymentRequired => StatusCode::PAYMENT_REQUIRED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 用于指标标签的错误类别
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Config(_) => "config",
            AppError::UpstreamRateLimited => "rate_limited",
            AppError::UpstreamPaymentRequired => "payment_required",
            AppError::Upstream(_) => "upstream",
            AppError::ResultParse(_) => "result_parse",
            AppError::InvalidAction(_) => "invalid_action",
            AppError::InvalidRequest(_) => "invalid_request",
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Upstream(e.to_string())
    }
}

/// Axum response implementation for AppError
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::new(&self.to_string()));
        (status, body).into_response()
    }
}

/// 错误响应
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// 错误消息
    pub error: String,
}

impl ErrorResponse {
    /// 创建新错误响应
    pub fn new(message: &str) -> Self {
        Self {
            error: message.to_string(),
        }
    }
}

/// 结果类型别名
pub type Result<T> = std::result::Result<T, AppError>;
