//! AI 网关模块
//!
//! 对外部 chat completion 服务的唯一依赖点。每次调用只发出一个请求，
//! 不重试，返回 tool call 的原始参数字符串。

pub mod http;
pub mod types;

use async_trait::async_trait;

use crate::error::Result;
use types::CompletionRequest;

pub use http::HttpGateway;
pub use types::{ChatMessage, CompletionResponse, FunctionSpec};

#[async_trait]
pub trait CompletionGateway: Send + Sync {
    /// 发送请求并返回 `choices[0].message.tool_calls[0].function.arguments`
    ///
    /// 429 映射为 `UpstreamRateLimited`，402 映射为 `UpstreamPaymentRequired`，
    /// 其他失败映射为 `Upstream`。
    async fn complete(&self, api_key: &str, request: &CompletionRequest) -> Result<String>;
}

pub fn create_gateway(
    config: &crate::config::config::GatewayConfig,
) -> Result<Box<dyn CompletionGateway>> {
    let gateway = HttpGateway::new(config)?;
    tracing::info!(endpoint = gateway.endpoint(), "AI gateway client ready");
    Ok(Box::new(gateway))
}
