//! 结构化生成
//!
//! 两个端点共用的调用流程：读取凭证、构建强制工具调用请求、
//! 调用网关一次、把 tool call 参数字符串再解析一次 JSON。

use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::config::config::GatewayConfig;
use crate::config::credentials::CredentialSource;
use crate::error::{AppError, Result};
use crate::gateway::CompletionGateway;
use crate::gateway::types::{ChatMessage, CompletionRequest, FunctionSpec};

/// 生成设置
#[derive(Debug, Clone)]
pub struct GenerationSettings {
    /// 模型标识
    pub model: String,
    /// 是否按类型模型检查结果
    pub strict_results: bool,
}

impl From<&GatewayConfig> for GenerationSettings {
    fn from(config: &GatewayConfig) -> Self {
        Self {
            model: config.model.clone(),
            strict_results: config.strict_results,
        }
    }
}

/// 网关、凭证和设置的组合
pub struct StructuredGenerator {
    gateway: Arc<dyn CompletionGateway>,
    credentials: Arc<dyn CredentialSource>,
    settings: GenerationSettings,
}

impl StructuredGenerator {
    pub fn new(
        gateway: Arc<dyn CompletionGateway>,
        credentials: Arc<dyn CredentialSource>,
        settings: GenerationSettings,
    ) -> Self {
        Self {
            gateway,
            credentials,
            settings,
        }
    }

    pub fn strict_results(&self) -> bool {
        self.settings.strict_results
    }

    /// 强制模型调用 `function` 并返回解码后的参数
    pub async fn generate(&self, messages: Vec<ChatMessage>, function: FunctionSpec) -> Result<Value> {
        let api_key = self.credentials.api_key()?;
        let request = CompletionRequest::forced(self.settings.model.clone(), messages, function);

        let arguments = self.gateway.complete(&api_key, &request).await?;
        let value = parse_arguments(&arguments)?;
        debug!(function = request.forced_function(), result = %value, "Generated result");

        Ok(value)
    }
}

/// tool call 参数本身是 JSON 文本，需要第二次解析
pub fn parse_arguments(arguments: &str) -> Result<Value> {
    serde_json::from_str(arguments).map_err(|e| AppError::ResultParse(e.to_string()))
}
