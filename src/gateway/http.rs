//! AI 网关 HTTP 客户端

use async_trait::async_trait;
use tracing::{debug, error};

use crate::config::config::GatewayConfig;
use crate::error::{AppError, Result};
use crate::gateway::CompletionGateway;
use crate::gateway::types::{CompletionRequest, CompletionResponse};

/// 通过 HTTPS 调用 chat completion 网关
pub struct HttpGateway {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpGateway {
    pub fn new(config: &GatewayConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(std::time::Duration::from_secs(secs));
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl CompletionGateway for HttpGateway {
    async fn complete(&self, api_key: &str, request: &CompletionRequest) -> Result<String> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            match status.as_u16() {
                429 => return Err(AppError::UpstreamRateLimited),
                402 => return Err(AppError::UpstreamPaymentRequired),
                code => {
                    let error_text = response.text().await.unwrap_or_default();
                    error!(status = code, body = %error_text, "AI gateway error");
                    return Err(AppError::Upstream("AI gateway error".to_string()));
                }
            }
        }

        let raw = response.text().await?;
        debug!(function = request.forced_function(), reply = %raw, "AI response received");

        let envelope: CompletionResponse = serde_json::from_str(&raw)
            .map_err(|e| AppError::Upstream(format!("Invalid AI gateway response: {}", e)))?;

        envelope
            .into_arguments()
            .ok_or_else(|| AppError::Upstream("No tool call in response".to_string()))
    }
}
