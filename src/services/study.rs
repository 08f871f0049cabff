//! 学习助手服务

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{info, warn};

use crate::error::Result;
use crate::gateway::types::ChatMessage;
use crate::models::study::StudyResult;
use crate::prompts::StudyAction;
use crate::services::generation::StructuredGenerator;

#[async_trait]
pub trait StudyService: Send + Sync {
    /// 按 action 处理学习内容
    ///
    /// 未识别的 action 在发出网关请求之前返回 `InvalidAction`。
    /// `content` 为空时用户消息不带内容字段。
    async fn process(&self, content: Option<&str>, action: &str) -> Result<Value>;
}

pub struct StudyServiceImpl {
    generator: Arc<StructuredGenerator>,
}

impl StudyServiceImpl {
    pub fn new(generator: Arc<StructuredGenerator>) -> Self {
        Self { generator }
    }
}

#[async_trait]
impl StudyService for StudyServiceImpl {
    async fn process(&self, content: Option<&str>, action: &str) -> Result<Value> {
        let action: StudyAction = action.parse().inspect_err(|_| {
            warn!(action, "Rejected unknown study action");
        })?;
        info!(%action, "Processing study request");

        let profile = action.profile();
        let messages = vec![
            ChatMessage::system(profile.system_prompt),
            ChatMessage::user_content(content.map(str::to_string)),
        ];

        let result = self
            .generator
            .generate(messages, profile.function.clone())
            .await?;

        if self.generator.strict_results() {
            StudyResult::conform(action, &result)?;
        }

        Ok(result)
    }
}

pub fn create_study_service(generator: Arc<StructuredGenerator>) -> Box<dyn StudyService> {
    Box::new(StudyServiceImpl::new(generator))
}
