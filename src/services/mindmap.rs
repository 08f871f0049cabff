//! 思维导图服务

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::info;

use crate::error::Result;
use crate::models::mindmap::MindMapResult;
use crate::prompts::mindmap;
use crate::services::generation::StructuredGenerator;

#[async_trait]
pub trait MindMapService: Send + Sync {
    /// 为概念生成思维导图，返回模型给出的原始结构
    async fn generate(&self, concept: &str) -> Result<Value>;
}

pub struct MindMapServiceImpl {
    generator: Arc<StructuredGenerator>,
}

impl MindMapServiceImpl {
    pub fn new(generator: Arc<StructuredGenerator>) -> Self {
        Self { generator }
    }
}

#[async_trait]
impl MindMapService for MindMapServiceImpl {
    async fn generate(&self, concept: &str) -> Result<Value> {
        info!(concept, "Generating mind map");

        let mindmap = self
            .generator
            .generate(mindmap::messages(concept), mindmap::function())
            .await?;

        if self.generator.strict_results() {
            MindMapResult::conform(&mindmap)?;
        }

        Ok(mindmap)
    }
}

pub fn create_mindmap_service(generator: Arc<StructuredGenerator>) -> Box<dyn MindMapService> {
    Box::new(MindMapServiceImpl::new(generator))
}
