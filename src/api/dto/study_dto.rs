//! 学习助手 DTO

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{AppError, Result};

/// 学习助手请求
///
/// 两个字段都接受任意 JSON 值：非字符串的 action 按未知 action 处理，
/// content 原样转发。
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct StudyRequest {
    /// 学习内容
    pub content: Option<Value>,
    /// summarize | flashcards | quiz | explain
    pub action: Option<Value>,
}

impl StudyRequest {
    /// action 名称，非字符串时返回 `InvalidAction`
    pub fn action_name(&self) -> Result<&str> {
        match &self.action {
            Some(Value::String(s)) => Ok(s.as_str()),
            Some(other) => Err(AppError::InvalidAction(other.to_string())),
            None => Err(AppError::InvalidAction("undefined".to_string())),
        }
    }

    /// 用户消息内容，缺失或为 null 时不发送
    pub fn content_text(&self) -> Option<String> {
        match &self.content {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => Some(other.to_string()),
        }
    }
}

/// 学习助手响应
#[derive(Debug, Serialize)]
pub struct StudyResponse {
    /// 模型返回的原始结果
    pub result: Value,
}
