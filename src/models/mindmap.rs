use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{AppError, Result};

/// 思维导图分支
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Branch {
    pub title: String,
    pub subbranches: Vec<String>,
}

/// 模型生成的思维导图
///
/// 分支和子分支数量只是提示词中的建议，这里不做限制。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MindMapResult {
    pub central: String,
    pub branches: Vec<Branch>,
}

impl MindMapResult {
    /// 按类型模型检查解码后的参数
    pub fn conform(value: &Value) -> Result<Self> {
        Self::deserialize(value).map_err(|e| AppError::ResultParse(e.to_string()))
    }
}
