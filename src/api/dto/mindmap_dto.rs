//! 思维导图 DTO

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 生成思维导图请求
///
/// 概念由调用方保证非空，这里接受任意 JSON 值并原样嵌入提示词。
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct GenerateMindMapRequest {
    /// 概念
    pub concept: Option<Value>,
}

impl GenerateMindMapRequest {
    /// 嵌入提示词的概念文本：字符串原样使用，其他值使用其 JSON 文本，缺失为 `undefined`
    pub fn concept_text(&self) -> String {
        match &self.concept {
            None => "undefined".to_string(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }
}

/// 生成思维导图响应
#[derive(Debug, Serialize)]
pub struct GenerateMindMapResponse {
    /// 模型返回的原始思维导图
    pub mindmap: Value,
}
