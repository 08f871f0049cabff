//! Chat completion 线路类型
//!
//! OpenAI 风格的请求/响应结构。只声明一个工具并强制模型调用它，
//! 模型的结构化答案以 JSON 字符串形式出现在 tool call 的 `arguments` 字段中。

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 对话消息
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    /// 缺失时整个字段不序列化
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".into(),
            content: Some(content.into()),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::user_content(Some(content.into()))
    }

    /// 内容可能缺失的用户消息
    pub fn user_content(content: Option<String>) -> Self {
        Self {
            role: "user".into(),
            content,
        }
    }
}

/// 函数签名：名称、描述和 JSON Schema 参数
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionSpec {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}

/// 工具声明
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolSpec {
    #[serde(rename = "type")]
    pub tool_type: String,
    pub function: FunctionSpec,
}

/// 被强制调用的函数
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionName {
    pub name: String,
}

/// 强制工具选择
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolChoice {
    #[serde(rename = "type")]
    pub choice_type: String,
    pub function: FunctionName,
}

/// Chat completion 请求
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub tools: Vec<ToolSpec>,
    pub tool_choice: ToolChoice,
}

impl CompletionRequest {
    /// 构建只声明并强制一个函数的请求
    pub fn forced(model: impl Into<String>, messages: Vec<ChatMessage>, function: FunctionSpec) -> Self {
        let tool_choice = ToolChoice {
            choice_type: "function".into(),
            function: FunctionName {
                name: function.name.clone(),
            },
        };

        Self {
            model: model.into(),
            messages,
            tools: vec![ToolSpec {
                tool_type: "function".into(),
                function,
            }],
            tool_choice,
        }
    }

    /// 被强制调用的函数名
    pub fn forced_function(&self) -> &str {
        &self.tool_choice.function.name
    }
}

/// Chat completion 响应，只解析需要的字段
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Choice {
    #[serde(default)]
    pub message: Option<AssistantMessage>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssistantMessage {
    #[serde(default)]
    pub tool_calls: Option<Vec<ToolCall>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ToolCall {
    #[serde(default)]
    pub function: Option<FunctionCall>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FunctionCall {
    #[serde(default)]
    pub name: Option<String>,
    pub arguments: String,
}

impl CompletionResponse {
    /// 取出 `choices[0].message.tool_calls[0].function.arguments`
    pub fn into_arguments(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()?
            .message?
            .tool_calls?
            .into_iter()
            .next()?
            .function
            .map(|f| f.arguments)
    }
}
