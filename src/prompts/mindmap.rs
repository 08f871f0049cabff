//! 思维导图提示词与参数 Schema

use once_cell::sync::Lazy;
use serde_json::{Value, json};

use crate::gateway::types::{ChatMessage, FunctionSpec};

pub const FUNCTION_NAME: &str = "create_mindmap";

const FUNCTION_DESCRIPTION: &str = "Generate a structured mind map";

pub const SYSTEM_PROMPT: &str = "You are a mind map generator. Create hierarchical mind maps with a central concept and related branches. Return only valid JSON.";

static PARAMETERS: Lazy<Value> = Lazy::new(|| {
    json!({
        "type": "object",
        "properties": {
            "central": { "type": "string" },
            "branches": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "title": { "type": "string" },
                        "subbranches": {
                            "type": "array",
                            "items": { "type": "string" }
                        }
                    },
                    "required": ["title", "subbranches"]
                }
            }
        },
        "required": ["central", "branches"]
    })
});

/// 用户指令：概念、目标结构和分支数量提示
pub fn user_prompt(concept: &str) -> String {
    format!(
        r#"Create a detailed mind map for the concept: "{concept}". Return a JSON object with this structure:
{{
  "central": "main concept",
  "branches": [
    {{
      "title": "branch name",
      "subbranches": ["item1", "item2", "item3"]
    }}
  ]
}}
Include 4-6 main branches, each with 3-5 subbranches. Make it educational and comprehensive."#
    )
}

pub fn messages(concept: &str) -> Vec<ChatMessage> {
    vec![ChatMessage::system(SYSTEM_PROMPT), ChatMessage::user(user_prompt(concept))]
}

pub fn function() -> FunctionSpec {
    FunctionSpec {
        name: FUNCTION_NAME.into(),
        description: FUNCTION_DESCRIPTION.into(),
        parameters: PARAMETERS.clone(),
    }
}
