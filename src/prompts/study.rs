//! 学习助手 action 表
//!
//! 每个 action 对应一条不可变的 {系统提示词, 函数声明} 记录。
//! 未识别的 action 在发出任何网关请求之前就会失败。

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde_json::json;

use crate::error::AppError;
use crate::gateway::types::FunctionSpec;

/// 学习助手支持的 action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StudyAction {
    Summarize,
    Flashcards,
    Quiz,
    Explain,
}

impl StudyAction {
    pub const ALL: [StudyAction; 4] = [
        StudyAction::Summarize,
        StudyAction::Flashcards,
        StudyAction::Quiz,
        StudyAction::Explain,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StudyAction::Summarize => "summarize",
            StudyAction::Flashcards => "flashcards",
            StudyAction::Quiz => "quiz",
            StudyAction::Explain => "explain",
        }
    }

    /// 该 action 的提示词和函数声明
    pub fn profile(&self) -> &'static ActionProfile {
        match self {
            StudyAction::Summarize => &SUMMARIZE,
            StudyAction::Flashcards => &FLASHCARDS,
            StudyAction::Quiz => &QUIZ,
            StudyAction::Explain => &EXPLAIN,
        }
    }
}

impl FromStr for StudyAction {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StudyAction::ALL
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| AppError::InvalidAction(s.to_string()))
    }
}

impl fmt::Display for StudyAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 单个 action 的固定配置
#[derive(Debug)]
pub struct ActionProfile {
    pub system_prompt: &'static str,
    pub function: FunctionSpec,
}

static SUMMARIZE: Lazy<ActionProfile> = Lazy::new(|| ActionProfile {
    system_prompt: "You are a study assistant that creates concise, comprehensive summaries of academic content.",
    function: FunctionSpec {
        name: "create_summary".into(),
        description: "Generate a structured summary of academic content".into(),
        parameters: json!({
            "type": "object",
            "properties": {
                "summary": { "type": "string", "description": "The main summary" },
                "keyPoints": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "Key points from the content"
                }
            },
            "required": ["summary", "keyPoints"]
        }),
    },
});

static FLASHCARDS: Lazy<ActionProfile> = Lazy::new(|| ActionProfile {
    system_prompt: "You are a study assistant that creates effective flashcards for memorization.",
    function: FunctionSpec {
        name: "create_flashcards".into(),
        description: "Generate flashcards for study material".into(),
        parameters: json!({
            "type": "object",
            "properties": {
                "flashcards": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "properties": {
                            "question": { "type": "string" },
                            "answer": { "type": "string" }
                        },
                        "required": ["question", "answer"]
                    },
                    "description": "Array of flashcard Q&A pairs"
                }
            },
            "required": ["flashcards"]
        }),
    },
});

static QUIZ: Lazy<ActionProfile> = Lazy::new(|| ActionProfile {
    system_prompt: "You are a study assistant that creates challenging quiz questions to test understanding.",
    function: FunctionSpec {
        name: "create_quiz".into(),
        description: "Generate quiz questions with multiple choice answers".into(),
        parameters: json!({
            "type": "object",
            "properties": {
                "questions": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "properties": {
                            "question": { "type": "string" },
                            "options": {
                                "type": "array",
                                "items": { "type": "string" }
                            },
                            "correctAnswer": { "type": "number", "description": "Index of correct answer (0-3)" },
                            "explanation": { "type": "string" }
                        },
                        "required": ["question", "options", "correctAnswer", "explanation"]
                    }
                }
            },
            "required": ["questions"]
        }),
    },
});

static EXPLAIN: Lazy<ActionProfile> = Lazy::new(|| ActionProfile {
    system_prompt: "You are a study assistant that explains complex concepts in simple, easy-to-understand terms.",
    function: FunctionSpec {
        name: "explain_concept".into(),
        description: "Explain a concept in simple terms".into(),
        parameters: json!({
            "type": "object",
            "properties": {
                "explanation": { "type": "string", "description": "Clear, simple explanation" },
                "examples": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "Real-world examples"
                },
                "relatedConcepts": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "Related concepts to explore"
                }
            },
            "required": ["explanation", "examples"]
        }),
    },
});

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case("summarize", StudyAction::Summarize, "create_summary", json!(["summary", "keyPoints"]))]
    #[case("flashcards", StudyAction::Flashcards, "create_flashcards", json!(["flashcards"]))]
    #[case("quiz", StudyAction::Quiz, "create_quiz", json!(["questions"]))]
    #[case("explain", StudyAction::Explain, "explain_concept", json!(["explanation", "examples"]))]
    fn test_action_profiles(
        #[case] raw: &str,
        #[case] action: StudyAction,
        #[case] function_name: &str,
        #[case] required: serde_json::Value,
    ) {
        let parsed: StudyAction = raw.parse().unwrap();
        assert_eq!(parsed, action);
        assert_eq!(parsed.to_string(), raw);

        let profile = parsed.profile();
        assert_eq!(profile.function.name, function_name);
        assert_eq!(profile.function.parameters["required"], required);
        assert!(profile.system_prompt.starts_with("You are a study assistant"));
    }

    #[rstest]
    #[case("")]
    #[case("Summarize")]
    #[case("translate")]
    #[case(" quiz")]
    fn test_unknown_actions_fail_closed(#[case] raw: &str) {
        let err = raw.parse::<StudyAction>().unwrap_err();
        assert!(matches!(err, AppError::InvalidAction(ref value) if value == raw));
        assert_eq!(err.to_string(), "Invalid action");
    }

    #[test]
    fn test_all_actions_have_distinct_functions() {
        let names: std::collections::HashSet<_> = StudyAction::ALL
            .iter()
            .map(|action| action.profile().function.name.as_str())
            .collect();
        assert_eq!(names.len(), StudyAction::ALL.len());

        for action in StudyAction::ALL {
            assert_eq!(action.as_str().parse::<StudyAction>().unwrap(), action);
        }
    }

    #[test]
    fn test_quiz_item_requirements() {
        let items = &StudyAction::Quiz.profile().function.parameters["properties"]["questions"]["items"];
        assert_eq!(
            items["required"],
            json!(["question", "options", "correctAnswer", "explanation"])
        );
    }
}
