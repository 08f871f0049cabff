//! 学习助手结果模型

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{AppError, Result};
use crate::prompts::StudyAction;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub summary: String,
    pub key_points: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flashcard {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlashcardSet {
    pub flashcards: Vec<Flashcard>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    /// 声明为 JSON number，`1.0` 与 `1` 等价
    pub correct_answer: f64,
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quiz {
    pub questions: Vec<QuizQuestion>,
}

impl Quiz {
    /// 每道题至少两个选项，正确答案下标在选项范围内
    pub fn check_answers(&self) -> Result<()> {
        for (i, q) in self.questions.iter().enumerate() {
            if q.options.len() < 2 {
                return Err(AppError::ResultParse(format!(
                    "question {} has {} options, expected at least 2",
                    i,
                    q.options.len()
                )));
            }
            let answer = q.correct_answer;
            if !answer.is_finite() || answer.fract() != 0.0 {
                return Err(AppError::ResultParse(format!(
                    "question {} correctAnswer {} is not a whole number",
                    i, answer
                )));
            }
            if answer < 0.0 || answer >= q.options.len() as f64 {
                return Err(AppError::ResultParse(format!(
                    "question {} correctAnswer {} is out of range for {} options",
                    i,
                    answer,
                    q.options.len()
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Explanation {
    pub explanation: String,
    pub examples: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_concepts: Option<Vec<String>>,
}

/// 按 action 区分的学习结果
#[derive(Debug, Clone, PartialEq)]
pub enum StudyResult {
    Summary(Summary),
    Flashcards(FlashcardSet),
    Quiz(Quiz),
    Explanation(Explanation),
}

impl StudyResult {
    /// 把解码后的参数按 action 对应的类型模型检查
    pub fn conform(action: StudyAction, value: &Value) -> Result<Self> {
        let result = match action {
            StudyAction::Summarize => Summary::deserialize(value).map(StudyResult::Summary),
            StudyAction::Flashcards => FlashcardSet::deserialize(value).map(StudyResult::Flashcards),
            StudyAction::Quiz => Quiz::deserialize(value).map(StudyResult::Quiz),
            StudyAction::Explain => Explanation::deserialize(value).map(StudyResult::Explanation),
        }
        .map_err(|e| AppError::ResultParse(e.to_string()))?;

        if let StudyResult::Quiz(quiz) = &result {
            quiz.check_answers()?;
        }

        Ok(result)
    }
}
