//! 结果模型
//!
//! 模型返回结果的类型化表示，用于严格结果检查。

pub mod mindmap;
pub mod study;

pub use mindmap::{Branch, MindMapResult};
pub use study::{Explanation, Flashcard, FlashcardSet, Quiz, QuizQuestion, StudyResult, Summary};
