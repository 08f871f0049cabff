//! 提示词模块
//!
//! 两个端点使用的固定提示词和工具参数 Schema。

pub mod mindmap;
pub mod study;

pub use study::{ActionProfile, StudyAction};
