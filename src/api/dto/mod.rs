//! DTO 模块
//!
//! 定义请求和响应数据结构。

pub mod mindmap_dto;
pub mod study_dto;
