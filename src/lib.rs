//! Studymate - AI 学习助手服务
//!
//! 把学生输入的文本转发给外部 chat completion 网关，生成摘要、抽认卡、
//! 测验、讲解和思维导图。每个请求独立处理，不做持久化。

pub mod api;
pub mod config;
pub mod error;
pub mod gateway;
pub mod models;
pub mod observability;
pub mod prompts;
pub mod services;
