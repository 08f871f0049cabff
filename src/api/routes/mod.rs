//! Routes 模块
//!
//! 定义 API 路由。

pub mod mindmap_routes;
pub mod study_routes;
