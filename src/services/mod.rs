//! 服务模块

pub mod generation;
pub mod mindmap;
pub mod study;


pub use generation::{GenerationSettings, StructuredGenerator};
pub use mindmap::{MindMapService, create_mindmap_service};
pub use study::{StudyService, create_study_service};
