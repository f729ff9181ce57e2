//! 领域模型模块
//!
//! 这里定义对外暴露的业务结构体，JSON序列化统一使用camelCase

pub mod contact;
pub mod project;
pub mod user;

// 重新导出具体的模型
pub use contact::{ContactMessage, ContactMessageCreate};
pub use project::{Project, ProjectCreate, ProjectStatus, ProjectUpdate};
pub use user::{User, UserCreate};
