//! 存储抽象模块
//!
//! 定义领域模型、存储能力接口 [`Storage`] 和统一的错误类型。
//! 具体的后端适配器（关系型数据库 / REST代理）在各自的crate中实现。

pub mod error;
pub mod models;
pub mod traits;

pub use error::StorageError;
pub use models::contact::{ContactMessage, ContactMessageCreate};
pub use models::project::{Project, ProjectCreate, ProjectStatus, ProjectUpdate};
pub use models::user::{User, UserCreate};
pub use traits::Storage;

/// 存储操作结果类型
pub type StorageResult<T> = Result<T, StorageError>;
