//! 关系型存储适配器
//!
//! 这个模块提供了数据库连接、迁移和 [`storage::Storage`] 的PostgreSQL实现。
//! 过滤与排序均下推到数据库执行，每个操作都是独立的单条语句，不使用事务。

pub mod connection;
pub mod models;
pub mod pg;

pub use connection::{initialize_database, DatabasePool};
pub use pg::PgStorage;
