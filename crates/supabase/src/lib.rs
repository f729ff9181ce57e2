//! REST代理存储适配器
//!
//! 通过托管数据库服务（Supabase）自动生成的REST接口（PostgREST）
//! 实现 [`storage::Storage`] 能力，不需要直接的数据库连接。

pub mod adapter;
pub mod client;
pub mod models;

pub use adapter::SupabaseStorage;
pub use client::SupabaseClient;
