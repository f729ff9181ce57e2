//! 共享基础库
//!
//! 目前只包含程序配置的加载逻辑

pub mod config;

pub use config::{AppConfig, BackendConfig};
