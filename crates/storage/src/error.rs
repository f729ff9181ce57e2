use thiserror::Error;

/// 存储层错误类型
///
/// 两种后端适配器共用一个错误类型，调用方不需要关心错误来自哪种存储。
#[derive(Error, Debug)]
pub enum StorageError {
    /// SQLX 错误
    #[error("数据库操作错误: {0}")]
    Database(#[from] sqlx::Error),

    /// 出站HTTP请求错误
    #[error("HTTP请求错误: {0}")]
    Http(#[from] reqwest::Error),

    /// 托管后端返回了非2xx状态码
    #[error("Supabase API error: {status} {reason}")]
    Api { status: u16, reason: String },

    /// 存储返回的数据无法转换为领域模型
    #[error("数据解码错误: {0}")]
    Decode(String),

    /// 记录不存在
    #[error("记录不存在: {0}")]
    NotFound(String),

    /// 连接错误
    #[error("数据库连接错误: {0}")]
    Connection(String),

    /// 迁移错误
    #[error("数据库迁移错误: {0}")]
    Migration(String),
}

impl StorageError {
    /// 创建连接错误
    pub fn connection<T: ToString>(msg: T) -> Self {
        Self::Connection(msg.to_string())
    }

    /// 创建迁移错误
    pub fn migration<T: ToString>(msg: T) -> Self {
        Self::Migration(msg.to_string())
    }

    /// 创建解码错误
    pub fn decode<T: ToString>(msg: T) -> Self {
        Self::Decode(msg.to_string())
    }

    /// 创建记录不存在错误
    pub fn not_found<T: ToString>(msg: T) -> Self {
        Self::NotFound(msg.to_string())
    }
}
