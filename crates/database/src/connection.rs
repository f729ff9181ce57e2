use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};
use std::time::Duration;
use storage::{StorageError, StorageResult};
use tracing::info;

/// 数据库连接池
pub type DatabasePool = Pool<Postgres>;

/// 创建数据库连接池并执行迁移（一站式函数）
///
/// 注意：pool已经是一个智能指针了，所以可以使用.clone()安全跨线程使用
pub async fn initialize_database(database_url: &str) -> StorageResult<DatabasePool> {
    // 低流量的作品集站点，单连接即可满足需求
    let pool = PgPoolOptions::new()
        .max_connections(1)
        .acquire_timeout(Duration::from_secs(10))
        // 30秒空闲则释放
        .idle_timeout(Duration::from_secs(30))
        .test_before_acquire(true)
        .connect(database_url)
        .await
        .map_err(|e| StorageError::connection(format!("连接PostgreSQL数据库失败: {e}")))?;

    info!("🗄️ 数据库连接池创建成功");

    // 执行数据库迁移
    info!("🔄 开始执行数据库迁移...");

    sqlx::migrate!("../../migrations")
        .run(&pool)
        .await
        .map_err(|e| StorageError::migration(format!("数据库迁移失败: {e}")))?;

    info!("✅ 数据库迁移完成");

    Ok(pool)
}
