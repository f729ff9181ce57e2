use color_eyre::Result;
use database::{initialize_database, PgStorage};
use shared_lib::config::{AppConfig, BackendConfig};
use std::sync::Arc;
use storage::Storage;
use supabase::SupabaseStorage;
use tracing::info;
use web_service::start_web_service;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let config = AppConfig::load()?;

    // 根据配置存在性选择存储后端，启动后不再切换。
    // handler不感知具体后端，统一通过 Arc<dyn Storage> 访问。
    let storage: Arc<dyn Storage> = match &config.backend {
        BackendConfig::Supabase { endpoint, secret_key } => {
            info!("🔌 使用Supabase REST代理后端: {endpoint}");
            Arc::new(SupabaseStorage::new(endpoint, secret_key))
        }
        BackendConfig::Postgres { database_url } => {
            info!("🔌 使用PostgreSQL关系型后端");
            let pool = initialize_database(database_url).await?;
            Arc::new(PgStorage::new(pool))
        }
    };

    // ctrl-c触发优雅关闭
    let (shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = shutdown_tx.send(true);
        }
    });

    start_web_service(config.port, storage, shutdown_rx).await
}
