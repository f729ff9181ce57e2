//! Web服务模块
//!
//! 提供作品集站点的HTTP API接口和在线文档服务

use color_eyre::Result;
use std::sync::Arc;
use storage::Storage;
use tokio::sync::watch::Receiver;
use tracing::info;

pub mod middleware;
pub mod models;
pub mod routes;

/// 应用共享状态
///
/// 方便跨线程在多个axum handler中使用。
/// 存放进程级的存储后端实例，启动时构造一次，整个进程生命周期内共享。
#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn Storage>,
}

/// 启动 Web 服务
pub async fn start_web_service(port: u16, storage: Arc<dyn Storage>, mut shutdown_rx: Receiver<bool>) -> Result<()> {
    let shared_state = AppState { storage };

    let router = routes::create_app_router(shared_state);

    let bind_addr = format!("0.0.0.0:{port}");
    info!("🚀 启动 Web Service 在 {}", bind_addr);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(async move {
            let _ = shutdown_rx.changed().await;
            info!("🛑 Web Service 正在关闭...");
        })
        .await?;

    Ok(())
}
