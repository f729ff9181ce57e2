//! 请求日志中间件

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use std::time::Instant;
use tracing::info;

/// 记录业务请求的方法、路径、状态码与耗时
///
/// 仅记录 `/api` 前缀的请求，文档页面等其他路径不记录
pub async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let start = Instant::now();

    let response = next.run(request).await;

    if path.starts_with("/api") {
        info!(
            "{} {} {} in {}ms",
            method,
            path,
            response.status().as_u16(),
            start.elapsed().as_millis()
        );
    }

    response
}
