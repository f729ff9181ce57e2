use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::borrow::Cow;
use storage::StorageError;
use thiserror::Error;
use tracing::error;
use validator::ValidationErrors;

/// 使用 [`thiserror`] 定义错误类型
/// 方便根据类型转换为相应的http错误码
#[derive(Error, Debug)]
pub enum AppError {
    /// 数据验证错误，由用户输入不正确导致，转换为400并附带字段级错误明细
    #[error(transparent)]
    ValidationFailed(#[from] ValidationErrors),

    /// 单资源查询未命中，转换为404
    #[error("{0}")]
    NotFound(String),

    /// 存储后端错误，统一转换为500；详细信息只记录在服务端日志，
    /// 不向调用方泄漏
    #[error(transparent)]
    StorageError(#[from] StorageError),
}

/// Tell axum how to convert `AppError` into a response.
///
/// 所有错误响应都是JSON体，形状与成功响应保持一致的 `success` 字段
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::ValidationFailed(err) => {
                let errors: Vec<_> = err
                    .field_errors()
                    .iter()
                    .flat_map(|(field, errors)| {
                        let field = field.to_string();
                        errors.iter().map(move |e| {
                            json!({
                                "field": field,
                                "message": e.message.clone().unwrap_or(Cow::Borrowed("Invalid value")),
                            })
                        })
                    })
                    .collect();

                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({
                        "success": false,
                        "message": "Please check your input",
                        "errors": errors,
                    })),
                )
                    .into_response()
            }
            AppError::NotFound(message) => (
                StatusCode::NOT_FOUND,
                Json(json!({
                    "success": false,
                    "message": message,
                })),
            )
                .into_response(),
            AppError::StorageError(StorageError::NotFound(message)) => (
                StatusCode::NOT_FOUND,
                Json(json!({
                    "success": false,
                    "message": message,
                })),
            )
                .into_response(),
            AppError::StorageError(err) => {
                error!("❌ 存储后端错误: {err}");

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "success": false,
                        "message": "Something went wrong. Please try again later.",
                    })),
                )
                    .into_response()
            }
        }
    }
}
