//! 联系表单接口
//!

use crate::models::contact::{ContactReply, ContactSubmit};
use crate::models::err::AppError;
use crate::AppState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use storage::{ContactMessage, ContactMessageCreate};
use tracing::{debug, info};
use validator::Validate;

/// 提交联系消息
///
/// 校验输入后写入存储，返回生成的消息ID。
/// 校验失败返回400，响应体带字段级错误明细。
#[utoipa::path(post,
    path = "/contact",
    tag = "contact",
    request_body = ContactSubmit,
    responses(
        (status = 201, description = "Message stored", body = ContactReply),
        (status = 400, description = "Validation failure with per-field errors"),
        (status = 500, description = "Storage failure"),
    ),
)]
pub async fn submit_contact(
    State(state): State<AppState>,
    Json(submit): Json<ContactSubmit>,
) -> Result<(StatusCode, Json<ContactReply>), AppError> {
    debug!("📨 收到联系表单提交 {:#?}", submit);

    // 验证输入参数，确保有效性。任何存储调用之前完成。
    submit.validate()?;

    let message = state
        .storage
        .create_contact_message(ContactMessageCreate {
            name: submit.name,
            email: submit.email,
            subject: submit.subject,
            message: submit.message,
        })
        .await?;

    // 真实部署中这里一般还会发送一封邮件通知
    info!("✉️ 新的联系消息: {} <{}> ({})", message.name, message.email, message.id);

    Ok((
        StatusCode::CREATED,
        Json(ContactReply {
            success: true,
            message: "Thank you for your message! I'll get back to you soon.".to_string(),
            id: message.id,
        }),
    ))
}

/// 查询全部联系消息
///
/// 管理用途，按创建时间降序返回
#[utoipa::path(get,
    path = "/contact",
    tag = "contact",
    responses(
        (status = 200, description = "All contact messages, newest first", body = [ContactMessage]),
        (status = 500, description = "Storage failure"),
    ),
)]
pub async fn list_contact_messages(State(state): State<AppState>) -> Result<Json<Vec<ContactMessage>>, AppError> {
    debug!("🔍 查询联系消息列表");

    let messages = state.storage.get_contact_messages().await?;

    Ok(Json(messages))
}
