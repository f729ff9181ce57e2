use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// 联系表单提交参数
#[derive(Deserialize, Debug, ToSchema, Validate)]
pub struct ContactSubmit {
    #[schema(example = "Ada")]
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[schema(example = "ada@example.com")]
    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[schema(example = "Hi")]
    /// 可选的主题
    pub subject: Option<String>,

    #[validate(length(min = 1, message = "Message is required"))]
    pub message: String,
}

/// 联系表单提交成功的响应
#[derive(Serialize, Debug, ToSchema)]
pub struct ContactReply {
    pub success: bool,

    #[schema(example = "Thank you for your message! I'll get back to you soon.")]
    pub message: String,

    /// 生成的消息ID
    pub id: Uuid,
}
