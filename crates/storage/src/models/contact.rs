//! 联系消息数据模型

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// 一条入站联系消息
///
/// 表单提交后创建，之后只读
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    /// 消息ID，创建时由存储生成
    pub id: Uuid,

    #[schema(example = "Ada")]
    pub name: String,

    #[schema(example = "ada@example.com")]
    pub email: String,

    /// 可选的主题
    pub subject: Option<String>,

    pub message: String,

    /// 创建时间，存储生成
    pub created_at: DateTime<Utc>,
}

/// 联系消息创建参数
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessageCreate {
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
}
