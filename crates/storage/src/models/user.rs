//! 用户数据模型
//!
//! 通用CRUD脚手架保留的最小账号实体，目前没有任何路由使用它

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 账号信息
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub password: String,
}

/// 账号创建参数
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserCreate {
    pub username: String,
    pub password: String,
}
