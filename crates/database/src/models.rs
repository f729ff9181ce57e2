//! 数据库行模型
//!
//! 这里定义与数据库表对应的结构体以及到领域模型的转换。
//! `status` 列是受CHECK约束的文本，读取时解析为枚举。

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use storage::{ContactMessage, Project, ProjectStatus, StorageError, User};
use uuid::Uuid;

/// projects表行结构
#[derive(Debug, Clone, FromRow)]
pub struct ProjectRow {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub long_description: Option<String>,
    pub image_url: Option<String>,
    pub technologies: Vec<String>,
    pub featured: bool,
    pub show_links: Option<bool>,
    pub live_url: Option<String>,
    pub details_url: Option<String>,
    pub status: String,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<ProjectRow> for Project {
    type Error = StorageError;

    fn try_from(row: ProjectRow) -> Result<Self, Self::Error> {
        let status = row.status.parse::<ProjectStatus>().map_err(StorageError::decode)?;

        Ok(Project {
            id: row.id,
            title: row.title,
            description: row.description,
            long_description: row.long_description,
            image_url: row.image_url,
            technologies: row.technologies,
            featured: row.featured,
            show_links: row.show_links,
            live_url: row.live_url,
            details_url: row.details_url,
            status,
            sort_order: row.sort_order,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// users表行结构
#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: Uuid,
    pub username: String,
    pub password: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: row.id,
            username: row.username,
            password: row.password,
        }
    }
}

/// contact_messages表行结构
#[derive(Debug, Clone, FromRow)]
pub struct ContactMessageRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl From<ContactMessageRow> for ContactMessage {
    fn from(row: ContactMessageRow) -> Self {
        ContactMessage {
            id: row.id,
            name: row.name,
            email: row.email,
            subject: row.subject,
            message: row.message,
            created_at: row.created_at,
        }
    }
}
