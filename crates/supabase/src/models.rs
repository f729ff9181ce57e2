//! 托管存储的线格式模型
//!
//! 托管存储使用snake_case列名，应用内模型序列化为camelCase。
//! 读和写两个方向都经过这里的专用结构体转换，保证边界上的
//! 命名映射是对称的。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use storage::{ContactMessage, ContactMessageCreate, Project, ProjectCreate, ProjectStatus, ProjectUpdate};
use uuid::Uuid;

/// projects表的读记录
///
/// 字段名与表列名一致（Rust字段本身就是snake_case，serde默认不做改写）
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectRecord {
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
    pub status: ProjectStatus,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ProjectRecord> for Project {
    fn from(record: ProjectRecord) -> Self {
        Project {
            id: record.id,
            title: record.title,
            description: record.description,
            long_description: record.long_description,
            image_url: record.image_url,
            technologies: record.technologies,
            featured: record.featured,
            show_links: record.show_links,
            live_url: record.live_url,
            details_url: record.details_url,
            status: record.status,
            sort_order: record.sort_order,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

/// projects表的插入载荷
///
/// ID与created_at由服务端生成，updated_at在构造时刷新
#[derive(Debug, Clone, Serialize)]
pub struct ProjectInsert {
    pub title: String,
    pub description: String,
    pub long_description: Option<String>,
    pub image_url: Option<String>,
    pub technologies: Vec<String>,
    pub featured: bool,
    pub show_links: Option<bool>,
    pub live_url: Option<String>,
    pub details_url: Option<String>,
    pub status: ProjectStatus,
    pub sort_order: i32,
    pub updated_at: DateTime<Utc>,
}

impl From<ProjectCreate> for ProjectInsert {
    fn from(create: ProjectCreate) -> Self {
        ProjectInsert {
            title: create.title,
            description: create.description,
            long_description: create.long_description,
            image_url: create.image_url,
            technologies: create.technologies,
            featured: create.featured,
            show_links: create.show_links,
            live_url: create.live_url,
            details_url: create.details_url,
            status: create.status,
            sort_order: create.sort_order,
            updated_at: Utc::now(),
        }
    }
}

/// projects表的更新载荷
///
/// 未提供的字段不出现在请求体中，服务端保留原值
#[derive(Debug, Clone, Serialize)]
pub struct ProjectPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub technologies: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_links: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProjectStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i32>,
    pub updated_at: DateTime<Utc>,
}

impl From<ProjectUpdate> for ProjectPatch {
    fn from(update: ProjectUpdate) -> Self {
        ProjectPatch {
            title: update.title,
            description: update.description,
            long_description: update.long_description,
            image_url: update.image_url,
            technologies: update.technologies,
            featured: update.featured,
            show_links: update.show_links,
            live_url: update.live_url,
            details_url: update.details_url,
            status: update.status,
            sort_order: update.sort_order,
            updated_at: Utc::now(),
        }
    }
}

/// contact_messages表的读记录
#[derive(Debug, Clone, Deserialize)]
pub struct ContactMessageRecord {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl From<ContactMessageRecord> for ContactMessage {
    fn from(record: ContactMessageRecord) -> Self {
        ContactMessage {
            id: record.id,
            name: record.name,
            email: record.email,
            subject: record.subject,
            message: record.message,
            created_at: record.created_at,
        }
    }
}

/// contact_messages表的插入载荷
#[derive(Debug, Clone, Serialize)]
pub struct ContactMessageInsert {
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
}

impl From<ContactMessageCreate> for ContactMessageInsert {
    fn from(create: ContactMessageCreate) -> Self {
        ContactMessageInsert {
            name: create.name,
            email: create.email,
            subject: create.subject,
            message: create.message,
        }
    }
}
