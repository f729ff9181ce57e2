//! 项目数据模型
//!
//! 作品集项目是本系统的核心实体，排序约定为 `sort_order` 升序、
//! 创建时间降序兜底。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;

/// 项目生命周期状态
///
/// 数据库侧通过CHECK约束限制为这三个小写值
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Active,
    Archived,
    Draft,
}

impl ProjectStatus {
    /// 数据库中存储的文本值
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Active => "active",
            ProjectStatus::Archived => "archived",
            ProjectStatus::Draft => "draft",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(ProjectStatus::Active),
            "archived" => Ok(ProjectStatus::Archived),
            "draft" => Ok(ProjectStatus::Draft),
            other => Err(format!("未知的项目状态: {other}")),
        }
    }
}

/// 作品集项目信息
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// 项目ID，创建时由存储生成
    pub id: Uuid,

    #[schema(example = "Brand Identity System")]
    /// 项目标题
    pub title: String,

    /// 项目简介
    pub description: String,

    /// 详细介绍（可选）
    pub long_description: Option<String>,

    /// 配图地址（可选）
    pub image_url: Option<String>,

    /// 使用的技术/方法标签，有序
    pub technologies: Vec<String>,

    /// 是否精选项目
    pub featured: bool,

    /// 是否展示外部链接（可选）
    pub show_links: Option<bool>,

    /// 线上地址（可选）
    pub live_url: Option<String>,

    /// 详情页地址（可选）
    pub details_url: Option<String>,

    /// 生命周期状态
    pub status: ProjectStatus,

    #[schema(example = 1)]
    /// 排序权重，越小越靠前
    pub sort_order: i32,

    /// 创建时间，存储生成
    pub created_at: DateTime<Utc>,

    /// 最近更新时间，每次写入刷新
    pub updated_at: DateTime<Utc>,
}

/// 项目创建参数
///
/// 不包含ID和时间戳，这些字段由存储在插入时生成
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectCreate {
    #[schema(example = "Brand Identity System")]
    pub title: String,

    pub description: String,

    #[serde(default)]
    pub long_description: Option<String>,

    #[serde(default)]
    pub image_url: Option<String>,

    pub technologies: Vec<String>,

    #[serde(default)]
    pub featured: bool,

    #[serde(default)]
    pub show_links: Option<bool>,

    #[serde(default)]
    pub live_url: Option<String>,

    #[serde(default)]
    pub details_url: Option<String>,

    /// 缺省为active
    #[serde(default = "default_status")]
    pub status: ProjectStatus,

    #[serde(default)]
    pub sort_order: i32,
}

fn default_status() -> ProjectStatus {
    ProjectStatus::Active
}

/// 项目更新参数
///
/// 全部字段可选，None表示保留原值（coalesce语义）
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub long_description: Option<String>,
    pub image_url: Option<String>,
    pub technologies: Option<Vec<String>>,
    pub featured: Option<bool>,
    pub show_links: Option<bool>,
    pub live_url: Option<String>,
    pub details_url: Option<String>,
    pub status: Option<ProjectStatus>,
    pub sort_order: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn status_parse_and_display_round_trip() {
        for status in [ProjectStatus::Active, ProjectStatus::Archived, ProjectStatus::Draft] {
            let text = status.to_string();
            assert_eq!(text.parse::<ProjectStatus>().unwrap(), status);
        }
        assert!("deleted".parse::<ProjectStatus>().is_err());
    }

    #[test]
    fn project_serializes_camel_case() {
        let project = Project {
            id: Uuid::new_v4(),
            title: "Brand Identity System".to_string(),
            description: "Visual identity redesign".to_string(),
            long_description: None,
            image_url: None,
            technologies: vec!["Brand Strategy".to_string()],
            featured: true,
            show_links: Some(true),
            live_url: Some("https://example-brand.com".to_string()),
            details_url: None,
            status: ProjectStatus::Active,
            sort_order: 1,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let value = serde_json::to_value(&project).unwrap();
        assert_eq!(value["sortOrder"], 1);
        assert_eq!(value["liveUrl"], "https://example-brand.com");
        assert_eq!(value["showLinks"], true);
        assert_eq!(value["status"], "active");
        assert!(value.get("sort_order").is_none());
    }

    #[test]
    fn project_create_defaults() {
        let create: ProjectCreate = serde_json::from_value(json!({
            "title": "Minimal",
            "description": "Only required fields",
            "technologies": ["Figma"],
        }))
        .unwrap();

        assert_eq!(create.status, ProjectStatus::Active);
        assert_eq!(create.sort_order, 0);
        assert!(!create.featured);
        assert!(create.long_description.is_none());
    }
}
