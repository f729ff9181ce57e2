//! 测试用的内存存储实现
//!
//! 用HashMap/Vec模拟一个完整的存储后端，让路由测试不依赖
//! 数据库或网络。排序与过滤语义和生产适配器保持一致。

use async_trait::async_trait;
use chrono::{Duration, Utc};
use std::collections::HashMap;
use std::sync::Mutex;
use storage::{
    ContactMessage, ContactMessageCreate, Project, ProjectCreate, ProjectStatus, ProjectUpdate, Storage,
    StorageError, StorageResult, User, UserCreate,
};
use uuid::Uuid;

#[derive(Default)]
pub struct MemStorage {
    users: Mutex<HashMap<Uuid, User>>,
    projects: Mutex<Vec<Project>>,
    messages: Mutex<Vec<ContactMessage>>,
}

impl MemStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_projects(projects: Vec<Project>) -> Self {
        Self {
            projects: Mutex::new(projects),
            ..Self::default()
        }
    }
}

/// 构造一个测试项目，`minutes_ago` 用于控制创建时间先后
pub fn project(title: &str, featured: bool, status: ProjectStatus, sort_order: i32, minutes_ago: i64) -> Project {
    let created_at = Utc::now() - Duration::minutes(minutes_ago);
    Project {
        id: Uuid::new_v4(),
        title: title.to_string(),
        description: format!("{title} description"),
        long_description: None,
        image_url: None,
        technologies: vec!["Rust".to_string()],
        featured,
        show_links: None,
        live_url: None,
        details_url: None,
        status,
        sort_order,
        created_at,
        updated_at: created_at,
    }
}

fn ordered(mut projects: Vec<Project>) -> Vec<Project> {
    projects.sort_by(|a, b| {
        a.sort_order
            .cmp(&b.sort_order)
            .then_with(|| b.created_at.cmp(&a.created_at))
    });
    projects
}

#[async_trait]
impl Storage for MemStorage {
    async fn get_user(&self, id: Uuid) -> StorageResult<Option<User>> {
        Ok(self.users.lock().unwrap().get(&id).cloned())
    }

    async fn get_user_by_username(&self, username: &str) -> StorageResult<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.values().find(|user| user.username == username).cloned())
    }

    async fn create_user(&self, user: UserCreate) -> StorageResult<User> {
        let user = User {
            id: Uuid::new_v4(),
            username: user.username,
            password: user.password,
        };
        self.users.lock().unwrap().insert(user.id, user.clone());
        Ok(user)
    }

    async fn get_projects(&self) -> StorageResult<Vec<Project>> {
        let projects = self.projects.lock().unwrap();
        Ok(ordered(
            projects
                .iter()
                .filter(|p| p.status == ProjectStatus::Active)
                .cloned()
                .collect(),
        ))
    }

    async fn get_featured_projects(&self) -> StorageResult<Vec<Project>> {
        let projects = self.projects.lock().unwrap();
        Ok(ordered(
            projects
                .iter()
                .filter(|p| p.featured && p.status == ProjectStatus::Active)
                .cloned()
                .collect(),
        ))
    }

    async fn get_project(&self, id: Uuid) -> StorageResult<Option<Project>> {
        let projects = self.projects.lock().unwrap();
        Ok(projects.iter().find(|p| p.id == id).cloned())
    }

    async fn create_project(&self, create: ProjectCreate) -> StorageResult<Project> {
        let now = Utc::now();
        let project = Project {
            id: Uuid::new_v4(),
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
            created_at: now,
            updated_at: now,
        };
        self.projects.lock().unwrap().push(project.clone());
        Ok(project)
    }

    async fn update_project(&self, id: Uuid, update: ProjectUpdate) -> StorageResult<Project> {
        let mut projects = self.projects.lock().unwrap();
        let project = projects
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| StorageError::not_found(format!("项目 {id} 不存在")))?;

        if let Some(title) = update.title {
            project.title = title;
        }
        if let Some(description) = update.description {
            project.description = description;
        }
        if let Some(long_description) = update.long_description {
            project.long_description = Some(long_description);
        }
        if let Some(image_url) = update.image_url {
            project.image_url = Some(image_url);
        }
        if let Some(technologies) = update.technologies {
            project.technologies = technologies;
        }
        if let Some(featured) = update.featured {
            project.featured = featured;
        }
        if let Some(show_links) = update.show_links {
            project.show_links = Some(show_links);
        }
        if let Some(live_url) = update.live_url {
            project.live_url = Some(live_url);
        }
        if let Some(details_url) = update.details_url {
            project.details_url = Some(details_url);
        }
        if let Some(status) = update.status {
            project.status = status;
        }
        if let Some(sort_order) = update.sort_order {
            project.sort_order = sort_order;
        }
        project.updated_at = Utc::now();

        Ok(project.clone())
    }

    async fn delete_project(&self, id: Uuid) -> StorageResult<bool> {
        let mut projects = self.projects.lock().unwrap();
        let before = projects.len();
        projects.retain(|p| p.id != id);
        Ok(projects.len() < before)
    }

    async fn create_contact_message(&self, create: ContactMessageCreate) -> StorageResult<ContactMessage> {
        let message = ContactMessage {
            id: Uuid::new_v4(),
            name: create.name,
            email: create.email,
            subject: create.subject,
            message: create.message,
            created_at: Utc::now(),
        };
        self.messages.lock().unwrap().push(message.clone());
        Ok(message)
    }

    async fn get_contact_messages(&self) -> StorageResult<Vec<ContactMessage>> {
        let mut messages = self.messages.lock().unwrap().clone();
        messages.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(messages)
    }
}
