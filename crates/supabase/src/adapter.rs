//! REST代理适配器
//!
//! 把 [`Storage`] 调用翻译成对托管存储REST接口的HTTP请求。
//! 每个操作对应一次出站调用，没有连接复用方面的要求。

use crate::client::SupabaseClient;
use crate::models::{ContactMessageInsert, ContactMessageRecord, ProjectInsert, ProjectPatch, ProjectRecord};
use std::collections::HashMap;
use storage::{
    ContactMessage, ContactMessageCreate, Project, ProjectCreate, ProjectUpdate, Storage, StorageResult, User,
    UserCreate,
};
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

/// 统一的项目排序参数：sort_order升序，创建时间降序兜底
fn project_order() -> (&'static str, String) {
    ("order", "sort_order.asc,created_at.desc".to_string())
}

/// REST代理存储适配器结构体
///
/// 项目与联系消息走REST接口；用户只是脚手架实体，没有对应的
/// 托管表，保存在进程内的内存表中。
pub struct SupabaseStorage {
    client: SupabaseClient,
    users: RwLock<HashMap<Uuid, User>>,
}

impl SupabaseStorage {
    /// 创建新的适配器实例
    pub fn new(endpoint: &str, api_key: &str) -> Self {
        Self {
            client: SupabaseClient::new(endpoint, api_key),
            users: RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait::async_trait]
impl Storage for SupabaseStorage {
    async fn get_user(&self, id: Uuid) -> StorageResult<Option<User>> {
        Ok(self.users.read().await.get(&id).cloned())
    }

    async fn get_user_by_username(&self, username: &str) -> StorageResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.values().find(|user| user.username == username).cloned())
    }

    async fn create_user(&self, user: UserCreate) -> StorageResult<User> {
        let user = User {
            id: Uuid::new_v4(),
            username: user.username,
            password: user.password,
        };
        self.users.write().await.insert(user.id, user.clone());
        Ok(user)
    }

    async fn get_projects(&self) -> StorageResult<Vec<Project>> {
        debug!("🔍 查询活跃项目列表");

        let records: Vec<ProjectRecord> = self
            .client
            .get("projects", &[("status", "eq.active".to_string()), project_order()])
            .await?;

        Ok(records.into_iter().map(Project::from).collect())
    }

    async fn get_featured_projects(&self) -> StorageResult<Vec<Project>> {
        debug!("🔍 查询精选项目列表");

        let records: Vec<ProjectRecord> = self
            .client
            .get(
                "projects",
                &[
                    ("featured", "eq.true".to_string()),
                    ("status", "eq.active".to_string()),
                    project_order(),
                ],
            )
            .await?;

        Ok(records.into_iter().map(Project::from).collect())
    }

    async fn get_project(&self, id: Uuid) -> StorageResult<Option<Project>> {
        debug!("🔍 根据ID查询项目: {id}");

        let mut records: Vec<ProjectRecord> = self
            .client
            .get(
                "projects",
                &[("id", format!("eq.{id}")), ("limit", "1".to_string())],
            )
            .await?;

        Ok(records.pop().map(Project::from))
    }

    async fn create_project(&self, project: ProjectCreate) -> StorageResult<Project> {
        debug!("📝 创建项目: {}", project.title);

        let record: ProjectRecord = self.client.post("projects", &ProjectInsert::from(project)).await?;

        let created = Project::from(record);
        debug!("✅ 项目创建成功: {}", created.id);
        Ok(created)
    }

    async fn update_project(&self, id: Uuid, update: ProjectUpdate) -> StorageResult<Project> {
        debug!("🔄 更新项目 {id} 信息");

        let record: ProjectRecord = self.client.patch("projects", id, &ProjectPatch::from(update)).await?;

        Ok(record.into())
    }

    async fn delete_project(&self, id: Uuid) -> StorageResult<bool> {
        debug!("🗑️ 删除项目: {id}");

        self.client.delete("projects", id).await
    }

    async fn create_contact_message(&self, message: ContactMessageCreate) -> StorageResult<ContactMessage> {
        debug!("📨 保存联系消息: {} <{}>", message.name, message.email);

        let record: ContactMessageRecord = self
            .client
            .post("contact_messages", &ContactMessageInsert::from(message))
            .await?;

        Ok(record.into())
    }

    async fn get_contact_messages(&self) -> StorageResult<Vec<ContactMessage>> {
        debug!("🔍 查询联系消息列表");

        let records: Vec<ContactMessageRecord> = self
            .client
            .get("contact_messages", &[("order", "created_at.desc".to_string())])
            .await?;

        Ok(records.into_iter().map(ContactMessage::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn users_live_in_the_in_memory_scaffold() {
        let store = SupabaseStorage::new("https://xyz.supabase.co", "secret");

        let created = store
            .create_user(UserCreate {
                username: "alex".to_string(),
                password: "hunter2".to_string(),
            })
            .await
            .unwrap();

        let by_id = store.get_user(created.id).await.unwrap();
        assert_eq!(by_id.unwrap().username, "alex");

        let by_name = store.get_user_by_username("alex").await.unwrap();
        assert_eq!(by_name.unwrap().id, created.id);

        assert!(store.get_user(Uuid::new_v4()).await.unwrap().is_none());
        assert!(store.get_user_by_username("nobody").await.unwrap().is_none());
    }
}
