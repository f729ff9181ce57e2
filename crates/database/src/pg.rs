//! PostgreSQL存储适配器
//!
//! 负责把 [`Storage`] 调用翻译成SQL语句

use crate::models::{ContactMessageRow, ProjectRow, UserRow};
use sqlx::PgPool;
use storage::{
    ContactMessage, ContactMessageCreate, Project, ProjectCreate, ProjectStatus, ProjectUpdate, Storage, StorageError,
    StorageResult, User, UserCreate,
};
use tracing::debug;
use uuid::Uuid;

/// projects表的完整列清单，所有查询共用
const PROJECT_COLUMNS: &str = "id, title, description, long_description, image_url, technologies, \
                               featured, show_links, live_url, details_url, status, sort_order, \
                               created_at, updated_at";

/// 关系型存储适配器结构体
#[derive(Debug, Clone)]
pub struct PgStorage {
    pool: PgPool,
}

impl PgStorage {
    /// 创建新的适配器实例
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl Storage for PgStorage {
    async fn get_user(&self, id: Uuid) -> StorageResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>("SELECT id, username, password FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(User::from))
    }

    async fn get_user_by_username(&self, username: &str) -> StorageResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>("SELECT id, username, password FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(User::from))
    }

    async fn create_user(&self, user: UserCreate) -> StorageResult<User> {
        debug!("📝 创建用户: {}", user.username);

        let row = sqlx::query_as::<_, UserRow>(
            "INSERT INTO users (username, password) VALUES ($1, $2) RETURNING id, username, password",
        )
        .bind(user.username)
        .bind(user.password)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    /// 查询活跃项目列表
    ///
    /// 过滤与排序均由数据库完成，排序规则：`sort_order` 升序，创建时间降序兜底
    async fn get_projects(&self) -> StorageResult<Vec<Project>> {
        debug!("🔍 查询活跃项目列表");

        let rows = sqlx::query_as::<_, ProjectRow>(&format!(
            "SELECT {PROJECT_COLUMNS} FROM projects \
             WHERE status = $1 \
             ORDER BY sort_order ASC, created_at DESC"
        ))
        .bind(ProjectStatus::Active.as_str())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Project::try_from).collect()
    }

    async fn get_featured_projects(&self) -> StorageResult<Vec<Project>> {
        debug!("🔍 查询精选项目列表");

        let rows = sqlx::query_as::<_, ProjectRow>(&format!(
            "SELECT {PROJECT_COLUMNS} FROM projects \
             WHERE featured = true AND status = $1 \
             ORDER BY sort_order ASC, created_at DESC"
        ))
        .bind(ProjectStatus::Active.as_str())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Project::try_from).collect()
    }

    async fn get_project(&self, id: Uuid) -> StorageResult<Option<Project>> {
        debug!("🔍 根据ID查询项目: {id}");

        let row = sqlx::query_as::<_, ProjectRow>(&format!(
            "SELECT {PROJECT_COLUMNS} FROM projects WHERE id = $1 LIMIT 1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Project::try_from).transpose()
    }

    /// 创建新项目
    ///
    /// ID与created_at由数据库默认值生成，updated_at在插入时刷新为now()
    async fn create_project(&self, project: ProjectCreate) -> StorageResult<Project> {
        debug!("📝 创建项目: {}", project.title);

        let row = sqlx::query_as::<_, ProjectRow>(&format!(
            "INSERT INTO projects (title, description, long_description, image_url, technologies, \
                                   featured, show_links, live_url, details_url, status, sort_order, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, now()) \
             RETURNING {PROJECT_COLUMNS}"
        ))
        .bind(project.title)
        .bind(project.description)
        .bind(project.long_description)
        .bind(project.image_url)
        .bind(project.technologies)
        .bind(project.featured)
        .bind(project.show_links)
        .bind(project.live_url)
        .bind(project.details_url)
        .bind(project.status.as_str())
        .bind(project.sort_order)
        .fetch_one(&self.pool)
        .await?;

        let created = Project::try_from(row)?;
        debug!("✅ 项目创建成功: {}", created.id);
        Ok(created)
    }

    /// 更新项目信息
    ///
    /// 使用`coalesce`函数处理可选字段：用户没有提供的值会被绑定为null，
    /// 最终保留数据库中的原值。这样不需要用`if`拼接SQL，可维护性更好。
    async fn update_project(&self, id: Uuid, update: ProjectUpdate) -> StorageResult<Project> {
        debug!("🔄 更新项目 {id} 信息");

        let row = sqlx::query_as::<_, ProjectRow>(&format!(
            "UPDATE projects \
             SET title            = coalesce($2, title), \
                 description      = coalesce($3, description), \
                 long_description = coalesce($4, long_description), \
                 image_url        = coalesce($5, image_url), \
                 technologies     = coalesce($6, technologies), \
                 featured         = coalesce($7, featured), \
                 show_links       = coalesce($8, show_links), \
                 live_url         = coalesce($9, live_url), \
                 details_url      = coalesce($10, details_url), \
                 status           = coalesce($11, status), \
                 sort_order       = coalesce($12, sort_order), \
                 updated_at       = now() \
             WHERE id = $1 \
             RETURNING {PROJECT_COLUMNS}"
        ))
        .bind(id)
        .bind(update.title)
        .bind(update.description)
        .bind(update.long_description)
        .bind(update.image_url)
        .bind(update.technologies)
        .bind(update.featured)
        .bind(update.show_links)
        .bind(update.live_url)
        .bind(update.details_url)
        .bind(update.status.map(|s| s.as_str()))
        .bind(update.sort_order)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| StorageError::not_found(format!("项目 {id} 不存在")))?;

        let updated = Project::try_from(row)?;
        debug!("✅ 项目更新成功: {}", updated.id);
        Ok(updated)
    }

    async fn delete_project(&self, id: Uuid) -> StorageResult<bool> {
        debug!("🗑️ 删除项目: {id}");

        let deleted = sqlx::query_scalar::<_, Uuid>("DELETE FROM projects WHERE id = $1 RETURNING id")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(deleted.is_some())
    }

    async fn create_contact_message(&self, message: ContactMessageCreate) -> StorageResult<ContactMessage> {
        debug!("📨 保存联系消息: {} <{}>", message.name, message.email);

        let row = sqlx::query_as::<_, ContactMessageRow>(
            "INSERT INTO contact_messages (name, email, subject, message) \
             VALUES ($1, $2, $3, $4) \
             RETURNING id, name, email, subject, message, created_at",
        )
        .bind(message.name)
        .bind(message.email)
        .bind(message.subject)
        .bind(message.message)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn get_contact_messages(&self) -> StorageResult<Vec<ContactMessage>> {
        debug!("🔍 查询联系消息列表");

        let rows = sqlx::query_as::<_, ContactMessageRow>(
            "SELECT id, name, email, subject, message, created_at \
             FROM contact_messages \
             ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ContactMessage::from).collect())
    }
}
