//! 存储能力 trait 定义
//!
//! 定义后端适配器必须实现的抽象接口

use crate::models::contact::{ContactMessage, ContactMessageCreate};
use crate::models::project::{Project, ProjectCreate, ProjectUpdate};
use crate::models::user::{User, UserCreate};
use crate::StorageResult;
use uuid::Uuid;

/// 存储能力trait定义
///
/// 定义了作品集站点的全部持久化操作，支持：
/// - 用户查询与创建（脚手架，无路由使用）
/// - 项目查询（列表 / 精选 / 单个）
/// - 项目创建、更新、删除（更新与删除未暴露路由）
/// - 联系消息创建与查询
///
/// 任何实现该trait的适配器都可以互换使用，调用方通过
/// `Arc<dyn Storage>` 持有实例，启动时根据配置选定其一。
#[async_trait::async_trait]
pub trait Storage: Send + Sync + 'static {
    /// 根据 ID 获取用户
    ///
    /// 未命中返回 `None`，不算错误
    async fn get_user(&self, id: Uuid) -> StorageResult<Option<User>>;

    /// 根据用户名获取用户
    async fn get_user_by_username(&self, username: &str) -> StorageResult<Option<User>>;

    /// 创建新用户
    ///
    /// # 返回值
    /// 返回带生成ID的用户信息
    async fn create_user(&self, user: UserCreate) -> StorageResult<User>;

    /// 查询活跃项目列表
    ///
    /// 仅返回 `status = active` 的项目，
    /// 按 `sort_order` 升序排列，相同权重按创建时间降序
    async fn get_projects(&self) -> StorageResult<Vec<Project>>;

    /// 查询精选项目列表
    ///
    /// 在活跃项目的基础上额外过滤 `featured = true`，排序规则相同
    async fn get_featured_projects(&self) -> StorageResult<Vec<Project>>;

    /// 根据 ID 获取项目
    ///
    /// 未命中返回 `None`
    async fn get_project(&self, id: Uuid) -> StorageResult<Option<Project>>;

    /// 创建新项目
    ///
    /// ID与时间戳由存储生成，`updated_at` 在插入前刷新为当前时间
    async fn create_project(&self, project: ProjectCreate) -> StorageResult<Project>;

    /// 更新项目信息
    ///
    /// None字段保留原值，`updated_at` 刷新为当前时间。
    /// 项目不存在时返回 [`crate::StorageError::NotFound`]
    async fn update_project(&self, id: Uuid, update: ProjectUpdate) -> StorageResult<Project>;

    /// 删除项目
    ///
    /// # 返回值
    /// 返回是否真的删除了记录
    async fn delete_project(&self, id: Uuid) -> StorageResult<bool>;

    /// 创建联系消息
    async fn create_contact_message(&self, message: ContactMessageCreate) -> StorageResult<ContactMessage>;

    /// 查询全部联系消息，按创建时间降序
    async fn get_contact_messages(&self) -> StorageResult<Vec<ContactMessage>>;
}
