//! 项目相关接口
//!

use crate::models::err::AppError;
use crate::AppState;
use axum::extract::{Path, State};
use axum::Json;
use storage::Project;
use tracing::debug;
use uuid::Uuid;

/// 查询活跃项目列表
///
/// 仅返回 `status = active` 的项目，
/// 按 `sort_order` 升序排列，相同权重按创建时间降序。
///
/// 过滤与排序都由存储后端完成，handler只做一次转发。
/// 存储失败统一转换为500，详细原因见 [`AppError`]。
#[utoipa::path(get,
    path = "/projects",
    tag = "projects",
    responses(
        (status = 200, description = "Active projects, ordered", body = [Project]),
        (status = 500, description = "Storage failure"),
    ),
)]
pub async fn find_projects(State(state): State<AppState>) -> Result<Json<Vec<Project>>, AppError> {
    debug!("🔍 查询项目列表");

    let projects = state.storage.get_projects().await?;

    Ok(Json(projects))
}

/// 查询精选项目列表
///
/// 在活跃项目的基础上额外过滤 `featured = true`，排序规则相同
#[utoipa::path(get,
    path = "/projects/featured",
    tag = "projects",
    responses(
        (status = 200, description = "Featured active projects, ordered", body = [Project]),
        (status = 500, description = "Storage failure"),
    ),
)]
pub async fn find_featured_projects(State(state): State<AppState>) -> Result<Json<Vec<Project>>, AppError> {
    debug!("🔍 查询精选项目列表");

    let projects = state.storage.get_featured_projects().await?;

    Ok(Json(projects))
}

/// 根据ID查询单个项目
///
/// 未命中返回404，响应体中不包含任何内部细节
#[utoipa::path(get,
    path = "/projects/{id}",
    tag = "projects",
    params(
        ("id" = Uuid, Path, description = "项目ID"),
    ),
    responses(
        (status = 200, description = "Project detail", body = Project),
        (status = 404, description = "Project not found"),
        (status = 500, description = "Storage failure"),
    ),
)]
pub async fn get_project(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<Json<Project>, AppError> {
    debug!("🔍 根据ID查询项目: {id}");

    let project = state
        .storage
        .get_project(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Project not found".to_string()))?;

    Ok(Json(project))
}
