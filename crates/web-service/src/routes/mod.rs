//! 路由入口
//!
//! 提供 [`create_app_router`] 函数，导出当前App的所有路由。
//!
//! 用户可以在导出路由时传入共享数据 shared_state，这样所有路由函数都可以访问。

use crate::middleware::log_requests;
use crate::routes::contact::__path_list_contact_messages;
use crate::routes::contact::__path_submit_contact;
use crate::routes::contact::{list_contact_messages, submit_contact};
use crate::routes::projects::__path_find_featured_projects;
use crate::routes::projects::__path_find_projects;
use crate::routes::projects::__path_get_project;
use crate::routes::projects::{find_featured_projects, find_projects, get_project};
use crate::AppState;
use axum::middleware;
use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;
use utoipa_scalar::{Scalar, Servable};

pub mod contact;
pub mod projects;

#[cfg(test)]
pub(crate) mod test_support;

/// 导出当前App的所有路由
///
/// ## 参数定义
/// - state: 共享数据，参考 [`AppState`] 定义，存放进程级的存储后端实例。
///
/// ## **❗️注意事项：**
///
/// 由于 [`routes!`] 宏限制，在同一个宏里面不能同时定义多个相同类型的http接口，
/// 因此三个GET项目接口需要拆开注册。
fn routers(state: AppState) -> OpenApiRouter {
    OpenApiRouter::new()
        .routes(routes!(find_projects))
        .routes(routes!(find_featured_projects))
        .routes(routes!(get_project))
        .routes(routes!(submit_contact, list_contact_messages))
        .with_state(state)
}

/// 创建当前App的路由
///
/// 完成以下功能：
/// - 生成OpenAPI文档
/// - 生成App路由，业务接口统一挂在 `/api` 前缀下
/// - 使用Scalar作为最终在线文档格式，访问地址 `/docs`
/// - 挂载请求日志中间件
///
/// 由于使用了 `utoipa` 库来自动化生成`openapi`文档，因此我们没有使用原生的 [`Router`]，
/// 而是使用了 [`OpenApiRouter`]。
pub fn create_app_router(shared_state: AppState) -> Router {
    // 当前项目的OpenAPI声明
    #[derive(OpenApi)]
    #[openapi(
        tags(
            (name = "portfolio-backend", description = r#"
作品集站点后端，覆盖场景：

- 项目展示API
- 联系表单API
- OpenAPI文档
            "#)
        ),
    )]
    struct ApiDoc;

    // 使用`utoipa_axum`提供的OpenApiRouter来创建路由。
    // 同时传递共享状态数据到路由中供使用。
    // 最终拿到的变量：
    // - router: Axum的Router，实际的路由对象
    // - api: utoipa的OpenApi，生成的OpenAPI对象
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .nest("/api", routers(shared_state))
        .split_for_parts();

    // 合并文档路由，用户可通过 /docs 访问文档网页地址
    router
        .merge(Scalar::with_url("/docs", api))
        .layer(middleware::from_fn(log_requests))
}
