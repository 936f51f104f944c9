//! 路由入口
//!
//! 提供 [`create_app_router`] 函数，导出当前App的所有路由。
//!
//! 用户可以在导出路由时传入共享数据 shared_state，这样所有路由函数都可以访问。

use crate::routes::issues::__path_create_issue;
use crate::routes::issues::__path_delete_issue;
use crate::routes::issues::__path_find_issues;
use crate::routes::issues::__path_update_issue;
use crate::routes::issues::{create_issue, delete_issue, find_issues, update_issue};
use crate::AppState;
use axum::routing::get;
use axum::{Json, Router};
use database::IssueRepositoryTrait;
use serde_json::{json, Value};
use tracing::instrument;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;
use utoipa_scalar::{Scalar, Servable};

pub mod issues;

/// 导出当前App的所有路由
///
/// ## 参数定义
/// - state: 共享数据，参考 [`AppState`] 定义。存放issue仓库这样的全局共享数据。
///
/// ## **❗️注意事项：**
///
/// 由于 [`routes!`] 宏限制，在同一个宏里面不能同时定义多个相同类型的http接口。
/// issue的四个接口方法各不相同（GET/POST/PUT/DELETE），可以放在同一个宏里。
fn routers<IR: IssueRepositoryTrait>(state: AppState<IR>) -> OpenApiRouter {
    OpenApiRouter::new()
        .routes(routes!(find_issues, create_issue, update_issue, delete_issue))
        .with_state(state)
}

/// 创建当前App的路由
///
/// 完成以下功能：
/// - 生成OpenAPI文档
/// - 生成App路由
/// - 使用Scalar作为最终在线文档格式
///
/// 由于使用了 `utoipa` 库来自动化生成`openapi`文档，因此我们没有使用原生的 [`Router`]，而是使用了
/// [`OpenApiRouter`] 。
pub fn create_app_router<IR: IssueRepositoryTrait>(shared_state: AppState<IR>) -> Router {
    // 当前项目的OpenAPI声明
    #[derive(OpenApi)]
    #[openapi(
        tags(
            (name = "issue-tracker", description = r#"
issue跟踪服务，按project分组管理issue：

- 创建/查询/更新/删除issue
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
    // /health 是普通的存活探针，不进入OpenAPI文档
    router
        .merge(Scalar::with_url("/docs", api))
        .route("/health", get(health_check))
}

/// 健康检查接口
#[instrument]
async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "service": "issue-tracker"
    }))
}
