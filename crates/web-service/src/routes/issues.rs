//! issue相关接口
//!
//! 四个接口都挂在 `/api/issues/{project}` 下，按HTTP方法区分。
//!
//! 老接口兼容性约定（客户端依赖这些行为，不要"修复"）：
//! - 所有结果都用200状态码返回，包括校验失败和存储层故障
//! - 校验失败返回固定文案的 `{"error": ...}` body
//! - 不存在的 `_id` 和格式非法的 `_id` 对外表现一致

use crate::models::err::AppError;
use crate::models::issues::{IssueCreate, IssueDelete, IssueInfo, IssueSearch, IssueUpdate};
use crate::AppState;
use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use color_eyre::Result;
use database::IssueRepositoryTrait;
use serde_json::json;
use tracing::{debug, warn};
use uuid::Uuid;
use validator::Validate;

/// 按条件查询项目下的issue
///
/// 查询参数是issue字段上的精确匹配过滤条件，多个条件为AND关系，
/// 具体解析规则见 [`IssueSearch`]。路径上的project始终覆盖查询参数中的
/// 同名条件。无匹配时返回空数组。
///
/// ## 返回值
///
/// 返回值的类型是 [`Result<Json<Vec<IssueInfo>>, AppError>`]：
///
/// 1. [`Json`] 会对内部类型进行json序列化，保证返回的数据是一个合法的json字符串
/// 2. [`IssueInfo`] 是实际的业务返回对象
/// 3. [`AppError`] 是存储层故障时返回的Error类型，按兼容性约定同样渲染为200
#[utoipa::path(get,
    path = "/issues/{project}",
    tag = "issues",
    params(
        ("project" = String, Path, description = "项目名称"),
        IssueSearch,
    ),
    responses(
        (status = 200, description = "Matching issues", body = Vec<IssueInfo>)
    ),
)]
pub async fn find_issues<IR: IssueRepositoryTrait>(
    State(state): State<AppState<IR>>,
    Path(project): Path<String>,
    Query(search): Query<IssueSearch>,
) -> Result<Json<Vec<IssueInfo>>, AppError> {
    debug!("🔍 查询项目 {} 的issue {:#?}", project, search);

    // _id不是合法的文档ID时不可能有任何匹配，直接返回空数组
    let Some(filter) = search.into_filter(project) else {
        return Ok(Json(Vec::new()));
    };

    // 获取issue仓库实例
    let issue_repo = state.issue_repository.clone();

    let issues = issue_repo.find_issues(filter).await?;

    Ok(Json(issues.into_iter().map(Into::into).collect()))
}

/// 创建issue
///
/// `issue_title`/`issue_text`/`created_by` 为必填字段，缺失（或为空）时
/// 返回固定的错误body，不会触碰存储层。创建成功时返回完整的issue文档，
/// 包含存储层分配的 `_id` 和生成的时间戳。
#[utoipa::path(post,
    path = "/issues/{project}",
    tag = "issues",
    request_body = IssueCreate,
    responses(
        (status = 200, description = "Created issue document", body = IssueInfo)
    ),
)]
pub async fn create_issue<IR: IssueRepositoryTrait>(
    State(state): State<AppState<IR>>,
    Path(project): Path<String>,
    Json(issue): Json<IssueCreate>,
) -> Result<Response, AppError> {
    debug!("📝 在项目 {} 中创建issue {:#?}", project, issue);

    // 验证必填字段；错误文案是老接口约定的固定字符串
    if issue.validate().is_err() {
        return Ok(Json(json!({ "error": "required field(s) missing" })).into_response());
    }

    // 获取issue仓库实例
    let issue_repo = state.issue_repository.clone();
    let db_issue = database::models::IssueCreate {
        project,
        issue_title: issue.issue_title,
        issue_text: issue.issue_text,
        created_by: issue.created_by,
        assigned_to: issue.assigned_to,
        status_text: issue.status_text,
    };
    let created = issue_repo.create_issue(db_issue).await?;

    Ok(Json(IssueInfo::from(created)).into_response())
}

/// 部分更新issue
///
/// 根据body中的 `_id` 定位issue，把其余非空字段作为更新集合。
/// 校验顺序是接口契约的一部分：
///
/// 1. `_id` 缺失（或为空）→ `{"error": "missing _id"}`
/// 2. 更新集合为空 → `{"error": "no update field(s) sent", "_id": ...}`
/// 3. `_id` 找不到对应文档 → `{"error": "could not update", "_id": ...}`
/// 4. 成功 → `{"result": "successfully updated", "_id": ...}`
///
/// 成功更新时存储层会强制刷新 `updated_on`。
#[utoipa::path(put,
    path = "/issues/{project}",
    tag = "issues",
    request_body = IssueUpdate,
    responses(
        (status = 200, description = "Update outcome")
    ),
)]
pub async fn update_issue<IR: IssueRepositoryTrait>(
    State(state): State<AppState<IR>>,
    Path(project): Path<String>,
    Json(update): Json<IssueUpdate>,
) -> Result<Response, AppError> {
    debug!("🔄 更新项目 {} 的issue {:#?}", project, update);

    let Some(raw_id) = update.id.clone().filter(|id| !id.is_empty()) else {
        return Ok(Json(json!({ "error": "missing _id" })).into_response());
    };

    let changes = update.changes();
    if changes.is_empty() {
        return Ok(Json(json!({ "error": "no update field(s) sent", "_id": raw_id })).into_response());
    }

    // 非法的_id与不存在的_id对外表现一致，内部只记录日志
    let Ok(id) = raw_id.parse::<Uuid>() else {
        warn!("⚠️ 无法解析的issue id: {}", raw_id);
        return Ok(Json(json!({ "error": "could not update", "_id": raw_id })).into_response());
    };

    // 获取issue仓库实例
    let issue_repo = state.issue_repository.clone();

    match issue_repo.update_issue(id, changes).await? {
        Some(_) => Ok(Json(json!({ "result": "successfully updated", "_id": raw_id })).into_response()),
        None => Ok(Json(json!({ "error": "could not update", "_id": raw_id })).into_response()),
    }
}

/// 删除issue
///
/// 根据body中的 `_id` 删除issue。`_id` 缺失返回 `missing _id`；
/// 找不到文档（包括格式非法的id）返回 `could not delete`。
#[utoipa::path(delete,
    path = "/issues/{project}",
    tag = "issues",
    request_body = IssueDelete,
    responses(
        (status = 200, description = "Delete outcome")
    ),
)]
pub async fn delete_issue<IR: IssueRepositoryTrait>(
    State(state): State<AppState<IR>>,
    Path(project): Path<String>,
    Json(delete): Json<IssueDelete>,
) -> Result<Response, AppError> {
    debug!("🗑️ 删除项目 {} 的issue {:#?}", project, delete);

    let Some(raw_id) = delete.id.clone().filter(|id| !id.is_empty()) else {
        return Ok(Json(json!({ "error": "missing _id" })).into_response());
    };

    let Ok(id) = raw_id.parse::<Uuid>() else {
        warn!("⚠️ 无法解析的issue id: {}", raw_id);
        return Ok(Json(json!({ "error": "could not delete", "_id": raw_id })).into_response());
    };

    // 获取issue仓库实例
    let issue_repo = state.issue_repository.clone();

    match issue_repo.delete_issue(id).await? {
        Some(_) => Ok(Json(json!({ "result": "successfully deleted", "_id": raw_id })).into_response()),
        None => Ok(Json(json!({ "error": "could not delete", "_id": raw_id })).into_response()),
    }
}
