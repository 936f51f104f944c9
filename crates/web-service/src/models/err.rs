use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use color_eyre::eyre::Error;
use database::DatabaseError;
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// 使用 [`thiserror`] 定义错误类型
///
/// 走到这里的只有存储层故障一类错误；业务校验失败（缺字段、缺_id等）
/// 不是error，由handler直接构造结构化body返回
#[derive(Error, Debug)]
pub enum AppError {
    /// 仓库层数据库错误
    #[error(transparent)]
    RepositoryError(#[from] DatabaseError),

    /// 其他类型错误
    #[error(transparent)]
    InternalError(#[from] Error),
}

/// Tell axum how to convert `AppError` into a response.
///
/// 老接口的兼容性约定：存储层故障同样返回200状态码，body中携带原始错误文本，
/// 客户端只根据body里的error字段区分结果。这里不区分具体错误种类。
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        error!("❌ 存储层操作失败: {}", self);
        (StatusCode::OK, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
