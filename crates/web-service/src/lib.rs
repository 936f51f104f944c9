//! Web服务模块
//!
//! 提供 HTTP API 接口和文档服务

use color_eyre::Result;
use database::{IssueRepository, IssueRepositoryTrait};
use shared_lib::AppConfig;
use sqlx::{Pool, Postgres};
use std::sync::Arc;
use tokio::sync::watch::Receiver;
use tracing::info;

pub mod models;
pub mod routes;

/// 应用共享状态
pub struct AppState<IR: IssueRepositoryTrait> {
    pub issue_repository: Arc<IR>,
}

// 手动实现Clone，避免derive给IR追加多余的Clone约束
// Arc的clone只是引用计数+1
impl<IR: IssueRepositoryTrait> Clone for AppState<IR> {
    fn clone(&self) -> Self {
        Self {
            issue_repository: self.issue_repository.clone(),
        }
    }
}

/// 具体的 AppState 类型别名
pub type ConcreteAppState = AppState<IssueRepository>;

/// 启动 Web 服务
pub async fn start_web_service(config: Arc<AppConfig>, pool: Pool<Postgres>, mut shutdown_rx: Receiver<bool>) -> Result<()> {
    let shared_state = AppState {
        issue_repository: Arc::new(database::IssueRepository::new(pool.clone())),
    };

    let router = routes::create_app_router(shared_state);

    info!("🚀 启动 Web Service 在 {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;

    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(async move {
            shutdown_rx.changed().await.expect("Failed to receive shutdown signal");
            info!("🛑 Web Service 正在关闭...");
        })
        .await?;

    Ok(())
}
