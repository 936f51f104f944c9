//! 数据库仓库 trait 定义
//!
//! 这里定义了各种数据库仓库的抽象接口
//!
//! ## Repository Trait 设计模式 🎯
//!
//! 所有 Repository trait 都应该遵循统一的设计模式，实现以下 trait 约束：
//!
//! ```rust
//! pub trait XxxRepositoryTrait: Send + Sync + 'static {
//!     // 异步方法定义...
//! }
//! ```
//!
//! ### Trait 约束说明 📚
//!
//! #### `Send` trait 🚀
//! - **作用**：表示类型可以安全地在线程间转移所有权
//! - **必要性**：异步方法返回的 `Future` 需要在不同线程间传递
//! - **场景**：Web 服务器中，不同的请求可能在不同线程处理
//!
//! #### `Sync` trait 🔄
//! - **作用**：表示类型可以安全地在多个线程间共享引用
//! - **必要性**：Repository 实例作为共享服务在应用中使用
//! - **场景**：多个并发请求同时访问同一个 Repository 实例
//!
//! #### `'static` 生命周期 ⏰
//! - **作用**：表示类型不包含非静态引用，可以在程序整个生命周期中存活
//! - **必要性**：异步 trait 方法返回的 `Future` 需要 `'static` 生命周期
//! - **场景**：作为应用服务长期运行，不依赖于短期引用
//!
//! ### 实际应用场景 💡
//!
//! 这些 trait 组合使得 Repository trait 可以作为 `AppState` 的泛型参数注入到
//! 各个handler中（Policy Based Design，零成本抽象），同时也让测试可以用内存
//! 实现替换真实的数据库实现：
//!
//! ```rust,ignore
//! async fn create_issue<IR: IssueRepositoryTrait>(
//!     State(app_state): State<AppState<IR>>,
//!     Path(project): Path<String>,
//!     Json(payload): Json<IssueCreate>,
//! ) -> Result<Response, AppError> {
//!     let issue = app_state.issue_repository.create_issue(payload).await?;
//!     Ok(Json(issue).into_response())
//! }
//! ```

pub mod issue;

// 重新导出
pub use issue::IssueRepositoryTrait;
