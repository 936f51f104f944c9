//! issue仓库 trait 定义
//!
//! 定义issue数据库操作的抽象接口

use crate::models::issue::{IssueChanges, IssueCreate, IssueFilter, IssueRecord};
use crate::DatabaseResult;
use uuid::Uuid;

/// issue仓库trait定义
///
/// 定义了issue相关的数据库操作接口，支持：
/// - issue条件查询（精确匹配，AND组合）
/// - issue创建
/// - issue部分更新
/// - issue删除
///
/// 按id操作的方法用 `Ok(None)` 表示"未找到"，与 `Err` 表示的存储层故障
/// 严格区分，调用方需要分别处理这两种情况。
#[async_trait::async_trait]
pub trait IssueRepositoryTrait: Send + Sync + 'static {
    /// 根据过滤条件查询issue列表
    ///
    /// # 参数
    /// - `filter`: 过滤条件，所有条件为AND关系
    ///
    /// # 返回值
    /// 返回所有匹配的issue，无匹配时为空列表
    async fn find_issues(&self, filter: IssueFilter) -> DatabaseResult<Vec<IssueRecord>>;

    /// 创建新issue
    ///
    /// 存储层负责生成 `id` 并把 `created_on`/`updated_on` 设置为当前时间
    ///
    /// # 参数
    /// - `issue`: issue创建信息
    ///
    /// # 返回值
    /// 返回创建完成的issue文档
    async fn create_issue(&self, issue: IssueCreate) -> DatabaseResult<IssueRecord>;

    /// 根据 ID 部分更新issue
    ///
    /// 只更新 `changes` 中为 `Some` 的字段，同时强制刷新 `updated_on`
    ///
    /// # 参数
    /// - `id`: issue ID
    /// - `changes`: 待更新字段集合
    ///
    /// # 返回值
    /// 返回更新后的issue，目标不存在时返回 `None`
    async fn update_issue(&self, id: Uuid, changes: IssueChanges) -> DatabaseResult<Option<IssueRecord>>;

    /// 根据 ID 删除issue
    ///
    /// # 参数
    /// - `id`: issue ID
    ///
    /// # 返回值
    /// 返回被删除的issue，目标不存在时返回 `None`
    async fn delete_issue(&self, id: Uuid) -> DatabaseResult<Option<IssueRecord>>;
}
