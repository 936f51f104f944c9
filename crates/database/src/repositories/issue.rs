//! issue仓库
//!
//! 负责issue相关的数据库操作

use crate::models::issue::{IssueChanges, IssueCreate, IssueFilter, IssueRecord};
use crate::repositories::traits::IssueRepositoryTrait;
use crate::DatabaseResult;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::debug;
use uuid::Uuid;

/// `RETURNING`/`SELECT` 共用的列清单，顺序与 [`IssueRecord`] 字段一致
const ISSUE_COLUMNS: &str =
    "id, project, issue_title, issue_text, created_by, assigned_to, status_text, open, created_on, updated_on";

/// issue仓库结构体
#[derive(Debug, Clone)]
pub struct IssueRepository {
    pool: PgPool,
}

impl IssueRepository {
    /// 创建新的issue仓库实例
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl IssueRepositoryTrait for IssueRepository {
    /// 根据过滤条件查询issue列表
    ///
    /// 所有过滤条件都是精确匹配，条件之间为AND关系。
    ///
    /// # SQL 查询说明
    ///
    /// 过滤字段集合在每个请求中都不同，因此这里没有使用编译期校验的
    /// `sqlx::query_as!` 宏，而是用 [`QueryBuilder`] 动态拼接WHERE子句。
    /// 所有值都通过 `push_bind` 绑定为预处理参数，不存在注入风险。
    ///
    /// # 错误处理
    ///
    /// 如果数据库操作失败，会返回 [`DatabaseError`](crate::DatabaseError)
    async fn find_issues(&self, filter: IssueFilter) -> DatabaseResult<Vec<IssueRecord>> {
        debug!("🔍 查询issue - 过滤条件: {:?}", filter);

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {ISSUE_COLUMNS} FROM issues WHERE project = "));
        builder.push_bind(filter.project);

        if let Some(id) = filter.id {
            builder.push(" AND id = ").push_bind(id);
        }
        if let Some(issue_title) = filter.issue_title {
            builder.push(" AND issue_title = ").push_bind(issue_title);
        }
        if let Some(issue_text) = filter.issue_text {
            builder.push(" AND issue_text = ").push_bind(issue_text);
        }
        if let Some(created_by) = filter.created_by {
            builder.push(" AND created_by = ").push_bind(created_by);
        }
        if let Some(assigned_to) = filter.assigned_to {
            builder.push(" AND assigned_to = ").push_bind(assigned_to);
        }
        if let Some(status_text) = filter.status_text {
            builder.push(" AND status_text = ").push_bind(status_text);
        }
        if let Some(open) = filter.open {
            builder.push(" AND open = ").push_bind(open);
        }
        if let Some(created_on) = filter.created_on {
            builder.push(" AND created_on = ").push_bind(created_on);
        }
        if let Some(updated_on) = filter.updated_on {
            builder.push(" AND updated_on = ").push_bind(updated_on);
        }

        let issues = builder
            .build_query_as::<IssueRecord>()
            .fetch_all(&self.pool)
            .await?;

        debug!("✅ 查询完成 - 找到 {} 个issue", issues.len());

        Ok(issues)
    }

    /// 创建新issue
    ///
    /// `id` 由数据库生成（`gen_random_uuid()`），`open` 固定为true，
    /// `created_on`/`updated_on` 都取数据库当前时间
    ///
    /// # 参数
    /// - `issue`: issue创建信息
    ///
    /// # 返回值
    /// 返回创建完成的issue文档（含生成的id和时间戳）
    async fn create_issue(&self, issue: IssueCreate) -> DatabaseResult<IssueRecord> {
        debug!("📝 创建issue: {:#?}", issue);

        let record = sqlx::query_as::<_, IssueRecord>(&format!(
            r#"
            INSERT INTO issues (project, issue_title, issue_text, created_by, assigned_to, status_text, open, created_on, updated_on)
            VALUES ($1, $2, $3, $4, $5, $6, true, now(), now())
            RETURNING {ISSUE_COLUMNS};
            "#
        ))
        .bind(issue.project)
        .bind(issue.issue_title)
        .bind(issue.issue_text)
        .bind(issue.created_by)
        .bind(issue.assigned_to)
        .bind(issue.status_text)
        .fetch_one(&self.pool)
        .await?;

        debug!("✅ issue创建成功: {:#?}", record);
        Ok(record)
    }

    /// 根据 ID 部分更新issue
    ///
    /// ## SQL
    ///
    /// 与查询一样，待更新字段集合是动态的，使用 [`QueryBuilder`] 拼接SET子句。
    /// `updated_on = now()` 无条件出现在SET子句中，保证每次成功更新都会
    /// 刷新更新时间。单条UPDATE语句在存储层面是原子的。
    ///
    /// # 参数
    /// - `id`: issue ID
    /// - `changes`: 待更新字段集合
    ///
    /// # 返回值
    /// 返回更新后的issue，`id` 不存在时返回 `None`
    async fn update_issue(&self, id: Uuid, changes: IssueChanges) -> DatabaseResult<Option<IssueRecord>> {
        debug!("🔄 更新issue {} 信息: {:#?}", id, changes);

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE issues SET updated_on = now()");

        if let Some(issue_title) = changes.issue_title {
            builder.push(", issue_title = ").push_bind(issue_title);
        }
        if let Some(issue_text) = changes.issue_text {
            builder.push(", issue_text = ").push_bind(issue_text);
        }
        if let Some(created_by) = changes.created_by {
            builder.push(", created_by = ").push_bind(created_by);
        }
        if let Some(assigned_to) = changes.assigned_to {
            builder.push(", assigned_to = ").push_bind(assigned_to);
        }
        if let Some(status_text) = changes.status_text {
            builder.push(", status_text = ").push_bind(status_text);
        }
        if let Some(open) = changes.open {
            builder.push(", open = ").push_bind(open);
        }

        builder.push(" WHERE id = ").push_bind(id);
        builder.push(format!(" RETURNING {ISSUE_COLUMNS}"));

        let record = builder
            .build_query_as::<IssueRecord>()
            .fetch_optional(&self.pool)
            .await?;

        match &record {
            Some(record) => debug!("✅ issue更新成功: {:#?}", record),
            None => debug!("📭 issue {} 不存在，无法更新", id),
        }
        Ok(record)
    }

    /// 根据 ID 删除issue
    ///
    /// # 参数
    /// - `id`: issue ID
    ///
    /// # 返回值
    /// 返回被删除的issue，`id` 不存在时返回 `None`
    async fn delete_issue(&self, id: Uuid) -> DatabaseResult<Option<IssueRecord>> {
        debug!("🗑️ 删除issue: {}", id);

        let record = sqlx::query_as::<_, IssueRecord>(&format!(
            r#"
            DELETE FROM issues
            WHERE id = $1
            RETURNING {ISSUE_COLUMNS};
            "#
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        match &record {
            Some(record) => debug!("✅ issue删除成功: {:#?}", record),
            None => debug!("📭 issue {} 不存在，无法删除", id),
        }
        Ok(record)
    }
}
