//! Issue数据库模型
//!
//! 定义issue相关的数据库模型结构体

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// issue文档结构体，与issues表一一对应
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct IssueRecord {
    pub id: Uuid,
    pub project: String,
    pub issue_title: String,
    pub issue_text: String,
    pub created_by: String,
    pub assigned_to: String,
    pub status_text: String,
    pub open: bool,
    pub created_on: DateTime<Utc>,
    pub updated_on: DateTime<Utc>,
}

/// issue创建参数
///
/// `id`、`open`、`created_on`、`updated_on` 均由存储层生成
#[derive(Debug, Clone)]
pub struct IssueCreate {
    pub project: String,
    pub issue_title: String,
    pub issue_text: String,
    pub created_by: String,
    pub assigned_to: String,
    pub status_text: String,
}

/// issue部分更新参数
///
/// `None` 表示该字段不更新；`updated_on` 由存储层在更新时强制刷新
#[derive(Debug, Clone, Default)]
pub struct IssueChanges {
    pub issue_title: Option<String>,
    pub issue_text: Option<String>,
    pub created_by: Option<String>,
    pub assigned_to: Option<String>,
    pub status_text: Option<String>,
    pub open: Option<bool>,
}

impl IssueChanges {
    /// 是否没有任何待更新字段
    pub fn is_empty(&self) -> bool {
        self.issue_title.is_none()
            && self.issue_text.is_none()
            && self.created_by.is_none()
            && self.assigned_to.is_none()
            && self.status_text.is_none()
            && self.open.is_none()
    }
}

/// issue查询过滤条件
///
/// 所有条件之间为AND关系，`project` 为必选条件
#[derive(Debug, Clone)]
pub struct IssueFilter {
    pub project: String,
    pub id: Option<Uuid>,
    pub issue_title: Option<String>,
    pub issue_text: Option<String>,
    pub created_by: Option<String>,
    pub assigned_to: Option<String>,
    pub status_text: Option<String>,
    pub open: Option<bool>,
    pub created_on: Option<DateTime<Utc>>,
    pub updated_on: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_changes_is_empty() {
        assert!(IssueChanges::default().is_empty());
    }

    #[test]
    fn open_only_changes_is_not_empty() {
        let changes = IssueChanges {
            open: Some(false),
            ..IssueChanges::default()
        };
        assert!(!changes.is_empty());
    }
}
