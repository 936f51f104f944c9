//! issue相关的请求/响应模型
//!
//! 对外的JSON字段名与老接口保持一致：文档ID序列化为 `_id`，
//! 时间戳使用RFC3339格式。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// 对外输出的issue文档
#[derive(Debug, Serialize, ToSchema)]
pub struct IssueInfo {
    #[serde(rename = "_id")]
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

impl From<database::models::IssueRecord> for IssueInfo {
    fn from(record: database::models::IssueRecord) -> Self {
        Self {
            id: record.id,
            project: record.project,
            issue_title: record.issue_title,
            issue_text: record.issue_text,
            created_by: record.created_by,
            assigned_to: record.assigned_to,
            status_text: record.status_text,
            open: record.open,
            created_on: record.created_on,
            updated_on: record.updated_on,
        }
    }
}

/// issue创建请求
///
/// 必填字段缺失时由serde填充为空字符串，验证阶段统一按"缺失"处理，
/// 所以"没传"和"传了空串"会得到同样的错误响应
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct IssueCreate {
    #[schema(example = "Fix login form")]
    #[serde(default)]
    #[validate(length(min = 1))]
    pub issue_title: String,

    #[schema(example = "Submit button does nothing")]
    #[serde(default)]
    #[validate(length(min = 1))]
    pub issue_text: String,

    #[serde(default)]
    #[validate(length(min = 1))]
    pub created_by: String,

    #[serde(default)]
    pub assigned_to: String,

    #[serde(default)]
    pub status_text: String,
}

/// issue部分更新请求
///
/// 除 `_id` 外的字段都是可选的；空字符串等同于"未提供该字段"
#[derive(Debug, Deserialize, ToSchema)]
pub struct IssueUpdate {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,

    #[serde(default)]
    pub issue_title: Option<String>,

    #[serde(default)]
    pub issue_text: Option<String>,

    #[serde(default)]
    pub created_by: Option<String>,

    #[serde(default)]
    pub assigned_to: Option<String>,

    #[serde(default)]
    pub status_text: Option<String>,

    #[serde(default)]
    pub open: Option<bool>,
}

impl IssueUpdate {
    /// 收集实际要更新的字段
    ///
    /// 字符串字段只有在提供且非空时才进入更新集合；`open` 是布尔值，
    /// 只要提供就算一个更新字段。`_id` 本身不参与
    pub fn changes(&self) -> database::models::IssueChanges {
        fn non_empty(value: &Option<String>) -> Option<String> {
            value.as_deref().filter(|v| !v.is_empty()).map(ToOwned::to_owned)
        }

        database::models::IssueChanges {
            issue_title: non_empty(&self.issue_title),
            issue_text: non_empty(&self.issue_text),
            created_by: non_empty(&self.created_by),
            assigned_to: non_empty(&self.assigned_to),
            status_text: non_empty(&self.status_text),
            open: self.open,
        }
    }
}

/// issue删除请求
#[derive(Debug, Deserialize, ToSchema)]
pub struct IssueDelete {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
}

/// issue查询过滤参数
///
/// 所有参数都是精确匹配过滤条件，多个条件为AND关系。
/// 类型敏感字段的解析规则：
/// - `_id`: 必须是合法的UUID，否则不可能匹配任何文档
/// - `open`: `true`/`false`
/// - `created_on`/`updated_on`: RFC3339时间戳
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct IssueSearch {
    #[serde(rename = "_id")]
    pub id: Option<String>,

    /// 会被路径上的project覆盖，见 [`IssueSearch::into_filter`]
    pub project: Option<String>,

    pub issue_title: Option<String>,
    pub issue_text: Option<String>,
    pub created_by: Option<String>,
    pub assigned_to: Option<String>,
    pub status_text: Option<String>,
    pub open: Option<bool>,
    pub created_on: Option<DateTime<Utc>>,
    pub updated_on: Option<DateTime<Utc>>,
}

impl IssueSearch {
    /// 转换为数据库过滤条件
    ///
    /// 路径上的 `project` 始终覆盖查询参数里的同名条件。
    /// `_id` 无法解析为UUID时返回 `None`，表示不可能匹配任何文档
    pub fn into_filter(self, project: String) -> Option<database::models::IssueFilter> {
        let id = match self.id {
            Some(raw) => Some(raw.parse::<Uuid>().ok()?),
            None => None,
        };

        Some(database::models::IssueFilter {
            project,
            id,
            issue_title: self.issue_title,
            issue_text: self.issue_text,
            created_by: self.created_by,
            assigned_to: self.assigned_to,
            status_text: self.status_text,
            open: self.open,
            created_on: self.created_on,
            updated_on: self.updated_on,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn empty_search() -> IssueSearch {
        IssueSearch {
            id: None,
            project: None,
            issue_title: None,
            issue_text: None,
            created_by: None,
            assigned_to: None,
            status_text: None,
            open: None,
            created_on: None,
            updated_on: None,
        }
    }

    #[test]
    fn issue_info_serializes_id_as_underscore_id() {
        let info = IssueInfo {
            id: Uuid::nil(),
            project: "test".to_string(),
            issue_title: "Title".to_string(),
            issue_text: "Text".to_string(),
            created_by: "A".to_string(),
            assigned_to: String::new(),
            status_text: String::new(),
            open: true,
            created_on: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
            updated_on: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
        };

        let value = serde_json::to_value(&info).unwrap();
        assert_eq!(value["_id"], "00000000-0000-0000-0000-000000000000");
        assert_eq!(value["open"], true);
        assert!(value.get("id").is_none());
    }

    #[test]
    fn create_missing_and_empty_required_fields_fail_validation() {
        // "没传"在serde阶段就变成了空串，两种写法验证结果一致
        let missing: IssueCreate = serde_json::from_value(serde_json::json!({
            "issue_title": "Title"
        }))
        .unwrap();
        assert!(missing.validate().is_err());

        let empty: IssueCreate = serde_json::from_value(serde_json::json!({
            "issue_title": "Title",
            "issue_text": "",
            "created_by": ""
        }))
        .unwrap();
        assert!(empty.validate().is_err());

        let ok: IssueCreate = serde_json::from_value(serde_json::json!({
            "issue_title": "Title",
            "issue_text": "Text",
            "created_by": "A"
        }))
        .unwrap();
        assert!(ok.validate().is_ok());
        assert_eq!(ok.assigned_to, "");
        assert_eq!(ok.status_text, "");
    }

    #[test]
    fn update_changes_skip_empty_strings() {
        let update: IssueUpdate = serde_json::from_value(serde_json::json!({
            "_id": "abc",
            "issue_title": "",
            "issue_text": "new text",
            "open": false
        }))
        .unwrap();

        let changes = update.changes();
        assert!(changes.issue_title.is_none());
        assert_eq!(changes.issue_text.as_deref(), Some("new text"));
        assert_eq!(changes.open, Some(false));
        assert!(!changes.is_empty());
    }

    #[test]
    fn update_changes_all_empty_is_empty() {
        let update: IssueUpdate = serde_json::from_value(serde_json::json!({
            "_id": "abc",
            "issue_title": "",
            "issue_text": "",
            "created_by": "",
            "assigned_to": "",
            "status_text": ""
        }))
        .unwrap();

        assert!(update.changes().is_empty());
    }

    #[test]
    fn search_filter_path_project_wins() {
        let search = IssueSearch {
            project: Some("other".to_string()),
            created_by: Some("A".to_string()),
            ..empty_search()
        };

        let filter = search.into_filter("test".to_string()).unwrap();
        assert_eq!(filter.project, "test");
        assert_eq!(filter.created_by.as_deref(), Some("A"));
    }

    #[test]
    fn search_filter_with_malformed_id_matches_nothing() {
        let search = IssueSearch {
            id: Some("not-a-uuid".to_string()),
            ..empty_search()
        };

        assert!(search.into_filter("test".to_string()).is_none());
    }
}
