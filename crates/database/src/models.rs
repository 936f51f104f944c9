//! 数据库模型模块
//!
//! 这里定义与数据库表对应的结构体和相关操作

pub mod issue;

// 重新导出具体的模型
pub use issue::{IssueChanges, IssueCreate, IssueFilter, IssueRecord};
