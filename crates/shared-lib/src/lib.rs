//! 🔧 共享库模块
//!
//! 这个模块包含了在多个服务之间共享的通用代码，包括：
//! - 程序配置

pub mod models;

// 重新导出常用类型
pub use models::AppConfig;
