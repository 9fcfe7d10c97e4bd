//! # 管理后台服务
//!
//! 以表单为输入的用户与发票管理：
//! - 用户变更管道：字段校验、管理员标记转换、Argon2id 密码哈希、单次存储调用
//! - 发票变更管道：客户/金额/状态校验，金额按分存储
//! - 存储接口可注入，提供 PostgreSQL 与内存两种实现

pub mod app;
pub mod core;
pub mod infrastructure;

pub use app::{router, AppState};
