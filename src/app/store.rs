//! 存储层公共错误

use thiserror::Error;

/// 存储调用失败；管道只记录原因，对外统一为一种失败
#[derive(Debug, Error)]
pub enum StoreError {
    #[cfg(feature = "database")]
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("unique constraint violated: {0}")]
    Conflict(String),
    #[error("store unavailable: {0}")]
    Unavailable(String),
}
