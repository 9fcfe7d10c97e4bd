//! 核心响应处理模块

use serde::Serialize;
use uuid::Uuid;

/// 查询类接口的响应结构
#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
    pub request_id: String,
    pub timestamp: String,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data,
            request_id: Uuid::new_v4().to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// 变更类操作成功后返回给表单的状态
#[derive(Debug, Serialize)]
pub struct ActionState<T> {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ActionState<T> {
    pub fn new(message: impl Into<String>, data: Option<T>) -> Self {
        Self {
            message: message.into(),
            data,
        }
    }

    /// 仅带确认信息（如删除）
    pub fn ack(message: impl Into<String>) -> Self {
        Self::new(message, None)
    }
}
