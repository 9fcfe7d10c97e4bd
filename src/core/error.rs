//! 核心错误处理模块

use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// 字段名 -> 错误信息列表
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// 核心错误类型，负责把领域错误映射为 HTTP 响应
#[derive(Debug)]
pub enum CoreError {
    BadRequest { message: String, errors: FieldErrors },
    NotFound(String),
    InternalServerError(String),
}

impl CoreError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        CoreError::BadRequest {
            message: message.into(),
            errors: FieldErrors::new(),
        }
    }
}

/// 把 validator 的校验结果整理为按字段分组的错误信息
pub fn collect_field_errors(errors: &validator::ValidationErrors) -> FieldErrors {
    let mut fields = FieldErrors::new();
    for (field, field_errors) in errors.field_errors() {
        let messages = field_errors
            .iter()
            .map(|error| {
                error
                    .message
                    .as_ref()
                    .map(|msg| msg.to_string())
                    .unwrap_or_else(|| format!("Invalid {}.", field))
            })
            .collect();
        fields.insert(field.to_string(), messages);
    }
    fields
}

/// 错误响应结构
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub errors: FieldErrors,
    pub code: u16,
    pub timestamp: String,
}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        let (status, error, message, errors) = match self {
            CoreError::BadRequest { message, errors } => {
                (StatusCode::BAD_REQUEST, "BAD_REQUEST", message, errors)
            }
            CoreError::NotFound(message) => {
                (StatusCode::NOT_FOUND, "NOT_FOUND", message, FieldErrors::new())
            }
            CoreError::InternalServerError(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_SERVER_ERROR",
                message,
                FieldErrors::new(),
            ),
        };

        let error_response = ErrorResponse {
            error: error.to_string(),
            message,
            errors,
            code: status.as_u16(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        };

        (status, axum::Json(error_response)).into_response()
    }
}
