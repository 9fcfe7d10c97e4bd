//! 用户管道错误

use thiserror::Error;

use crate::core::error::{CoreError, FieldErrors};

/// 用户变更管道对外暴露的错误，存储层原因只记录日志，不向调用方区分
#[derive(Debug, Error)]
pub enum UserError {
    #[error("{message}")]
    Validation { message: String, errors: FieldErrors },
    #[error("{0} is required.")]
    MissingInput(&'static str),
    #[error("{message}")]
    Persistence { message: String },
}

impl UserError {
    pub(crate) fn persistence(message: &str) -> Self {
        UserError::Persistence {
            message: message.to_string(),
        }
    }

    /// 校验失败时的字段错误；其他错误返回 None
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            UserError::Validation { errors, .. } => Some(errors),
            _ => None,
        }
    }
}

impl From<UserError> for CoreError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::Validation { message, errors } => CoreError::BadRequest { message, errors },
            UserError::MissingInput(field) => {
                CoreError::bad_request(format!("{} is required.", field))
            }
            UserError::Persistence { message } => CoreError::InternalServerError(message),
        }
    }
}
