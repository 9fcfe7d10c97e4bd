//! 发票管道错误

use thiserror::Error;

use crate::core::error::{CoreError, FieldErrors};

#[derive(Debug, Error)]
pub enum InvoiceError {
    #[error("{message}")]
    Validation { message: String, errors: FieldErrors },
    #[error("{message}")]
    Persistence { message: String },
}

impl InvoiceError {
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            InvoiceError::Validation { errors, .. } => Some(errors),
            InvoiceError::Persistence { .. } => None,
        }
    }
}

impl From<InvoiceError> for CoreError {
    fn from(err: InvoiceError) -> Self {
        match err {
            InvoiceError::Validation { message, errors } => CoreError::BadRequest { message, errors },
            InvoiceError::Persistence { message } => CoreError::InternalServerError(message),
        }
    }
}
