//! 发票数据模型与表单校验

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;
use validator::Validate;

use super::error::InvoiceError;
use crate::core::error::collect_field_errors;

pub const CREATE_VALIDATION_FAILED: &str = "Missing Fields. Failed to Create Invoice.";
pub const UPDATE_VALIDATION_FAILED: &str = "Missing Fields. Failed to Update Invoice.";
pub const CREATED: &str = "Created Invoice.";
pub const CREATE_FAILED: &str = "Database Error: Failed to Create Invoice.";
pub const UPDATED: &str = "Updated Invoice.";
pub const UPDATE_FAILED: &str = "Database Error: Failed to Update Invoice.";
pub const DELETED: &str = "Deleted Invoice.";
pub const DELETE_FAILED: &str = "Database Error: Failed to Delete Invoice.";
pub const FETCH_FAILED: &str = "Database Error: Failed to Fetch Invoices.";
pub const NOT_FOUND: &str = "Invoice not found.";

const AMOUNT_NOT_POSITIVE: &str = "Please enter an amount greater than $0.";
const AMOUNT_TOO_LARGE: &str = "Please enter a smaller amount.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "database", derive(sqlx::Type))]
#[cfg_attr(
    feature = "database",
    sqlx(type_name = "varchar", rename_all = "lowercase")
)]
pub enum InvoiceStatus {
    Pending,
    Paid,
}

impl FromStr for InvoiceStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(InvoiceStatus::Pending),
            "paid" => Ok(InvoiceStatus::Paid),
            _ => Err(()),
        }
    }
}

/// `invoices` 表中的一行，金额以分为单位
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "database", derive(sqlx::FromRow))]
pub struct Invoice {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub amount: i32,
    pub status: InvoiceStatus,
    pub date: NaiveDate,
}

/// 发票表单原始字段
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InvoiceForm {
    #[serde(rename = "customerId")]
    pub customer_id: Option<String>,
    pub amount: Option<String>,
    pub status: Option<String>,
}

/// 通过校验、可直接写入的发票字段
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceDraft {
    pub customer_id: Uuid,
    pub amount_in_cents: i32,
    pub status: InvoiceStatus,
}

#[derive(Debug, Validate)]
struct InvoiceInput {
    #[validate(required(message = "Please select a customer."))]
    customer_id: Option<Uuid>,
    #[validate(range(exclusive_min = 0.0, message = "Please enter an amount greater than $0."))]
    amount: f64,
    #[validate(required(message = "Please select an invoice status."))]
    status: Option<InvoiceStatus>,
}

/// 金额按数字解析；空串、非数字、非有限值都按 0 处理
fn coerce_amount(raw: Option<&str>) -> f64 {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|amount| amount.is_finite())
        .unwrap_or(0.0)
}

impl InvoiceForm {
    /// 校验表单，失败时以 `failure_message` 作为总体提示
    pub fn validate(&self, failure_message: &str) -> Result<InvoiceDraft, InvoiceError> {
        let input = InvoiceInput {
            customer_id: self
                .customer_id
                .as_deref()
                .and_then(|id| Uuid::parse_str(id.trim()).ok()),
            amount: coerce_amount(self.amount.as_deref()),
            status: self.status.as_deref().and_then(|s| s.parse().ok()),
        };

        let mut errors = match input.validate() {
            Ok(()) => Default::default(),
            Err(errors) => collect_field_errors(&errors),
        };
        // 错误键与表单字段名保持一致
        if let Some(messages) = errors.remove("customer_id") {
            errors.insert("customerId".to_string(), messages);
        }

        // 以取整后的分为准，不足半分的金额同样视为 0
        let cents = (input.amount * 100.0).round();
        if !errors.contains_key("amount") {
            let message = if cents < 1.0 {
                Some(AMOUNT_NOT_POSITIVE)
            } else if cents > f64::from(i32::MAX) {
                Some(AMOUNT_TOO_LARGE)
            } else {
                None
            };
            if let Some(message) = message {
                errors.insert("amount".to_string(), vec![message.to_string()]);
            }
        }

        match (input.customer_id, input.status) {
            (Some(customer_id), Some(status)) if errors.is_empty() => Ok(InvoiceDraft {
                customer_id,
                amount_in_cents: cents as i32,
                status,
            }),
            _ => Err(InvoiceError::Validation {
                message: failure_message.to_string(),
                errors,
            }),
        }
    }
}
