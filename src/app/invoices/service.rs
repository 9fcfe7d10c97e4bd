//! 发票变更管道

use chrono::Utc;
use std::sync::Arc;
use tracing::{error, info};
use uuid::Uuid;

use super::{
    error::InvoiceError,
    model::{self, Invoice, InvoiceForm},
    store::InvoiceStore,
};
use crate::app::store::StoreError;

#[derive(Clone)]
pub struct InvoiceService {
    store: Arc<dyn InvoiceStore>,
}

impl InvoiceService {
    pub fn new(store: Arc<dyn InvoiceStore>) -> Self {
        Self { store }
    }

    /// 创建发票，日期取当天（UTC）
    pub async fn create_invoice(&self, form: InvoiceForm) -> Result<Invoice, InvoiceError> {
        let draft = form.validate(model::CREATE_VALIDATION_FAILED)?;
        let invoice = self
            .store
            .insert(&draft, Utc::now().date_naive())
            .await
            .map_err(|err| store_failure("create invoice", err, model::CREATE_FAILED))?;

        info!("Created invoice: {} ({} cents)", invoice.id, invoice.amount);
        Ok(invoice)
    }

    /// 返回是否有行被更新
    pub async fn update_invoice(&self, id: Uuid, form: InvoiceForm) -> Result<bool, InvoiceError> {
        let draft = form.validate(model::UPDATE_VALIDATION_FAILED)?;
        let updated = self
            .store
            .update(id, &draft)
            .await
            .map_err(|err| store_failure("update invoice", err, model::UPDATE_FAILED))?;

        info!("Updated invoice: {} ({} row(s))", id, updated);
        Ok(updated > 0)
    }

    pub async fn delete_invoice(&self, id: Uuid) -> Result<(), InvoiceError> {
        let deleted = self
            .store
            .delete(id)
            .await
            .map_err(|err| store_failure("delete invoice", err, model::DELETE_FAILED))?;

        info!("Deleted invoice: {} ({} row(s))", id, deleted);
        Ok(())
    }

    pub async fn list_invoices(&self) -> Result<Vec<Invoice>, InvoiceError> {
        self.store
            .list()
            .await
            .map_err(|err| store_failure("list invoices", err, model::FETCH_FAILED))
    }

    pub async fn get_invoice(&self, id: Uuid) -> Result<Option<Invoice>, InvoiceError> {
        self.store
            .find_by_id(id)
            .await
            .map_err(|err| store_failure("get invoice", err, model::FETCH_FAILED))
    }
}

fn store_failure(action: &str, err: StoreError, message: &str) -> InvoiceError {
    error!("{} error: {}", action, err);
    InvoiceError::Persistence {
        message: message.to_string(),
    }
}
