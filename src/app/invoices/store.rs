//! 发票存储接口及内存实现

use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::{
    atomic::{AtomicBool, AtomicUsize, Ordering},
    Arc,
};
use tokio::sync::RwLock;
use uuid::Uuid;

use super::model::{Invoice, InvoiceDraft};
use crate::app::store::StoreError;

#[async_trait]
pub trait InvoiceStore: Send + Sync {
    async fn insert(&self, draft: &InvoiceDraft, date: NaiveDate) -> Result<Invoice, StoreError>;

    /// 更新客户、金额和状态，返回受影响的行数
    async fn update(&self, id: Uuid, draft: &InvoiceDraft) -> Result<u64, StoreError>;

    async fn delete(&self, id: Uuid) -> Result<u64, StoreError>;

    async fn list(&self) -> Result<Vec<Invoice>, StoreError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Invoice>, StoreError>;
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryInvoiceStore {
    rows: Arc<RwLock<Vec<Invoice>>>,
    calls: Arc<AtomicUsize>,
    failing: Arc<AtomicBool>,
}

impl InMemoryInvoiceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record_call(&self) -> Result<(), StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("in-memory store set to fail".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl InvoiceStore for InMemoryInvoiceStore {
    async fn insert(&self, draft: &InvoiceDraft, date: NaiveDate) -> Result<Invoice, StoreError> {
        self.record_call()?;
        let invoice = Invoice {
            id: Uuid::new_v4(),
            customer_id: draft.customer_id,
            amount: draft.amount_in_cents,
            status: draft.status,
            date,
        };
        self.rows.write().await.push(invoice.clone());
        Ok(invoice)
    }

    async fn update(&self, id: Uuid, draft: &InvoiceDraft) -> Result<u64, StoreError> {
        self.record_call()?;
        let mut rows = self.rows.write().await;
        match rows.iter_mut().find(|row| row.id == id) {
            Some(row) => {
                row.customer_id = draft.customer_id;
                row.amount = draft.amount_in_cents;
                row.status = draft.status;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<u64, StoreError> {
        self.record_call()?;
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|row| row.id != id);
        Ok((before - rows.len()) as u64)
    }

    async fn list(&self) -> Result<Vec<Invoice>, StoreError> {
        self.record_call()?;
        Ok(self.rows.read().await.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Invoice>, StoreError> {
        self.record_call()?;
        Ok(self.rows.read().await.iter().find(|row| row.id == id).cloned())
    }
}
