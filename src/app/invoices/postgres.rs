//! PostgreSQL 发票存储

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::postgres::PgPool;
use uuid::Uuid;

use super::{
    model::{Invoice, InvoiceDraft},
    store::InvoiceStore,
};
use crate::app::store::StoreError;

#[derive(Clone, Debug)]
pub struct PgInvoiceStore {
    pool: PgPool,
}

impl PgInvoiceStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InvoiceStore for PgInvoiceStore {
    async fn insert(&self, draft: &InvoiceDraft, date: NaiveDate) -> Result<Invoice, StoreError> {
        let invoice = sqlx::query_as::<_, Invoice>(
            r#"
            INSERT INTO invoices (customer_id, amount, status, date)
            VALUES ($1, $2, $3, $4)
            RETURNING id, customer_id, amount, status, date
            "#,
        )
        .bind(draft.customer_id)
        .bind(draft.amount_in_cents)
        .bind(draft.status)
        .bind(date)
        .fetch_one(&self.pool)
        .await?;

        Ok(invoice)
    }

    async fn update(&self, id: Uuid, draft: &InvoiceDraft) -> Result<u64, StoreError> {
        let result = sqlx::query(
            r#"
            UPDATE invoices
            SET customer_id = $1, amount = $2, status = $3
            WHERE id = $4
            "#,
        )
        .bind(draft.customer_id)
        .bind(draft.amount_in_cents)
        .bind(draft.status)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: Uuid) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM invoices WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn list(&self) -> Result<Vec<Invoice>, StoreError> {
        let invoices = sqlx::query_as::<_, Invoice>(
            "SELECT id, customer_id, amount, status, date FROM invoices ORDER BY date DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(invoices)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Invoice>, StoreError> {
        let invoice = sqlx::query_as::<_, Invoice>(
            "SELECT id, customer_id, amount, status, date FROM invoices WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(invoice)
    }
}
