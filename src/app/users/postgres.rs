//! PostgreSQL 用户存储

use async_trait::async_trait;
use sqlx::postgres::PgPool;
use uuid::Uuid;

use super::{
    model::{NewUser, UserRecord},
    store::UserStore,
};
use crate::app::store::StoreError;

#[derive(Clone, Debug)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn insert(&self, user: &NewUser, password_hash: &str) -> Result<UserRecord, StoreError> {
        let record = sqlx::query_as::<_, UserRecord>(
            r#"
            INSERT INTO users (name, email, password, isadmin)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, email, password, isadmin
            "#,
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(password_hash)
        .bind(user.is_admin)
        .fetch_one(&self.pool)
        .await?;

        Ok(record)
    }

    async fn update_credentials(
        &self,
        id: Uuid,
        email: &str,
        password_hash: &str,
    ) -> Result<Option<UserRecord>, StoreError> {
        let record = sqlx::query_as::<_, UserRecord>(
            r#"
            UPDATE users
            SET email = $1, password = $2
            WHERE id = $3
            RETURNING id, name, email, password, isadmin
            "#,
        )
        .bind(email)
        .bind(password_hash)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    async fn delete(&self, id: Uuid) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn list(&self) -> Result<Vec<UserRecord>, StoreError> {
        let users =
            sqlx::query_as::<_, UserRecord>("SELECT id, name, email, password, isadmin FROM users")
                .fetch_all(&self.pool)
                .await?;

        Ok(users)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<UserRecord>, StoreError> {
        let user = sqlx::query_as::<_, UserRecord>(
            "SELECT id, name, email, password, isadmin FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }
}
