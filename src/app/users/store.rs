//! 用户存储接口及内存实现

use async_trait::async_trait;
use std::sync::{
    atomic::{AtomicBool, AtomicUsize, Ordering},
    Arc,
};
use tokio::sync::RwLock;
use uuid::Uuid;

use super::model::{NewUser, UserRecord};
use crate::app::store::StoreError;

/// 管道使用的五种语句；每个方法对应一次存储调用
#[async_trait]
pub trait UserStore: Send + Sync {
    /// 插入并返回新记录
    async fn insert(&self, user: &NewUser, password_hash: &str) -> Result<UserRecord, StoreError>;

    /// 只更新 email 与 password 两列；没有匹配行时返回 None
    async fn update_credentials(
        &self,
        id: Uuid,
        email: &str,
        password_hash: &str,
    ) -> Result<Option<UserRecord>, StoreError>;

    /// 按 id 删除，返回受影响的行数
    async fn delete(&self, id: Uuid) -> Result<u64, StoreError>;

    async fn list(&self) -> Result<Vec<UserRecord>, StoreError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<UserRecord>, StoreError>;
}

/// 内存实现，按插入顺序保存，并统计调用次数
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserStore {
    rows: Arc<RwLock<Vec<UserRecord>>>,
    calls: Arc<AtomicUsize>,
    failing: Arc<AtomicBool>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 每次调用都失败的存储
    pub fn failing() -> Self {
        let store = Self::default();
        store.set_failing(true);
        store
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// 已发出的存储调用次数（包括失败的调用）
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
impl UserStore for InMemoryUserStore {
    async fn insert(&self, user: &NewUser, password_hash: &str) -> Result<UserRecord, StoreError> {
        self.record_call()?;
        let mut rows = self.rows.write().await;
        if rows.iter().any(|row| row.email == user.email) {
            return Err(StoreError::Conflict(format!("email {} already exists", user.email)));
        }

        let record = UserRecord {
            id: Uuid::new_v4(),
            name: user.name.clone(),
            email: user.email.clone(),
            password_hash: password_hash.to_string(),
            is_admin: user.is_admin,
        };
        rows.push(record.clone());
        Ok(record)
    }

    async fn update_credentials(
        &self,
        id: Uuid,
        email: &str,
        password_hash: &str,
    ) -> Result<Option<UserRecord>, StoreError> {
        self.record_call()?;
        let mut rows = self.rows.write().await;
        if rows.iter().any(|row| row.id != id && row.email == email) {
            return Err(StoreError::Conflict(format!("email {} already exists", email)));
        }

        Ok(rows.iter_mut().find(|row| row.id == id).map(|row| {
            row.email = email.to_string();
            row.password_hash = password_hash.to_string();
            row.clone()
        }))
    }

    async fn delete(&self, id: Uuid) -> Result<u64, StoreError> {
        self.record_call()?;
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|row| row.id != id);
        Ok((before - rows.len()) as u64)
    }

    async fn list(&self) -> Result<Vec<UserRecord>, StoreError> {
        self.record_call()?;
        Ok(self.rows.read().await.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<UserRecord>, StoreError> {
        self.record_call()?;
        Ok(self.rows.read().await.iter().find(|row| row.id == id).cloned())
    }
}
