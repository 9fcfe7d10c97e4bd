//! 用户变更管道：校验 -> 哈希 -> 单次存储调用

use std::sync::Arc;
use tracing::{error, info};
use uuid::Uuid;

use super::{
    error::UserError,
    hasher::{HashError, PasswordHasher},
    model::{self, UpdateUserForm, UserForm, UserRecord},
    store::UserStore,
};
use crate::app::store::StoreError;

#[derive(Clone)]
pub struct UserService {
    store: Arc<dyn UserStore>,
    hasher: PasswordHasher,
}

impl UserService {
    pub fn new(store: Arc<dyn UserStore>, hasher: PasswordHasher) -> Self {
        Self { store, hasher }
    }

    pub fn hasher(&self) -> &PasswordHasher {
        &self.hasher
    }

    /// 校验表单、哈希密码并插入一条新记录
    pub async fn create_user(&self, form: UserForm) -> Result<UserRecord, UserError> {
        let new_user = form.validate()?;
        let password_hash = self
            .hasher
            .hash(Some(&new_user.password))
            .await
            .map_err(|err| hash_failure(err, model::CREATE_FAILED))?;

        let user = self
            .store
            .insert(&new_user, &password_hash)
            .await
            .map_err(|err| store_failure("create user", err, model::CREATE_FAILED))?;

        info!("Created user: {} ({})", user.name, user.id);
        Ok(user)
    }

    /// 校验邮箱和密码后重新计算哈希，只更新这两列；name/isadmin 保持不变
    pub async fn update_user(
        &self,
        id: Uuid,
        form: UpdateUserForm,
    ) -> Result<Option<UserRecord>, UserError> {
        let credentials = form.validate()?;
        let password_hash = self
            .hasher
            .hash(Some(&credentials.password))
            .await
            .map_err(|err| hash_failure(err, model::UPDATE_FAILED))?;

        let user = self
            .store
            .update_credentials(id, &credentials.email, &password_hash)
            .await
            .map_err(|err| store_failure("update user", err, model::UPDATE_FAILED))?;

        match &user {
            Some(user) => info!("Updated user: {} ({})", user.name, user.id),
            None => info!("Update matched no user: {}", id),
        }
        Ok(user)
    }

    /// 删除不存在的 id 同样视为成功
    pub async fn delete_user(&self, id: Uuid) -> Result<(), UserError> {
        let deleted = self
            .store
            .delete(id)
            .await
            .map_err(|err| store_failure("delete user", err, model::DELETE_FAILED))?;

        info!("Deleted user: {} ({} row(s))", id, deleted);
        Ok(())
    }

    pub async fn list_users(&self) -> Result<Vec<UserRecord>, UserError> {
        self.store
            .list()
            .await
            .map_err(|err| store_failure("list users", err, model::FETCH_FAILED))
    }

    pub async fn get_user(&self, id: Uuid) -> Result<Option<UserRecord>, UserError> {
        self.store
            .find_by_id(id)
            .await
            .map_err(|err| store_failure("get user", err, model::FETCH_FAILED))
    }
}

fn store_failure(action: &str, err: StoreError, message: &str) -> UserError {
    error!("{} error: {}", action, err);
    UserError::persistence(message)
}

fn hash_failure(err: HashError, message: &str) -> UserError {
    match err {
        HashError::MissingInput => UserError::MissingInput("password"),
        other => {
            error!("password hashing error: {}", other);
            UserError::persistence(message)
        }
    }
}
