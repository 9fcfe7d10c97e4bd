//! 密码哈希
//!
//! 使用 Argon2id，每次调用生成新的随机盐，输出 PHC 字符串。

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, SaltString},
    Algorithm, Argon2, Params, PasswordHasher as _, PasswordVerifier as _, Version,
};
use thiserror::Error;

use crate::infrastructure::config::HashingConfig;

#[derive(Debug, Error)]
pub enum HashError {
    #[error("password is required")]
    MissingInput,
    #[error("invalid argon2 parameters: {0}")]
    InvalidParams(String),
    #[error("password hashing failed: {0}")]
    Hash(String),
    #[error("hashing task failed: {0}")]
    Join(String),
}

#[derive(Debug, Clone)]
pub struct PasswordHasher {
    argon2: Argon2<'static>,
}

impl PasswordHasher {
    pub fn new(config: &HashingConfig) -> Result<Self, HashError> {
        let params = Params::new(config.memory_kib, config.iterations, config.parallelism, None)
            .map_err(|err| HashError::InvalidParams(err.to_string()))?;

        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }

    /// 同步计算哈希；缺少或为空的密码直接返回 `MissingInput`
    pub fn hash_blocking(&self, password: Option<&str>) -> Result<String, HashError> {
        let password = match password {
            Some(p) if !p.is_empty() => p,
            _ => return Err(HashError::MissingInput),
        };

        let salt = SaltString::generate(&mut OsRng);
        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|err| HashError::Hash(err.to_string()))
    }

    /// 在阻塞线程池上计算哈希，避免占用异步工作线程
    pub async fn hash(&self, password: Option<&str>) -> Result<String, HashError> {
        let password = match password {
            Some(p) if !p.is_empty() => p.to_string(),
            _ => return Err(HashError::MissingInput),
        };

        let hasher = self.clone();
        tokio::task::spawn_blocking(move || hasher.hash_blocking(Some(&password)))
            .await
            .map_err(|err| HashError::Join(err.to_string()))?
    }

    /// 校验明文与已存储的哈希是否匹配，格式错误的哈希视为不匹配
    pub fn verify(&self, password: &str, hash: &str) -> bool {
        match PasswordHash::new(hash) {
            Ok(parsed) => self
                .argon2
                .verify_password(password.as_bytes(), &parsed)
                .is_ok(),
            Err(_) => false,
        }
    }
}

#[cfg(test)]
pub(crate) fn test_hasher() -> PasswordHasher {
    PasswordHasher::new(&HashingConfig {
        memory_kib: 64,
        iterations: 1,
        parallelism: 1,
    })
    .expect("test argon2 params")
}
