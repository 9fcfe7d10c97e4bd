//! 用户管理：表单校验、密码哈希与增删改查

pub mod error;
pub mod handler;
pub mod hasher;
pub mod model;
#[cfg(feature = "database")]
pub mod postgres;
pub mod service;
pub mod store;

pub use error::UserError;
pub use hasher::PasswordHasher;
pub use model::{UpdateUserForm, UserForm, UserRecord};
pub use service::UserService;
pub use store::{InMemoryUserStore, UserStore};
