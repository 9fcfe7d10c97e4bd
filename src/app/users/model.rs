//! 用户数据模型与表单校验

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::error::UserError;
use crate::core::error::collect_field_errors;

pub const CREATE_VALIDATION_FAILED: &str = "Missing Fields. Failed to Create User.";
pub const UPDATE_VALIDATION_FAILED: &str = "Missing Fields. Failed to Update User.";
pub const CREATED: &str = "User created successfully.";
pub const CREATE_FAILED: &str = "Failed to create user.";
pub const UPDATED: &str = "User updated successfully.";
pub const UPDATE_FAILED: &str = "Failed to update user.";
pub const DELETED: &str = "User deleted successfully.";
pub const DELETE_FAILED: &str = "Failed to delete user.";
pub const FETCH_FAILED: &str = "Failed to fetch users.";
pub const NOT_FOUND: &str = "User not found.";

/// `users` 表中的一行；密码只保存哈希且不会被序列化输出
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "database", derive(sqlx::FromRow))]
pub struct UserRecord {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    #[cfg_attr(feature = "database", sqlx(rename = "password"))]
    pub password_hash: String,
    #[serde(rename = "isadmin")]
    #[cfg_attr(feature = "database", sqlx(rename = "isadmin"))]
    pub is_admin: bool,
}

/// 创建用户表单的原始字段，全部按字符串接收
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub isadmin: Option<String>,
}

/// 更新用户表单，只允许修改邮箱和密码
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateUserForm {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// 通过校验的新用户，密码仍为明文，等待哈希
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub is_admin: bool,
}

#[derive(Debug, Validate)]
struct UserInput {
    #[validate(length(
        min = 1,
        max = 100,
        message = "Please enter a name (at most 100 characters)."
    ))]
    name: String,
    #[validate(email(message = "Please enter a valid email address."))]
    email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters."))]
    password: String,
}

/// 更新时可修改的凭据，已通过校验
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Validate)]
struct CredentialsInput {
    #[validate(email(message = "Please enter a valid email address."))]
    email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters."))]
    password: String,
}

/// 只有字面量 "true" 视为管理员
pub fn parse_admin_flag(raw: Option<&str>) -> bool {
    raw == Some("true")
}

impl UserForm {
    /// 去除空白后校验所有字段，所有失败字段一起返回
    pub fn validate(self) -> Result<NewUser, UserError> {
        let input = UserInput {
            name: self.name.as_deref().unwrap_or_default().trim().to_string(),
            email: self.email.as_deref().unwrap_or_default().trim().to_string(),
            password: self.password.unwrap_or_default(),
        };

        if let Err(errors) = input.validate() {
            return Err(UserError::Validation {
                message: CREATE_VALIDATION_FAILED.to_string(),
                errors: collect_field_errors(&errors),
            });
        }

        Ok(NewUser {
            name: input.name,
            email: input.email,
            password: input.password,
            is_admin: parse_admin_flag(self.isadmin.as_deref()),
        })
    }
}

impl UpdateUserForm {
    /// 校验邮箱和密码；name/isadmin 不在更新范围内。
    /// 缺少密码时返回 `MissingInput`，与哈希前的检查一致
    pub fn validate(self) -> Result<Credentials, UserError> {
        let password = match self.password {
            Some(p) if !p.is_empty() => p,
            _ => return Err(UserError::MissingInput("password")),
        };
        let input = CredentialsInput {
            email: self.email.as_deref().unwrap_or_default().trim().to_string(),
            password,
        };

        if let Err(errors) = input.validate() {
            return Err(UserError::Validation {
                message: UPDATE_VALIDATION_FAILED.to_string(),
                errors: collect_field_errors(&errors),
            });
        }

        Ok(Credentials {
            email: input.email,
            password: input.password,
        })
    }
}
