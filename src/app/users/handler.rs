//! 用户 HTTP 处理器

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    Form,
};
use uuid::Uuid;

use super::model::{self, UpdateUserForm, UserForm, UserRecord};
use crate::{
    app::AppState,
    core::{
        error::CoreError,
        response::{ActionState, ApiResponse},
    },
};

pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<UserRecord>>>, CoreError> {
    let users = state.users.list_users().await?;
    Ok(Json(ApiResponse::success(users)))
}

pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<UserRecord>>, CoreError> {
    let user = state
        .users
        .get_user(id)
        .await?
        .ok_or_else(|| CoreError::NotFound(model::NOT_FOUND.to_string()))?;
    Ok(Json(ApiResponse::success(user)))
}

pub async fn create_user(
    State(state): State<AppState>,
    Form(form): Form<UserForm>,
) -> Result<(StatusCode, Json<ActionState<UserRecord>>), CoreError> {
    let user = state.users.create_user(form).await?;
    Ok((
        StatusCode::CREATED,
        Json(ActionState::new(model::CREATED, Some(user))),
    ))
}

pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Form(form): Form<UpdateUserForm>,
) -> Result<Json<ActionState<UserRecord>>, CoreError> {
    let user = state
        .users
        .update_user(id, form)
        .await?
        .ok_or_else(|| CoreError::NotFound(model::NOT_FOUND.to_string()))?;
    Ok(Json(ActionState::new(model::UPDATED, Some(user))))
}

pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ActionState<()>>, CoreError> {
    state.users.delete_user(id).await?;
    Ok(Json(ActionState::ack(model::DELETED)))
}
