//! 发票 HTTP 处理器

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    Form,
};
use uuid::Uuid;

use super::model::{self, Invoice, InvoiceForm};
use crate::{
    app::AppState,
    core::{
        error::CoreError,
        response::{ActionState, ApiResponse},
    },
};

pub async fn list_invoices(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Invoice>>>, CoreError> {
    let invoices = state.invoices.list_invoices().await?;
    Ok(Json(ApiResponse::success(invoices)))
}

pub async fn get_invoice(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Invoice>>, CoreError> {
    let invoice = state
        .invoices
        .get_invoice(id)
        .await?
        .ok_or_else(|| CoreError::NotFound(model::NOT_FOUND.to_string()))?;
    Ok(Json(ApiResponse::success(invoice)))
}

pub async fn create_invoice(
    State(state): State<AppState>,
    Form(form): Form<InvoiceForm>,
) -> Result<(StatusCode, Json<ActionState<Invoice>>), CoreError> {
    let invoice = state.invoices.create_invoice(form).await?;
    Ok((
        StatusCode::CREATED,
        Json(ActionState::new(model::CREATED, Some(invoice))),
    ))
}

pub async fn update_invoice(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Form(form): Form<InvoiceForm>,
) -> Result<Json<ActionState<()>>, CoreError> {
    if !state.invoices.update_invoice(id, form).await? {
        return Err(CoreError::NotFound(model::NOT_FOUND.to_string()));
    }
    Ok(Json(ActionState::ack(model::UPDATED)))
}

pub async fn delete_invoice(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ActionState<()>>, CoreError> {
    state.invoices.delete_invoice(id).await?;
    Ok(Json(ActionState::ack(model::DELETED)))
}
