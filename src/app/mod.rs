//! 应用层：用户与发票的处理器、服务和存储

pub mod invoices;
pub mod store;
pub mod users;

use axum::{
    middleware,
    response::Json,
    routing::get,
    Router,
};
use std::time::Duration;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::{
    core::middleware::request_logging_middleware,
    infrastructure::config::HttpConfig,
};
use invoices::InvoiceService;
use users::UserService;

/// 路由共享状态；存储通过服务注入
#[derive(Clone)]
pub struct AppState {
    pub users: UserService,
    pub invoices: InvoiceService,
}

async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// 组装全部路由与中间件
pub fn router(state: AppState, http: &HttpConfig) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route(
            "/users",
            get(users::handler::list_users).post(users::handler::create_user),
        )
        .route(
            "/users/:id",
            get(users::handler::get_user)
                .put(users::handler::update_user)
                .delete(users::handler::delete_user),
        )
        .route(
            "/invoices",
            get(invoices::handler::list_invoices).post(invoices::handler::create_invoice),
        )
        .route(
            "/invoices/:id",
            get(invoices::handler::get_invoice)
                .put(invoices::handler::update_invoice)
                .delete(invoices::handler::delete_invoice),
        )
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(TimeoutLayer::new(Duration::from_secs(http.timeout_seconds)))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
