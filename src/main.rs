use std::{path::Path, sync::Arc};

use dashboard_admin::{
    app::{
        invoices::{postgres::PgInvoiceStore, InvoiceService},
        users::{postgres::PgUserStore, PasswordHasher, UserService},
    },
    infrastructure::{config::Config, database::DatabaseManager, logger::Logger},
    router, AppState,
};
use tokio::net::TcpListener;
use tracing::{error, info};

const DEFAULT_CONFIG_PATH: &str = "config/app.toml";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 命令行第一个参数为配置文件路径，缺省时尝试默认路径
    let config_path = std::env::args()
        .nth(1)
        .or_else(|| Path::new(DEFAULT_CONFIG_PATH).exists().then(|| DEFAULT_CONFIG_PATH.to_string()));
    let config = Config::load(config_path.as_deref())?;

    Logger::init(&config.logging);
    info!("Starting dashboard admin server...");

    let db = DatabaseManager::new(&config.database).await.map_err(|e| {
        error!("Failed to initialize database: {}", e);
        e
    })?;
    db.ping().await?;

    let hasher = PasswordHasher::new(&config.hashing)?;
    let state = AppState {
        users: UserService::new(Arc::new(PgUserStore::new(db.get_pool().clone())), hasher),
        invoices: InvoiceService::new(Arc::new(PgInvoiceStore::new(db.get_pool().clone()))),
    };
    let app = router(state, &config.http);

    let listener = TcpListener::bind(config.listen_addr()).await?;
    info!("Dashboard admin server running on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
