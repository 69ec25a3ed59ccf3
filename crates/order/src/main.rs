use anyhow::{Context, Result};
use order::{
    abstract_trait::store::DynOrderStore,
    config::myconfig::{Config, OrderStoreKind},
    handler::AppRouter,
    repository::memory::MemoryOrderStore,
    state::AppState,
};
use shared::{config::ConnectionManager, utils::init_logger};
use sqlx::{Pool, Postgres};
use std::{sync::Arc, time::Duration};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    let (config, state) = setup().await.context("Failed to setup application")?;

    AppRouter::serve(config.port, state)
        .await
        .context("HTTP server failed")?;

    info!("✅ Order Service shutdown complete.");
    Ok(())
}

async fn setup() -> Result<(Config, AppState)> {
    dotenv::dotenv().ok();

    let is_dev = std::env::var("DEV_MODE")
        .map(|v| v == "true" || v == "1")
        .unwrap_or(false);
    let is_enable_file = std::env::var("ENABLE_FILE_LOG")
        .map(|v| v == "true")
        .unwrap_or(false);

    init_logger("order-service", is_dev, is_enable_file);

    let config = Config::init().context("Failed to load configuration")?;

    let state = match config.order_store {
        OrderStoreKind::Postgres => {
            let db_pool = ConnectionManager::new_pool(
                &config.database_url,
                config.db_min_conn,
                config.db_max_conn,
                Duration::from_millis(config.order_tx_timeout_ms),
            )
            .await
            .context("Failed to initialize database pool")?;

            if config.run_migrations {
                run_migrations(&db_pool)
                    .await
                    .context("Failed to run database migrations")?;
                info!("✅ Database migrations applied.");
            }

            AppState::new(db_pool, &config)
        }
        OrderStoreKind::Memory => {
            warn!("⚠️ Using the in-memory order store; data is lost on restart.");
            let store: DynOrderStore = Arc::new(
                MemoryOrderStore::new()
                    .with_lock_timeout(Duration::from_millis(config.order_tx_timeout_ms)),
            );
            AppState::with_store(store, &config.jwt_secret)
        }
    };

    info!("✅ Application setup completed successfully.");
    Ok((config, state))
}

pub async fn run_migrations(pool: &Pool<Postgres>) -> anyhow::Result<()> {
    sqlx::migrate!("./migrations").run(pool).await?;

    Ok(())
}
