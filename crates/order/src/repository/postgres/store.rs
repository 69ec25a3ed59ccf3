use crate::{
    abstract_trait::store::{OrderStoreTrait, OrderUnitOfWork},
    model::order::Order as OrderModel,
    repository::postgres::unit_of_work::PgUnitOfWork,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};
use uuid::Uuid;

pub struct PgOrderStore {
    db: ConnectionPool,
    tx_timeout_ms: u64,
}

impl PgOrderStore {
    pub fn new(db: ConnectionPool, tx_timeout_ms: u64) -> Self {
        Self { db, tx_timeout_ms }
    }
}

#[async_trait]
impl OrderStoreTrait for PgOrderStore {
    async fn begin(&self) -> Result<Box<dyn OrderUnitOfWork>, RepositoryError> {
        let mut tx = self.db.begin().await.map_err(|err| {
            error!("❌ Failed to begin order transaction: {:?}", err);
            RepositoryError::from(err)
        })?;

        // both settings are transaction-local and reset on commit/rollback
        let timeout = format!("{}ms", self.tx_timeout_ms);
        sqlx::query(
            "SELECT set_config('lock_timeout', $1, true), set_config('statement_timeout', $1, true)",
        )
        .bind(&timeout)
        .execute(&mut *tx)
        .await
        .map_err(|err| {
            error!("❌ Failed to apply transaction timeouts: {:?}", err);
            RepositoryError::from(err)
        })?;

        Ok(Box::new(PgUnitOfWork::new(tx)))
    }

    async fn find_orders_by_buyer(
        &self,
        buyer_id: Uuid,
    ) -> Result<Vec<OrderModel>, RepositoryError> {
        let orders = sqlx::query_as::<_, OrderModel>(
            r#"
            SELECT order_id, user_id, total_price, status, created_at
            FROM orders
            WHERE user_id = $1
            ORDER BY created_at DESC, order_id DESC
            "#,
        )
        .bind(buyer_id)
        .fetch_all(&self.db)
        .await
        .map_err(|err| {
            error!("❌ Failed to list orders for user {}: {:?}", buyer_id, err);
            RepositoryError::from(err)
        })?;

        info!("✅ Found {} orders for user {}", orders.len(), buyer_id);
        Ok(orders)
    }
}
