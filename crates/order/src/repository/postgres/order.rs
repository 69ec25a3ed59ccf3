use crate::{
    abstract_trait::order::OrderTxRepositoryTrait,
    domain::requests::order::CreateOrderRecordRequest,
    model::{
        order::{Order as OrderModel, OrderWithItems},
        order_item::OrderItemWithProduct,
    },
    repository::postgres::unit_of_work::PgUnitOfWork,
};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use tracing::{error, info};
use uuid::Uuid;

#[async_trait]
impl OrderTxRepositoryTrait for PgUnitOfWork {
    async fn create_order(
        &mut self,
        req: &CreateOrderRecordRequest,
    ) -> Result<OrderModel, RepositoryError> {
        let result = sqlx::query_as::<_, OrderModel>(
            r#"
            INSERT INTO orders (order_id, user_id, total_price, status, created_at)
            VALUES ($1, $2, $3, $4, current_timestamp)
            RETURNING order_id, user_id, total_price, status, created_at
            "#,
        )
        .bind(Uuid::now_v7())
        .bind(req.user_id)
        .bind(req.total_price)
        .bind(req.status.as_str())
        .fetch_one(&mut *self.tx)
        .await
        .map_err(|err| {
            error!(
                "❌ Failed to create order for user {}: {:?}",
                req.user_id, err
            );
            RepositoryError::from(err)
        })?;

        info!(
            "✅ Created order ID {} for user {}",
            result.order_id, result.user_id
        );
        Ok(result)
    }

    async fn fetch_order_with_items(
        &mut self,
        order_id: Uuid,
    ) -> Result<Option<OrderWithItems>, RepositoryError> {
        let order = sqlx::query_as::<_, OrderModel>(
            r#"
            SELECT order_id, user_id, total_price, status, created_at
            FROM orders
            WHERE order_id = $1
            "#,
        )
        .bind(order_id)
        .fetch_optional(&mut *self.tx)
        .await
        .map_err(|err| {
            error!("❌ Failed to fetch order {}: {:?}", order_id, err);
            RepositoryError::from(err)
        })?;

        let Some(order) = order else {
            return Ok(None);
        };

        let items = sqlx::query_as::<_, OrderItemWithProduct>(
            r#"
            SELECT oi.order_item_id, oi.order_id, oi.product_id, oi.quantity, oi.price,
                   p.name AS product_name,
                   p.description AS product_description,
                   p.category AS product_category
            FROM order_items oi
            JOIN products p ON p.product_id = oi.product_id
            WHERE oi.order_id = $1
            ORDER BY oi.order_item_id
            "#,
        )
        .bind(order_id)
        .fetch_all(&mut *self.tx)
        .await
        .map_err(|err| {
            error!("❌ Failed to fetch items of order {}: {:?}", order_id, err);
            RepositoryError::from(err)
        })?;

        Ok(Some(OrderWithItems { order, items }))
    }
}
