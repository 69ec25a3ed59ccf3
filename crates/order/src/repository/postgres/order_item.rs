use crate::{
    abstract_trait::order_item::OrderItemTxRepositoryTrait,
    domain::requests::order_item::CreateOrderItemRecordRequest,
    model::order_item::OrderItem as OrderItemModel,
    repository::postgres::unit_of_work::PgUnitOfWork,
};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use tracing::error;
use uuid::Uuid;

#[async_trait]
impl OrderItemTxRepositoryTrait for PgUnitOfWork {
    async fn create_order_item(
        &mut self,
        req: &CreateOrderItemRecordRequest,
    ) -> Result<OrderItemModel, RepositoryError> {
        sqlx::query_as::<_, OrderItemModel>(
            r#"
            INSERT INTO order_items (order_item_id, order_id, product_id, quantity, price, created_at)
            VALUES ($1, $2, $3, $4, $5, current_timestamp)
            RETURNING order_item_id, order_id, product_id, quantity, price, created_at
            "#,
        )
        .bind(Uuid::now_v7())
        .bind(req.order_id)
        .bind(req.product_id)
        .bind(req.quantity)
        .bind(req.price)
        .fetch_one(&mut *self.tx)
        .await
        .map_err(|err| {
            error!(
                "❌ Failed to create order item for order {}: {:?}",
                req.order_id, err
            );
            RepositoryError::from(err)
        })
    }
}
