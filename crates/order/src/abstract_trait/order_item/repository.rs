use crate::{
    domain::requests::order_item::CreateOrderItemRecordRequest,
    model::order_item::OrderItem as OrderItemModel,
};
use async_trait::async_trait;
use shared::errors::RepositoryError;

#[async_trait]
pub trait OrderItemTxRepositoryTrait: Send {
    async fn create_order_item(
        &mut self,
        req: &CreateOrderItemRecordRequest,
    ) -> Result<OrderItemModel, RepositoryError>;
}
