use crate::{
    domain::requests::order::CreateOrderRecordRequest,
    model::order::{Order as OrderModel, OrderWithItems},
};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use uuid::Uuid;

#[async_trait]
pub trait OrderTxRepositoryTrait: Send {
    async fn create_order(
        &mut self,
        req: &CreateOrderRecordRequest,
    ) -> Result<OrderModel, RepositoryError>;

    async fn fetch_order_with_items(
        &mut self,
        order_id: Uuid,
    ) -> Result<Option<OrderWithItems>, RepositoryError>;
}
