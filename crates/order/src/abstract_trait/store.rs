use crate::{
    abstract_trait::{
        order::OrderTxRepositoryTrait, order_item::OrderItemTxRepositoryTrait,
        product::ProductTxRepositoryTrait,
    },
    model::order::Order as OrderModel,
};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;
use uuid::Uuid;

pub type DynOrderStore = Arc<dyn OrderStoreTrait + Send + Sync>;

/// One atomic transaction spanning products, orders and order items.
///
/// Dropping a unit of work without calling [`commit`](Self::commit) discards
/// every write made through it.
#[async_trait]
pub trait OrderUnitOfWork:
    ProductTxRepositoryTrait + OrderTxRepositoryTrait + OrderItemTxRepositoryTrait + Send
{
    async fn commit(self: Box<Self>) -> Result<(), RepositoryError>;
    async fn rollback(self: Box<Self>) -> Result<(), RepositoryError>;
}

#[async_trait]
pub trait OrderStoreTrait {
    /// Opens a unit of work. Fails with [`RepositoryError::Unavailable`] when
    /// the store cannot start one within its configured timeout.
    async fn begin(&self) -> Result<Box<dyn OrderUnitOfWork>, RepositoryError>;

    /// The buyer's orders, newest first, without line items.
    async fn find_orders_by_buyer(
        &self,
        buyer_id: Uuid,
    ) -> Result<Vec<OrderModel>, RepositoryError>;
}
