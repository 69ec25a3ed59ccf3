use crate::model::product::Product as ProductModel;
use async_trait::async_trait;
use shared::errors::RepositoryError;
use uuid::Uuid;

/// Product access scoped to an open unit of work.
#[async_trait]
pub trait ProductTxRepositoryTrait: Send {
    async fn fetch_products_by_ids(
        &mut self,
        ids: &[Uuid],
    ) -> Result<Vec<ProductModel>, RepositoryError>;

    /// Subtracts `amount` from the product's stock only if at least `amount`
    /// is available, evaluated by the store at write time. Returns whether
    /// the write was applied.
    async fn conditional_decrement(
        &mut self,
        product_id: Uuid,
        amount: i32,
    ) -> Result<bool, RepositoryError>;
}
