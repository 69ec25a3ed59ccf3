use crate::{
    abstract_trait::product::ProductTxRepositoryTrait, model::product::Product as ProductModel,
    repository::postgres::unit_of_work::PgUnitOfWork,
};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use tracing::{error, info};
use uuid::Uuid;

#[async_trait]
impl ProductTxRepositoryTrait for PgUnitOfWork {
    async fn fetch_products_by_ids(
        &mut self,
        ids: &[Uuid],
    ) -> Result<Vec<ProductModel>, RepositoryError> {
        sqlx::query_as::<_, ProductModel>(
            r#"
            SELECT product_id, name, description, price, stock, category,
                   user_id, created_at, updated_at
            FROM products
            WHERE product_id = ANY($1)
            ORDER BY product_id
            "#,
        )
        .bind(ids)
        .fetch_all(&mut *self.tx)
        .await
        .map_err(|err| {
            error!("❌ Failed to fetch {} products: {:?}", ids.len(), err);
            RepositoryError::from(err)
        })
    }

    async fn conditional_decrement(
        &mut self,
        product_id: Uuid,
        amount: i32,
    ) -> Result<bool, RepositoryError> {
        let result = sqlx::query(
            r#"
            UPDATE products
            SET stock = stock - $1,
                updated_at = current_timestamp
            WHERE product_id = $2
              AND stock >= $1
            "#,
        )
        .bind(amount)
        .bind(product_id)
        .execute(&mut *self.tx)
        .await
        .map_err(|err| {
            error!(
                "❌ Failed to decrease stock for product {}: {:?}",
                product_id, err
            );
            RepositoryError::from(err)
        })?;

        let applied = result.rows_affected() == 1;
        if applied {
            info!("✅ Reserved {} unit(s) of product {}", amount, product_id);
        }
        Ok(applied)
    }
}
