use crate::abstract_trait::store::OrderUnitOfWork;
use async_trait::async_trait;
use shared::errors::RepositoryError;
use sqlx::{Postgres, Transaction};
use tracing::error;

/// A PostgreSQL transaction. Entity access lives in the sibling modules;
/// an uncommitted transaction is rolled back by sqlx on drop.
pub struct PgUnitOfWork {
    pub(super) tx: Transaction<'static, Postgres>,
}

impl PgUnitOfWork {
    pub fn new(tx: Transaction<'static, Postgres>) -> Self {
        Self { tx }
    }
}

#[async_trait]
impl OrderUnitOfWork for PgUnitOfWork {
    async fn commit(self: Box<Self>) -> Result<(), RepositoryError> {
        self.tx.commit().await.map_err(|err| {
            error!("❌ Failed to commit order transaction: {:?}", err);
            RepositoryError::from(err)
        })
    }

    async fn rollback(self: Box<Self>) -> Result<(), RepositoryError> {
        self.tx.rollback().await.map_err(RepositoryError::from)
    }
}
