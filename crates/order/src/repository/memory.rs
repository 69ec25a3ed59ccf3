use crate::{
    abstract_trait::{
        order::OrderTxRepositoryTrait,
        order_item::OrderItemTxRepositoryTrait,
        product::ProductTxRepositoryTrait,
        store::{OrderStoreTrait, OrderUnitOfWork},
    },
    domain::requests::{order::CreateOrderRecordRequest, order_item::CreateOrderItemRecordRequest},
    model::{
        order::{Order as OrderModel, OrderWithItems},
        order_item::{OrderItem as OrderItemModel, OrderItemWithProduct},
        product::Product as ProductModel,
    },
};
use async_trait::async_trait;
use chrono::Utc;
use shared::errors::RepositoryError;
use std::{
    collections::HashMap,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};
use tokio::sync::{Mutex, OwnedMutexGuard};
use tracing::{debug, warn};
use uuid::Uuid;

pub const DEFAULT_LOCK_TIMEOUT: Duration = Duration::from_millis(5000);

#[derive(Debug, Clone, Default)]
struct MemoryState {
    products: HashMap<Uuid, ProductModel>,
    orders: Vec<OrderModel>,
    order_items: Vec<OrderItemModel>,
}

/// In-process store that serializes units of work behind one async lock.
///
/// A unit of work edits a private copy of the state and publishes it on
/// commit, so readers never observe a half-applied order.
#[derive(Clone)]
pub struct MemoryOrderStore {
    state: Arc<Mutex<MemoryState>>,
    lock_timeout: Duration,
    fail_next_item_write: Arc<AtomicBool>,
}

impl Default for MemoryOrderStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryOrderStore {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(MemoryState::default())),
            lock_timeout: DEFAULT_LOCK_TIMEOUT,
            fail_next_item_write: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn with_lock_timeout(mut self, lock_timeout: Duration) -> Self {
        self.lock_timeout = lock_timeout;
        self
    }

    pub async fn insert_product(&self, product: ProductModel) {
        let mut state = self.state.lock().await;
        state.products.insert(product.product_id, product);
    }

    pub async fn product(&self, product_id: Uuid) -> Option<ProductModel> {
        self.state.lock().await.products.get(&product_id).cloned()
    }

    pub async fn orders(&self) -> Vec<OrderModel> {
        self.state.lock().await.orders.clone()
    }

    pub async fn order_items(&self) -> Vec<OrderItemModel> {
        self.state.lock().await.order_items.clone()
    }

    /// Makes the next `create_order_item` call fail, for exercising rollback.
    pub fn fail_next_item_write(&self) {
        self.fail_next_item_write.store(true, Ordering::SeqCst);
    }

    async fn acquire(&self) -> Result<OwnedMutexGuard<MemoryState>, RepositoryError> {
        tokio::time::timeout(self.lock_timeout, self.state.clone().lock_owned())
            .await
            .map_err(|_| {
                warn!(
                    "⚠️ Timed out after {:?} waiting for the order store lock",
                    self.lock_timeout
                );
                RepositoryError::Unavailable("timed out waiting for the order store lock".into())
            })
    }
}

#[async_trait]
impl OrderStoreTrait for MemoryOrderStore {
    async fn begin(&self) -> Result<Box<dyn OrderUnitOfWork>, RepositoryError> {
        let guard = self.acquire().await?;
        let staged = (*guard).clone();

        Ok(Box::new(MemoryUnitOfWork {
            guard,
            staged,
            fail_next_item_write: self.fail_next_item_write.clone(),
        }))
    }

    async fn find_orders_by_buyer(
        &self,
        buyer_id: Uuid,
    ) -> Result<Vec<OrderModel>, RepositoryError> {
        let state = self.acquire().await?;

        let mut orders: Vec<OrderModel> = state
            .orders
            .iter()
            .rev()
            .filter(|order| order.user_id == buyer_id)
            .cloned()
            .collect();
        // stable: equal timestamps keep newest-inserted first
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(orders)
    }
}

struct MemoryUnitOfWork {
    guard: OwnedMutexGuard<MemoryState>,
    staged: MemoryState,
    fail_next_item_write: Arc<AtomicBool>,
}

#[async_trait]
impl ProductTxRepositoryTrait for MemoryUnitOfWork {
    async fn fetch_products_by_ids(
        &mut self,
        ids: &[Uuid],
    ) -> Result<Vec<ProductModel>, RepositoryError> {
        let mut products: Vec<ProductModel> = ids
            .iter()
            .filter_map(|id| self.staged.products.get(id).cloned())
            .collect();
        products.sort_by_key(|product| product.product_id);
        products.dedup_by_key(|product| product.product_id);
        Ok(products)
    }

    async fn conditional_decrement(
        &mut self,
        product_id: Uuid,
        amount: i32,
    ) -> Result<bool, RepositoryError> {
        let Some(product) = self.staged.products.get_mut(&product_id) else {
            return Ok(false);
        };

        if product.stock < amount {
            return Ok(false);
        }

        product.stock -= amount;
        product.updated_at = Utc::now().naive_utc();
        Ok(true)
    }
}

#[async_trait]
impl OrderTxRepositoryTrait for MemoryUnitOfWork {
    async fn create_order(
        &mut self,
        req: &CreateOrderRecordRequest,
    ) -> Result<OrderModel, RepositoryError> {
        let order = OrderModel {
            order_id: Uuid::now_v7(),
            user_id: req.user_id,
            total_price: req.total_price,
            status: req.status.as_str().to_string(),
            created_at: Utc::now().naive_utc(),
        };
        self.staged.orders.push(order.clone());
        Ok(order)
    }

    async fn fetch_order_with_items(
        &mut self,
        order_id: Uuid,
    ) -> Result<Option<OrderWithItems>, RepositoryError> {
        let Some(order) = self
            .staged
            .orders
            .iter()
            .find(|order| order.order_id == order_id)
            .cloned()
        else {
            return Ok(None);
        };

        let items = self
            .staged
            .order_items
            .iter()
            .filter(|item| item.order_id == order_id)
            .map(|item| {
                let product = self.staged.products.get(&item.product_id).ok_or_else(|| {
                    RepositoryError::Custom(format!(
                        "order item {} references unknown product {}",
                        item.order_item_id, item.product_id
                    ))
                })?;

                Ok(OrderItemWithProduct {
                    order_item_id: item.order_item_id,
                    order_id: item.order_id,
                    product_id: item.product_id,
                    quantity: item.quantity,
                    price: item.price,
                    product_name: product.name.clone(),
                    product_description: product.description.clone(),
                    product_category: product.category.clone(),
                })
            })
            .collect::<Result<Vec<_>, RepositoryError>>()?;

        Ok(Some(OrderWithItems { order, items }))
    }
}

#[async_trait]
impl OrderItemTxRepositoryTrait for MemoryUnitOfWork {
    async fn create_order_item(
        &mut self,
        req: &CreateOrderItemRecordRequest,
    ) -> Result<OrderItemModel, RepositoryError> {
        if self.fail_next_item_write.swap(false, Ordering::SeqCst) {
            return Err(RepositoryError::Custom("injected order item write failure".into()));
        }

        if !self.staged.orders.iter().any(|o| o.order_id == req.order_id) {
            return Err(RepositoryError::Conflict(format!(
                "order {} does not exist",
                req.order_id
            )));
        }

        let item = OrderItemModel {
            order_item_id: Uuid::now_v7(),
            order_id: req.order_id,
            product_id: req.product_id,
            quantity: req.quantity,
            price: req.price,
            created_at: Utc::now().naive_utc(),
        };
        self.staged.order_items.push(item.clone());
        Ok(item)
    }
}

#[async_trait]
impl OrderUnitOfWork for MemoryUnitOfWork {
    async fn commit(self: Box<Self>) -> Result<(), RepositoryError> {
        let MemoryUnitOfWork {
            mut guard, staged, ..
        } = *self;
        *guard = staged;
        debug!("memory unit of work committed");
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> Result<(), RepositoryError> {
        debug!("memory unit of work rolled back");
        Ok(())
    }
}
