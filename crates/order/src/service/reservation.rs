use crate::{
    abstract_trait::{
        order::OrderTxRepositoryTrait,
        order_item::OrderItemTxRepositoryTrait,
        product::ProductTxRepositoryTrait,
        reservation::ReservationEngineTrait,
        store::{DynOrderStore, OrderStoreTrait, OrderUnitOfWork},
    },
    domain::{
        requests::{
            order::{CreateOrderRecordRequest, OrderLine},
            order_item::CreateOrderItemRecordRequest,
        },
        response::order::OrderResponse,
    },
    model::{
        order::{OrderStatus, OrderWithItems},
        product::Product as ProductModel,
    },
};
use async_trait::async_trait;
use rust_decimal::Decimal;
use shared::errors::ServiceError;
use std::collections::{BTreeMap, HashMap};
use tracing::{error, info, warn};
use uuid::Uuid;

/// Places orders against the inventory.
///
/// Each call runs in a single unit of work: products are read, availability
/// is checked against the summed demand, stock is reserved with conditional
/// decrements and the order plus its lines are written. Any failure discards
/// the whole unit of work. The conditional decrement is the authoritative
/// guard; the read-side check only fails fast with a better message.
#[derive(Clone)]
pub struct StockReservationEngine {
    store: DynOrderStore,
}

impl StockReservationEngine {
    pub fn new(store: DynOrderStore) -> Self {
        Self { store }
    }

    async fn reserve(
        uow: &mut dyn OrderUnitOfWork,
        buyer_id: Uuid,
        lines: &[OrderLine],
    ) -> Result<OrderWithItems, ServiceError> {
        let demand = aggregate_demand(lines);
        let ids: Vec<Uuid> = demand.keys().copied().collect();

        let products: HashMap<Uuid, ProductModel> = uow
            .fetch_products_by_ids(&ids)
            .await?
            .into_iter()
            .map(|product| (product.product_id, product))
            .collect();

        let mut missing = Vec::new();
        let mut reservations = Vec::with_capacity(demand.len());
        for (product_id, requested) in &demand {
            match products.get(product_id) {
                Some(product) => reservations.push((product, *requested)),
                None => missing.push(*product_id),
            }
        }
        if !missing.is_empty() {
            return Err(ServiceError::ProductNotFound(missing));
        }

        for (product, requested) in &reservations {
            if i64::from(product.stock) < *requested {
                return Err(insufficient_stock(product, product.stock, *requested));
            }
        }

        let mut total_price = Decimal::ZERO;
        for line in lines {
            let product = products
                .get(&line.product_id)
                .ok_or_else(|| ServiceError::ProductNotFound(vec![line.product_id]))?;
            total_price = product
                .price
                .checked_mul(Decimal::from(line.quantity))
                .and_then(|line_total| total_price.checked_add(line_total))
                .ok_or_else(|| {
                    ServiceError::Validation(vec![
                        "items: order total exceeds the supported amount".into(),
                    ])
                })?;
        }

        // ascending product id, so concurrent reservations lock rows in the same order
        for (product, requested) in &reservations {
            let amount = i32::try_from(*requested)
                .map_err(|_| insufficient_stock(product, product.stock, *requested))?;

            if !uow.conditional_decrement(product.product_id, amount).await? {
                let available = uow
                    .fetch_products_by_ids(&[product.product_id])
                    .await?
                    .first()
                    .map(|current| current.stock)
                    .unwrap_or(0);
                return Err(insufficient_stock(product, available, *requested));
            }
        }

        let order = uow
            .create_order(&CreateOrderRecordRequest {
                user_id: buyer_id,
                total_price,
                status: OrderStatus::Pending,
            })
            .await?;

        for line in lines {
            let product = products
                .get(&line.product_id)
                .ok_or_else(|| ServiceError::ProductNotFound(vec![line.product_id]))?;

            uow.create_order_item(&CreateOrderItemRecordRequest {
                order_id: order.order_id,
                product_id: line.product_id,
                quantity: line.quantity,
                price: product.price,
            })
            .await?;
        }

        uow.fetch_order_with_items(order.order_id)
            .await?
            .ok_or_else(|| {
                ServiceError::Internal(format!(
                    "order {} vanished inside its own transaction",
                    order.order_id
                ))
            })
    }
}

#[async_trait]
impl ReservationEngineTrait for StockReservationEngine {
    async fn place_order(
        &self,
        buyer_id: Uuid,
        lines: &[OrderLine],
    ) -> Result<OrderResponse, ServiceError> {
        check_lines(lines)?;

        info!(
            "🏗️ Placing order for user_id={} with {} line(s)",
            buyer_id,
            lines.len()
        );

        let mut uow = self.store.begin().await.map_err(|err| {
            error!("❌ Could not open order transaction: {err}");
            ServiceError::from(err)
        })?;

        match Self::reserve(uow.as_mut(), buyer_id, lines).await {
            Ok(placed) => {
                uow.commit().await.map_err(|err| {
                    error!("❌ Failed to commit order for user_id={buyer_id}: {err}");
                    ServiceError::from(err)
                })?;

                info!(
                    "✅ Order {} placed for user_id={} total={}",
                    placed.order.order_id, buyer_id, placed.order.total_price
                );
                Ok(OrderResponse::from(placed))
            }
            Err(err) => {
                if let Err(rollback_err) = uow.rollback().await {
                    warn!("⚠️ Rollback failed for user_id={buyer_id}: {rollback_err}");
                }

                match &err {
                    ServiceError::Internal(_) | ServiceError::Unavailable(_) => {
                        error!("❌ Order placement failed for user_id={buyer_id}: {err}")
                    }
                    _ => warn!("❌ Order rejected for user_id={buyer_id}: {err}"),
                }
                Err(err)
            }
        }
    }
}

fn check_lines(lines: &[OrderLine]) -> Result<(), ServiceError> {
    if lines.is_empty() {
        return Err(ServiceError::Validation(vec![
            "items: items must contain at least one item".into(),
        ]));
    }

    let errors: Vec<String> = lines
        .iter()
        .enumerate()
        .filter(|(_, line)| line.quantity < 1)
        .map(|(idx, _)| format!("items[{idx}].quantity: quantity must be a positive integer"))
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ServiceError::Validation(errors))
    }
}

/// Sums quantities per product. Repeated lines draw from the same stock.
fn aggregate_demand(lines: &[OrderLine]) -> BTreeMap<Uuid, i64> {
    let mut demand = BTreeMap::new();
    for line in lines {
        *demand.entry(line.product_id).or_insert(0) += i64::from(line.quantity);
    }
    demand
}

fn insufficient_stock(product: &ProductModel, available: i32, requested: i64) -> ServiceError {
    ServiceError::InsufficientStock {
        product_id: product.product_id,
        product_name: product.name.clone(),
        available,
        requested,
    }
}
