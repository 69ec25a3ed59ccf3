use crate::{
    abstract_trait::{
        order::OrderPlacementServiceTrait,
        reservation::DynReservationEngine,
        store::{DynOrderStore, OrderStoreTrait},
    },
    domain::{
        requests::order::CreateOrderRequest,
        response::{
            api::ApiResponse,
            order::{OrderResponse, OrderSummaryResponse},
        },
    },
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use shared::{
    domain::AuthenticatedBuyer,
    errors::ServiceError,
    utils::{Method, Metrics, Status as StatusUtils},
};
use tokio::time::Instant;
use tracing::{error, info, warn};

#[derive(Clone)]
pub struct OrderPlacementService {
    engine: DynReservationEngine,
    store: DynOrderStore,
    metrics: Metrics,
}

pub struct OrderPlacementServiceDeps {
    pub engine: DynReservationEngine,
    pub store: DynOrderStore,
}

impl OrderPlacementService {
    pub fn new(deps: OrderPlacementServiceDeps, registry: &mut Registry) -> Self {
        let OrderPlacementServiceDeps { engine, store } = deps;

        let metrics = Metrics::new();
        metrics.register("order_placement_service", "OrderPlacementService", registry);

        Self {
            engine,
            store,
            metrics,
        }
    }

    fn authenticate(buyer: Option<&AuthenticatedBuyer>) -> Result<&AuthenticatedBuyer, ServiceError> {
        buyer.ok_or_else(|| {
            warn!("❌ Rejected order request without an authenticated buyer");
            ServiceError::Unauthorized("You are not logged in, please provide token".into())
        })
    }

    fn complete<T>(&self, method: Method, start: Instant, result: &Result<T, ServiceError>) {
        let status = match result {
            Ok(_) => StatusUtils::Success,
            Err(_) => StatusUtils::Error,
        };
        self.metrics
            .record(method, status, start.elapsed().as_secs_f64());
    }

    async fn place(
        &self,
        buyer: Option<&AuthenticatedBuyer>,
        req: &CreateOrderRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        let buyer = Self::authenticate(buyer)?;

        if !buyer.is_buyer() {
            warn!(
                "❌ user_id={} with role {:?} may not place orders",
                buyer.id, buyer.role
            );
            return Err(ServiceError::Forbidden("Users only".into()));
        }

        let lines = req.to_lines().inspect_err(|err| {
            warn!("❌ Invalid order request from user_id={}: {err}", buyer.id);
        })?;

        let order = self.engine.place_order(buyer.id, &lines).await?;

        Ok(ApiResponse::success("Order placed successfully", order))
    }

    async fn list(
        &self,
        buyer: Option<&AuthenticatedBuyer>,
    ) -> Result<ApiResponse<Vec<OrderSummaryResponse>>, ServiceError> {
        let buyer = Self::authenticate(buyer)?;

        let orders = self
            .store
            .find_orders_by_buyer(buyer.id)
            .await
            .map_err(|err| {
                error!("❌ Failed to list orders for user_id={}: {err}", buyer.id);
                ServiceError::from(err)
            })?;

        info!("✅ Retrieved {} orders for user_id={}", orders.len(), buyer.id);

        Ok(ApiResponse::success(
            "Orders retrieved",
            orders.into_iter().map(OrderSummaryResponse::from).collect(),
        ))
    }
}

#[async_trait]
impl OrderPlacementServiceTrait for OrderPlacementService {
    async fn create_order(
        &self,
        buyer: Option<&AuthenticatedBuyer>,
        req: &CreateOrderRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        let start = Instant::now();
        let result = self.place(buyer, req).await;
        self.complete(Method::Post, start, &result);
        result
    }

    async fn list_orders(
        &self,
        buyer: Option<&AuthenticatedBuyer>,
    ) -> Result<ApiResponse<Vec<OrderSummaryResponse>>, ServiceError> {
        let start = Instant::now();
        let result = self.list(buyer).await;
        self.complete(Method::Get, start, &result);
        result
    }
}
