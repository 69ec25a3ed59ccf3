use crate::domain::{
    requests::order::CreateOrderRequest,
    response::{
        api::ApiResponse,
        order::{OrderResponse, OrderSummaryResponse},
    },
};
use async_trait::async_trait;
use shared::{domain::AuthenticatedBuyer, errors::ServiceError};
use std::sync::Arc;

pub type DynOrderPlacementService = Arc<dyn OrderPlacementServiceTrait + Send + Sync>;

#[async_trait]
pub trait OrderPlacementServiceTrait {
    async fn create_order(
        &self,
        buyer: Option<&AuthenticatedBuyer>,
        req: &CreateOrderRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError>;

    async fn list_orders(
        &self,
        buyer: Option<&AuthenticatedBuyer>,
    ) -> Result<ApiResponse<Vec<OrderSummaryResponse>>, ServiceError>;
}
