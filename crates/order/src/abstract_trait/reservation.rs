use crate::domain::{requests::order::OrderLine, response::order::OrderResponse};
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;
use uuid::Uuid;

pub type DynReservationEngine = Arc<dyn ReservationEngineTrait + Send + Sync>;

#[async_trait]
pub trait ReservationEngineTrait {
    async fn place_order(
        &self,
        buyer_id: Uuid,
        lines: &[OrderLine],
    ) -> Result<OrderResponse, ServiceError>;
}
