use crate::{
    domain::response::product::ProductSummaryResponse,
    model::{
        order::{Order as OrderModel, OrderWithItems},
        order_item::OrderItemWithProduct,
    },
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OrderResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub status: String,
    pub total_price: Decimal,
    #[serde(rename = "created_at")]
    pub created_at: String,
    pub items: Vec<OrderItemResponse>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OrderItemResponse {
    pub id: Uuid,
    pub product_id: Uuid,
    pub quantity: i32,
    pub price: Decimal,
    pub product: ProductSummaryResponse,
}

/// Listing view of an order; carries no line items.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OrderSummaryResponse {
    pub id: Uuid,
    pub status: String,
    pub total_price: Decimal,
    #[serde(rename = "created_at")]
    pub created_at: String,
}

// model to response
impl From<OrderItemWithProduct> for OrderItemResponse {
    fn from(value: OrderItemWithProduct) -> Self {
        OrderItemResponse {
            id: value.order_item_id,
            product_id: value.product_id,
            quantity: value.quantity,
            price: value.price,
            product: ProductSummaryResponse {
                id: value.product_id,
                name: value.product_name,
                description: value.product_description,
                category: value.product_category,
            },
        }
    }
}

impl From<OrderWithItems> for OrderResponse {
    fn from(value: OrderWithItems) -> Self {
        let OrderWithItems { order, items } = value;
        OrderResponse {
            id: order.order_id,
            user_id: order.user_id,
            status: order.status,
            total_price: order.total_price,
            created_at: order.created_at.to_string(),
            items: items.into_iter().map(OrderItemResponse::from).collect(),
        }
    }
}

impl From<OrderModel> for OrderSummaryResponse {
    fn from(value: OrderModel) -> Self {
        OrderSummaryResponse {
            id: value.order_id,
            status: value.status,
            total_price: value.total_price,
            created_at: value.created_at.to_string(),
        }
    }
}
