#![allow(dead_code)]

use chrono::{Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use order::{
    abstract_trait::{reservation::ReservationEngineTrait, store::DynOrderStore},
    domain::{requests::order::OrderLine, response::order::OrderResponse},
    model::product::Product,
    repository::memory::MemoryOrderStore,
    service::StockReservationEngine,
};
use rust_decimal::Decimal;
use shared::{config::Claims, domain::AuthenticatedBuyer, errors::ServiceError};
use std::sync::Arc;
use uuid::Uuid;

pub fn product(name: &str, price: Decimal, stock: i32) -> Product {
    let now = Utc::now().naive_utc();
    Product {
        product_id: Uuid::now_v7(),
        name: name.to_string(),
        description: format!("{name} description"),
        price,
        stock,
        category: Some("general".to_string()),
        user_id: Uuid::now_v7(),
        created_at: now,
        updated_at: now,
    }
}

pub fn buyer() -> AuthenticatedBuyer {
    AuthenticatedBuyer::new(Uuid::now_v7(), "User")
}

pub async fn seeded_store(products: &[Product]) -> MemoryOrderStore {
    let store = MemoryOrderStore::new();
    for product in products {
        store.insert_product(product.clone()).await;
    }
    store
}

pub fn engine(store: &MemoryOrderStore) -> StockReservationEngine {
    let store: DynOrderStore = Arc::new(store.clone());
    StockReservationEngine::new(store)
}

pub async fn place(
    store: &MemoryOrderStore,
    buyer_id: Uuid,
    lines: &[(Uuid, i32)],
) -> Result<OrderResponse, ServiceError> {
    let lines: Vec<OrderLine> = lines
        .iter()
        .map(|(product_id, quantity)| OrderLine::new(*product_id, *quantity))
        .collect();
    engine(store).place_order(buyer_id, &lines).await
}

pub async fn stock_of(store: &MemoryOrderStore, product_id: Uuid) -> i32 {
    store
        .product(product_id)
        .await
        .map(|product| product.stock)
        .expect("product is seeded")
}

/// Signs an access token the way the auth service issues them.
pub fn access_token(secret: &str, user_id: Uuid, role: &str) -> String {
    let now = Utc::now();
    let claims = Claims::new(
        user_id,
        role.to_string(),
        (now + Duration::minutes(60)).timestamp() as usize,
        now.timestamp() as usize,
        "access".to_string(),
    );
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )
    .unwrap()
}
