//! Runs against a real database: `TEST_DATABASE_URL=postgres://... cargo test -- --ignored`

mod common;

use common::product;
use order::{
    abstract_trait::{
        reservation::ReservationEngineTrait,
        store::{DynOrderStore, OrderStoreTrait},
    },
    domain::requests::order::OrderLine,
    model::product::Product,
    repository::postgres::PgOrderStore,
    service::StockReservationEngine,
};
use rust_decimal_macros::dec;
use shared::{config::ConnectionManager, errors::ServiceError};
use sqlx::{Pool, Postgres};
use std::{sync::Arc, time::Duration};
use uuid::Uuid;

async fn pool() -> Pool<Postgres> {
    let url = std::env::var("TEST_DATABASE_URL").expect("TEST_DATABASE_URL must be set");
    let pool = ConnectionManager::new_pool(&url, 1, 8, Duration::from_secs(5))
        .await
        .unwrap();
    sqlx::migrate!("./migrations").run(&pool).await.unwrap();
    pool
}

async fn insert(pool: &Pool<Postgres>, product: &Product) {
    sqlx::query(
        r#"
        INSERT INTO products (product_id, name, description, price, stock, category, user_id)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        "#,
    )
    .bind(product.product_id)
    .bind(&product.name)
    .bind(&product.description)
    .bind(product.price)
    .bind(product.stock)
    .bind(&product.category)
    .bind(product.user_id)
    .execute(pool)
    .await
    .unwrap();
}

async fn stock(pool: &Pool<Postgres>, product_id: Uuid) -> i32 {
    sqlx::query_scalar("SELECT stock FROM products WHERE product_id = $1")
        .bind(product_id)
        .fetch_one(pool)
        .await
        .unwrap()
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
#[ignore = "requires TEST_DATABASE_URL"]
async fn concurrent_buyers_share_the_last_unit() {
    let pool = pool().await;
    let last = product("Limited Print", dec!(75.00), 1);
    insert(&pool, &last).await;

    let store: DynOrderStore = Arc::new(PgOrderStore::new(pool.clone(), 5000));
    let engine = Arc::new(StockReservationEngine::new(store));
    let product_id = last.product_id;

    let handles: Vec<_> = (0..2)
        .map(|_| {
            let engine = engine.clone();
            tokio::spawn(async move {
                engine
                    .place_order(Uuid::now_v7(), &[OrderLine::new(product_id, 1)])
                    .await
            })
        })
        .collect();

    let mut results = Vec::new();
    for handle in handles {
        results.push(handle.await.unwrap());
    }

    assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
    assert_eq!(
        results
            .iter()
            .filter(|r| matches!(r, Err(ServiceError::InsufficientStock { .. })))
            .count(),
        1
    );
    assert_eq!(stock(&pool, product_id).await, 0);
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn placed_order_is_listed_with_captured_total() {
    let pool = pool().await;
    let a = product("Lamp", dec!(100.00), 5);
    let b = product("Shade", dec!(50.00), 10);
    insert(&pool, &a).await;
    insert(&pool, &b).await;

    let store: DynOrderStore = Arc::new(PgOrderStore::new(pool.clone(), 5000));
    let engine = StockReservationEngine::new(store.clone());
    let buyer = Uuid::now_v7();

    let order = engine
        .place_order(
            buyer,
            &[OrderLine::new(a.product_id, 2), OrderLine::new(b.product_id, 3)],
        )
        .await
        .unwrap();

    assert_eq!(order.total_price, dec!(350));
    assert_eq!(order.items.len(), 2);
    assert_eq!(stock(&pool, a.product_id).await, 3);
    assert_eq!(stock(&pool, b.product_id).await, 7);

    let listed = store.find_orders_by_buyer(buyer).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].order_id, order.id);
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn total_above_a_single_price_range_is_stored() {
    let pool = pool().await;
    let top = product("Yacht", dec!(9999999999.99), 200);
    insert(&pool, &top).await;

    let store: DynOrderStore = Arc::new(PgOrderStore::new(pool.clone(), 5000));
    let engine = StockReservationEngine::new(store);

    let order = engine
        .place_order(Uuid::now_v7(), &[OrderLine::new(top.product_id, 101)])
        .await
        .unwrap();

    assert_eq!(order.total_price, dec!(1009999999998.99));
    assert_eq!(stock(&pool, top.product_id).await, 99);

    let stored: rust_decimal::Decimal =
        sqlx::query_scalar("SELECT total_price FROM orders WHERE order_id = $1")
            .bind(order.id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(stored, dec!(1009999999998.99));
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn missing_product_rolls_back_decrements() {
    let pool = pool().await;
    let a = product("Rug", dec!(80.00), 3);
    insert(&pool, &a).await;

    let store: DynOrderStore = Arc::new(PgOrderStore::new(pool.clone(), 5000));
    let engine = StockReservationEngine::new(store);

    let err = engine
        .place_order(
            Uuid::now_v7(),
            &[OrderLine::new(a.product_id, 1), OrderLine::new(Uuid::now_v7(), 1)],
        )
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::ProductNotFound(_)));
    assert_eq!(stock(&pool, a.product_id).await, 3);
}
