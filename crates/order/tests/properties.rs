mod common;

use common::{place, product, seeded_store};
use proptest::prelude::*;
use rust_decimal::Decimal;
use std::collections::HashMap;
use uuid::Uuid;

const CATALOGUE: usize = 3;

fn arb_order() -> impl Strategy<Value = Vec<(usize, i32)>> {
    prop::collection::vec((0..CATALOGUE, 1i32..6), 1..4)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn stock_never_goes_negative_and_totals_reconcile(
        stocks in prop::collection::vec(0i32..8, CATALOGUE),
        prices in prop::collection::vec(0i64..10_000, CATALOGUE),
        orders in prop::collection::vec(arb_order(), 1..12),
    ) {
        let rt = tokio::runtime::Runtime::new().unwrap();
        rt.block_on(async {
            let catalogue: Vec<_> = stocks
                .iter()
                .zip(&prices)
                .enumerate()
                .map(|(idx, (stock, cents))| {
                    product(&format!("item-{idx}"), Decimal::new(*cents, 2), *stock)
                })
                .collect();
            let store = seeded_store(&catalogue).await;

            let mut expected_stock: HashMap<Uuid, i64> = catalogue
                .iter()
                .map(|p| (p.product_id, i64::from(p.stock)))
                .collect();

            for lines in &orders {
                let lines: Vec<(Uuid, i32)> = lines
                    .iter()
                    .map(|(idx, qty)| (catalogue[*idx].product_id, *qty))
                    .collect();

                let mut demand: HashMap<Uuid, i64> = HashMap::new();
                for (id, qty) in &lines {
                    *demand.entry(*id).or_default() += i64::from(*qty);
                }
                let fits = demand.iter().all(|(id, qty)| expected_stock[id] >= *qty);

                match place(&store, Uuid::now_v7(), &lines).await {
                    Ok(order) => {
                        prop_assert!(fits);
                        for (id, qty) in &demand {
                            *expected_stock.get_mut(id).unwrap() -= qty;
                        }

                        let recomputed: Decimal = order
                            .items
                            .iter()
                            .map(|item| item.price * Decimal::from(item.quantity))
                            .sum();
                        prop_assert_eq!(order.total_price, recomputed);
                        prop_assert_eq!(order.items.len(), lines.len());
                    }
                    Err(err) => {
                        prop_assert!(!fits, "rejected an order that fits: {}", err);
                    }
                }

                for p in &catalogue {
                    let stock = store.product(p.product_id).await.unwrap().stock;
                    prop_assert!(stock >= 0);
                    prop_assert_eq!(i64::from(stock), expected_stock[&p.product_id]);
                }
            }

            let persisted = store.order_items().await;
            for order in store.orders().await {
                let total: Decimal = persisted
                    .iter()
                    .filter(|item| item.order_id == order.order_id)
                    .map(|item| item.price * Decimal::from(item.quantity))
                    .sum();
                prop_assert_eq!(order.total_price, total);
            }

            Ok::<(), TestCaseError>(())
        })?;
    }
}
