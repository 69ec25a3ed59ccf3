use crate::{
    abstract_trait::{
        order::DynOrderPlacementService, reservation::DynReservationEngine, store::DynOrderStore,
    },
    service::{OrderPlacementService, OrderPlacementServiceDeps, StockReservationEngine},
};
use prometheus_client::registry::Registry;
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub order_placement: DynOrderPlacementService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("order_placement", &"OrderPlacementService")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(store: DynOrderStore, registry: &mut Registry) -> Self {
        let reservation_engine: DynReservationEngine =
            Arc::new(StockReservationEngine::new(store.clone()));

        let order_placement_deps = OrderPlacementServiceDeps {
            engine: reservation_engine,
            store,
        };

        let order_placement: DynOrderPlacementService =
            Arc::new(OrderPlacementService::new(order_placement_deps, registry));

        Self { order_placement }
    }
}
