use crate::{
    abstract_trait::store::DynOrderStore, config::myconfig::Config, di::DependenciesInject,
    repository::postgres::PgOrderStore,
};
use prometheus_client::registry::Registry;
use shared::{
    abstract_trait::DynJwtService,
    config::{ConnectionPool, JwtConfig},
};
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub jwt_config: DynJwtService,
    pub registry: Arc<Registry>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("deps", &self.di_container)
            .field("jwt_config", &self.jwt_config)
            .field("registry", &self.registry)
            .finish()
    }
}

impl AppState {
    pub fn new(pool: ConnectionPool, config: &Config) -> Self {
        let store: DynOrderStore = Arc::new(PgOrderStore::new(pool, config.order_tx_timeout_ms));
        Self::with_store(store, &config.jwt_secret)
    }

    pub fn with_store(store: DynOrderStore, jwt_secret: &str) -> Self {
        let jwt_config = Arc::new(JwtConfig::new(jwt_secret)) as DynJwtService;
        let mut registry = Registry::default();

        let di_container = DependenciesInject::new(store, &mut registry);

        Self {
            di_container,
            jwt_config,
            registry: Arc::new(registry),
        }
    }
}
