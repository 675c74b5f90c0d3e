use anyhow::Result;
use chrono::Duration;
use prometheus_client::registry::Registry;
use shared::{
    abstract_trait::{DynHashing, DynJwtService},
    config::{Config, ConnectionPool, Hashing, JwtConfig},
    di::{DependenciesInject, DependenciesInjectDeps},
};
use std::{fmt, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub jwt_config: DynJwtService,
    pub registry: Arc<Mutex<Registry>>,
    pub pool: ConnectionPool,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("di_container", &self.di_container)
            .field("jwt_config", &self.jwt_config)
            .finish()
    }
}

impl AppState {
    pub async fn new(pool: ConnectionPool, config: &Config) -> Result<Self> {
        let jwt_config = Arc::new(JwtConfig::new(
            &config.jwt_secret,
            Duration::minutes(config.access_token_ttl_minutes),
        )) as DynJwtService;
        let hashing = Arc::new(Hashing::new(config.bcrypt_cost)) as DynHashing;
        let registry = Arc::new(Mutex::new(Registry::default()));

        let deps = DependenciesInjectDeps {
            pool: pool.clone(),
            hash: hashing,
            jwt_config: jwt_config.clone(),
            registry: registry.clone(),
        };

        let di_container = DependenciesInject::new(deps).await;

        Ok(Self {
            di_container,
            jwt_config,
            registry,
            pool,
        })
    }
}
