use crate::{
    abstract_trait::{DynHashing, DynJwtService},
    config::ConnectionPool,
    repository::{ClientRepository, ProductRepository, SaleRepository, UserRepository},
    service::{
        AuthService, AuthServiceDeps, ClientService, ProductService, SaleService, UserService,
    },
};
use prometheus_client::registry::Registry;
use std::{fmt, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct DependenciesInject {
    pub auth_service: AuthService,
    pub user_service: UserService,
    pub client_service: ClientService,
    pub product_service: ProductService,
    pub sale_service: SaleService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("auth_service", &"<AuthService>")
            .field("user_service", &"<UserService>")
            .field("client_service", &"<ClientService>")
            .field("product_service", &"<ProductService>")
            .field("sale_service", &"<SaleService>")
            .finish()
    }
}

#[derive(Clone)]
pub struct DependenciesInjectDeps {
    pub pool: ConnectionPool,
    pub hash: DynHashing,
    pub jwt_config: DynJwtService,
    pub registry: Arc<Mutex<Registry>>,
}

impl DependenciesInject {
    pub async fn new(deps: DependenciesInjectDeps) -> Self {
        let DependenciesInjectDeps {
            pool,
            hash,
            jwt_config,
            registry,
        } = deps;

        let user_repository = UserRepository::new(pool.clone());
        let client_repository = ClientRepository::new(pool.clone());
        let product_repository = ProductRepository::new(pool.clone());
        let sale_repository = SaleRepository::new(pool);

        let auth_service = AuthService::new(AuthServiceDeps {
            hash: hash.clone(),
            jwt: jwt_config,
            user_query: user_repository.query.clone(),
            user_command: user_repository.command.clone(),
            registry: registry.clone(),
        })
        .await;

        let user_service = UserService::new(
            user_repository.query,
            user_repository.command,
            hash,
            registry.clone(),
        )
        .await;

        let client_service = ClientService::new(
            client_repository.query,
            client_repository.command,
            registry.clone(),
        )
        .await;

        let product_service = ProductService::new(
            product_repository.query,
            product_repository.command,
            registry.clone(),
        )
        .await;

        let sale_service =
            SaleService::new(sale_repository.query, sale_repository.command, registry).await;

        Self {
            auth_service,
            user_service,
            client_service,
            product_service,
            sale_service,
        }
    }
}
