#![allow(dead_code)]

use chrono::Duration;
use prometheus_client::registry::Registry;
use shared::{
    abstract_trait::{DynHashing, DynJwtService},
    config::{ConnectionManager, ConnectionPool, Hashing, JwtConfig},
    di::{DependenciesInject, DependenciesInjectDeps},
    domain::requests::{CreateClientRequest, CreateProductRequest, CreateUserRecord},
    repository::{ClientRepository, ProductRepository, UserRepository},
};
use std::sync::Arc;
use tokio::sync::Mutex;

pub const JWT_SECRET: &str = "integration-test-secret";

pub async fn memory_pool() -> ConnectionPool {
    let pool = ConnectionManager::in_memory().await.unwrap();
    ConnectionManager::run_migrations(&pool).await.unwrap();
    pool
}

pub fn jwt() -> DynJwtService {
    Arc::new(JwtConfig::new(JWT_SECRET, Duration::minutes(60))) as DynJwtService
}

pub async fn services(pool: ConnectionPool) -> DependenciesInject {
    DependenciesInject::new(DependenciesInjectDeps {
        pool,
        hash: Arc::new(Hashing::new(4)) as DynHashing,
        jwt_config: jwt(),
        registry: Arc::new(Mutex::new(Registry::default())),
    })
    .await
}

/// Inserts one user, one client and one product with `stock` units.
/// Returns `(user_id, client_id, product_id)`.
pub async fn seed(pool: &ConnectionPool, stock: i64) -> (i64, i64, i64) {
    let user = UserRepository::new(pool.clone())
        .command
        .create_user(&CreateUserRecord {
            name: "cashier".into(),
            email: "cashier@example.com".into(),
            password_hash: "not-a-real-hash".into(),
            position: Some("cajero".into()),
        })
        .await
        .unwrap();

    let client = ClientRepository::new(pool.clone())
        .command
        .create_client(&CreateClientRequest {
            name: "Ferreteria Central".into(),
            tax_id: "900123456".into(),
        })
        .await
        .unwrap();

    let product = ProductRepository::new(pool.clone())
        .command
        .create_product(&CreateProductRequest {
            name: "Martillo".into(),
            purchase_price: 12.5,
            sale_price: 18.0,
            stock,
        })
        .await
        .unwrap();

    (user.id, client.id, product.id)
}

pub async fn stock_of(pool: &ConnectionPool, product_id: i64) -> i64 {
    sqlx::query_scalar("SELECT stock FROM products WHERE id = ?")
        .bind(product_id)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn sale_count(pool: &ConnectionPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM sales")
        .fetch_one(pool)
        .await
        .unwrap()
}
