mod common;

use chrono::NaiveDate;
use shared::{
    abstract_trait::SaleOutcome,
    config::ConnectionManager,
    domain::requests::{CreateSaleRequest, NewSale},
    errors::ServiceError,
    repository::SaleRepository,
};

fn new_sale(product_id: i64, client_id: i64, user_id: i64, quantity: i64) -> NewSale {
    NewSale {
        sale_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
        product_id,
        client_id,
        user_id,
        quantity,
        unit_price: 18.0,
        total: 18.0 * quantity as f64,
    }
}

#[tokio::test]
async fn selling_the_whole_stock_leaves_zero() {
    let pool = common::memory_pool().await;
    let (user_id, client_id, product_id) = common::seed(&pool, 5).await;
    let sales = SaleRepository::new(pool.clone());

    let outcome = sales
        .command
        .create_sale(&new_sale(product_id, client_id, user_id, 5))
        .await
        .unwrap();

    match outcome {
        SaleOutcome::Created(sale) => {
            assert_eq!(sale.quantity, 5);
            assert_eq!(sale.product_id, product_id);
            assert_eq!(sale.sale_date, NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
        }
        other => panic!("expected a created sale, got {other:?}"),
    }
    assert_eq!(common::stock_of(&pool, product_id).await, 0);
    assert_eq!(common::sale_count(&pool).await, 1);
}

#[tokio::test]
async fn overselling_is_rejected_without_side_effects() {
    let pool = common::memory_pool().await;
    let (user_id, client_id, product_id) = common::seed(&pool, 5).await;
    let sales = SaleRepository::new(pool.clone());

    let outcome = sales
        .command
        .create_sale(&new_sale(product_id, client_id, user_id, 6))
        .await
        .unwrap();

    assert!(matches!(
        outcome,
        SaleOutcome::InsufficientStock { available: 5 }
    ));
    assert_eq!(common::stock_of(&pool, product_id).await, 5);
    assert_eq!(common::sale_count(&pool).await, 0);
}

#[tokio::test]
async fn missing_product_is_not_found_rather_than_insufficient() {
    let pool = common::memory_pool().await;
    let (user_id, client_id, _) = common::seed(&pool, 5).await;
    let sales = SaleRepository::new(pool.clone());

    let outcome = sales
        .command
        .create_sale(&new_sale(999, client_id, user_id, 1))
        .await
        .unwrap();

    assert!(matches!(outcome, SaleOutcome::ProductNotFound));
    assert_eq!(common::sale_count(&pool).await, 0);
}

#[tokio::test]
async fn missing_client_rolls_back_the_decrement() {
    let pool = common::memory_pool().await;
    let (user_id, _, product_id) = common::seed(&pool, 5).await;
    let sales = SaleRepository::new(pool.clone());

    let outcome = sales
        .command
        .create_sale(&new_sale(product_id, 999, user_id, 2))
        .await
        .unwrap();

    assert!(matches!(outcome, SaleOutcome::ClientNotFound));
    assert_eq!(common::stock_of(&pool, product_id).await, 5);
    assert_eq!(common::sale_count(&pool).await, 0);
}

#[tokio::test]
async fn service_maps_outcomes_to_errors_and_defaults_the_seller() {
    let pool = common::memory_pool().await;
    let (user_id, client_id, product_id) = common::seed(&pool, 3).await;
    let services = common::services(pool.clone()).await;

    let request = CreateSaleRequest {
        sale_date: None,
        product_id,
        client_id,
        user_id: None,
        quantity: 2,
        unit_price: 18.0,
        total: 36.0,
    };

    let created = services
        .sale_service
        .command
        .create_sale(&request, user_id)
        .await
        .unwrap();
    assert_eq!(created.data.user_id, user_id);
    assert_eq!(
        created.data.sale_date,
        chrono::Utc::now().date_naive().to_string()
    );

    let err = services
        .sale_service
        .command
        .create_sale(&request, user_id)
        .await
        .unwrap_err();
    match err {
        ServiceError::InsufficientStock {
            product_id: pid,
            requested,
            available,
        } => {
            assert_eq!(pid, product_id);
            assert_eq!(requested, 2);
            assert_eq!(available, 1);
        }
        other => panic!("expected insufficient stock, got {other:?}"),
    }

    let missing = CreateSaleRequest {
        product_id: 4242,
        ..request
    };
    let err = services
        .sale_service
        .command
        .create_sale(&missing, user_id)
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(msg) if msg.contains("Product 4242")));
}

#[tokio::test]
async fn updating_or_deleting_a_sale_leaves_stock_alone() {
    let pool = common::memory_pool().await;
    let (user_id, client_id, product_id) = common::seed(&pool, 10).await;
    let services = common::services(pool.clone()).await;

    let created = services
        .sale_service
        .command
        .create_sale(
            &CreateSaleRequest {
                sale_date: None,
                product_id,
                client_id,
                user_id: Some(user_id),
                quantity: 4,
                unit_price: 18.0,
                total: 72.0,
            },
            user_id,
        )
        .await
        .unwrap();
    assert_eq!(common::stock_of(&pool, product_id).await, 6);

    services
        .sale_service
        .command
        .delete_sale(created.data.id)
        .await
        .unwrap();

    assert_eq!(common::stock_of(&pool, product_id).await, 6);
    assert!(matches!(
        services.sale_service.query.find_by_id(created.data.id).await,
        Err(ServiceError::NotFound(_))
    ));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_sales_never_oversell() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}", dir.path().join("inventory.db").display());
    let pool = ConnectionManager::new_pool(&url).await.unwrap();
    ConnectionManager::run_migrations(&pool).await.unwrap();

    let (user_id, client_id, product_id) = common::seed(&pool, 1).await;
    let sales = SaleRepository::new(pool.clone());

    let first = {
        let command = sales.command.clone();
        let sale = new_sale(product_id, client_id, user_id, 1);
        tokio::spawn(async move { command.create_sale(&sale).await })
    };
    let second = {
        let command = sales.command.clone();
        let sale = new_sale(product_id, client_id, user_id, 1);
        tokio::spawn(async move { command.create_sale(&sale).await })
    };

    let outcomes = [
        first.await.unwrap().unwrap(),
        second.await.unwrap().unwrap(),
    ];

    let created = outcomes
        .iter()
        .filter(|o| matches!(o, SaleOutcome::Created(_)))
        .count();
    let rejected = outcomes
        .iter()
        .filter(|o| matches!(o, SaleOutcome::InsufficientStock { available: 0 }))
        .count();

    assert_eq!(created, 1);
    assert_eq!(rejected, 1);
    assert_eq!(common::stock_of(&pool, product_id).await, 0);
    assert_eq!(common::sale_count(&pool).await, 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn many_concurrent_sales_add_up_to_the_stock() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}", dir.path().join("inventory.db").display());
    let pool = ConnectionManager::new_pool(&url).await.unwrap();
    ConnectionManager::run_migrations(&pool).await.unwrap();

    let (user_id, client_id, product_id) = common::seed(&pool, 5).await;
    let sales = SaleRepository::new(pool.clone());

    let handles: Vec<_> = (0..12)
        .map(|_| {
            let command = sales.command.clone();
            let sale = new_sale(product_id, client_id, user_id, 1);
            tokio::spawn(async move { command.create_sale(&sale).await })
        })
        .collect();

    let mut created = 0;
    for handle in handles {
        if let SaleOutcome::Created(_) = handle.await.unwrap().unwrap() {
            created += 1;
        }
    }

    assert_eq!(created, 5);
    assert_eq!(common::stock_of(&pool, product_id).await, 0);
    assert_eq!(common::sale_count(&pool).await, 5);
}
