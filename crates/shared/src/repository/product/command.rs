use crate::{
    abstract_trait::ProductCommandRepositoryTrait,
    config::ConnectionPool,
    domain::requests::{CreateProductRequest, UpdateProductRequest},
    errors::RepositoryError,
    model::Product as ProductModel,
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct ProductCommandRepository {
    db: ConnectionPool,
}

impl ProductCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for ProductCommandRepository {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ProductModel, RepositoryError> {
        info!("🆕 Inserting product: {}", req.name);

        let product = sqlx::query_as::<_, ProductModel>(
            r#"
            INSERT INTO products (name, purchase_price, sale_price, stock)
            VALUES (?, ?, ?, ?)
            RETURNING id, name, purchase_price, sale_price, stock, created_at, updated_at
            "#,
        )
        .bind(&req.name)
        .bind(req.purchase_price)
        .bind(req.sale_price)
        .bind(req.stock)
        .fetch_one(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to insert product {}: {e:?}", req.name);
            RepositoryError::from(e)
        })?;

        Ok(product)
    }

    async fn update_product(
        &self,
        id: i64,
        req: &UpdateProductRequest,
    ) -> Result<ProductModel, RepositoryError> {
        info!("✏️ Updating product ID: {id}");

        let product = sqlx::query_as::<_, ProductModel>(
            r#"
            UPDATE products
            SET name = ?,
                purchase_price = ?,
                sale_price = ?,
                stock = ?,
                updated_at = CURRENT_TIMESTAMP
            WHERE id = ?
            RETURNING id, name, purchase_price, sale_price, stock, created_at, updated_at
            "#,
        )
        .bind(&req.name)
        .bind(req.purchase_price)
        .bind(req.sale_price)
        .bind(req.stock)
        .bind(id)
        .fetch_one(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to update product {id}: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(product)
    }

    async fn delete_product(&self, id: i64) -> Result<(), RepositoryError> {
        info!("🗑️ Deleting product ID: {id}");

        let result = sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id)
            .execute(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to delete product {id}: {e:?}");
                RepositoryError::from(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
