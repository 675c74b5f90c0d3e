use crate::{
    abstract_trait::{SaleCommandRepositoryTrait, SaleOutcome},
    config::ConnectionPool,
    domain::requests::{NewSale, UpdateSaleRequest},
    errors::RepositoryError,
    model::Sale as SaleModel,
};
use async_trait::async_trait;
use tracing::{error, info, warn};

pub struct SaleCommandRepository {
    db: ConnectionPool,
}

impl SaleCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SaleCommandRepositoryTrait for SaleCommandRepository {
    async fn create_sale(&self, sale: &NewSale) -> Result<SaleOutcome, RepositoryError> {
        info!(
            "🧾 Registering sale: product {} x{} for client {}",
            sale.product_id, sale.quantity, sale.client_id
        );

        let mut tx = self.db.begin().await.map_err(|e| {
            error!("❌ Failed to open sale transaction: {e:?}");
            RepositoryError::from(e)
        })?;

        // The decrement goes first so the write lock is taken before anything is read.
        let decremented = sqlx::query(
            r#"
            UPDATE products
            SET stock = stock - ?, updated_at = CURRENT_TIMESTAMP
            WHERE id = ? AND stock >= ?
            "#,
        )
        .bind(sale.quantity)
        .bind(sale.product_id)
        .bind(sale.quantity)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            error!("❌ Failed to decrement stock for product {}: {e:?}", sale.product_id);
            RepositoryError::from(e)
        })?;

        if decremented.rows_affected() == 0 {
            let available: Option<i64> =
                sqlx::query_scalar("SELECT stock FROM products WHERE id = ?")
                    .bind(sale.product_id)
                    .fetch_optional(&mut *tx)
                    .await
                    .map_err(RepositoryError::from)?;

            return Ok(match available {
                None => {
                    warn!("⚠️ Product {} not found", sale.product_id);
                    SaleOutcome::ProductNotFound
                }
                Some(available) => {
                    warn!(
                        "⚠️ Insufficient stock for product {}: requested {}, available {available}",
                        sale.product_id, sale.quantity
                    );
                    SaleOutcome::InsufficientStock { available }
                }
            });
        }

        let client: Option<i64> = sqlx::query_scalar("SELECT id FROM clients WHERE id = ?")
            .bind(sale.client_id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(RepositoryError::from)?;
        if client.is_none() {
            warn!("⚠️ Client {} not found, rolling back", sale.client_id);
            return Ok(SaleOutcome::ClientNotFound);
        }

        let user: Option<i64> = sqlx::query_scalar("SELECT id FROM users WHERE id = ?")
            .bind(sale.user_id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(RepositoryError::from)?;
        if user.is_none() {
            warn!("⚠️ User {} not found, rolling back", sale.user_id);
            return Ok(SaleOutcome::UserNotFound);
        }

        let created = sqlx::query_as::<_, SaleModel>(
            r#"
            INSERT INTO sales (sale_date, product_id, client_id, user_id, quantity, unit_price, total)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            RETURNING id, sale_date, product_id, client_id, user_id, quantity, unit_price, total,
                      created_at
            "#,
        )
        .bind(sale.sale_date)
        .bind(sale.product_id)
        .bind(sale.client_id)
        .bind(sale.user_id)
        .bind(sale.quantity)
        .bind(sale.unit_price)
        .bind(sale.total)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            error!("❌ Failed to insert sale: {e:?}");
            RepositoryError::from(e)
        })?;

        tx.commit().await.map_err(|e| {
            error!("❌ Failed to commit sale transaction: {e:?}");
            RepositoryError::from(e)
        })?;

        info!("✅ Sale {} committed", created.id);
        Ok(SaleOutcome::Created(created))
    }

    async fn update_sale(
        &self,
        id: i64,
        req: &UpdateSaleRequest,
    ) -> Result<SaleModel, RepositoryError> {
        info!("✏️ Updating sale ID: {id}");

        let sale = sqlx::query_as::<_, SaleModel>(
            r#"
            UPDATE sales
            SET sale_date = ?,
                product_id = ?,
                client_id = ?,
                user_id = ?,
                quantity = ?,
                unit_price = ?,
                total = ?
            WHERE id = ?
            RETURNING id, sale_date, product_id, client_id, user_id, quantity, unit_price, total,
                      created_at
            "#,
        )
        .bind(req.sale_date)
        .bind(req.product_id)
        .bind(req.client_id)
        .bind(req.user_id)
        .bind(req.quantity)
        .bind(req.unit_price)
        .bind(req.total)
        .bind(id)
        .fetch_one(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to update sale {id}: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(sale)
    }

    async fn delete_sale(&self, id: i64) -> Result<(), RepositoryError> {
        info!("🗑️ Deleting sale ID: {id}");

        let result = sqlx::query("DELETE FROM sales WHERE id = ?")
            .bind(id)
            .execute(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to delete sale {id}: {e:?}");
                RepositoryError::from(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
