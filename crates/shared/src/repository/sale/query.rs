use crate::{
    abstract_trait::SaleQueryRepositoryTrait, config::ConnectionPool, errors::RepositoryError,
    model::Sale as SaleModel,
};
use async_trait::async_trait;
use tracing::{error, info};

#[derive(Clone)]
pub struct SaleQueryRepository {
    db: ConnectionPool,
}

impl SaleQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SaleQueryRepositoryTrait for SaleQueryRepository {
    async fn find_all(&self) -> Result<Vec<SaleModel>, RepositoryError> {
        info!("🔍 Fetching all sales");

        let sales = sqlx::query_as::<_, SaleModel>(
            r#"
            SELECT id, sale_date, product_id, client_id, user_id, quantity, unit_price, total,
                   created_at
            FROM sales
            ORDER BY id
            "#,
        )
        .fetch_all(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch sales: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(sales)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<SaleModel>, RepositoryError> {
        info!("🆔 Fetching sale by ID: {id}");

        let sale = sqlx::query_as::<_, SaleModel>(
            r#"
            SELECT id, sale_date, product_id, client_id, user_id, quantity, unit_price, total,
                   created_at
            FROM sales
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch sale {id}: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(sale)
    }
}
