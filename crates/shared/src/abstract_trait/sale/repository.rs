use crate::{
    domain::requests::{NewSale, UpdateSaleRequest},
    errors::RepositoryError,
    model::Sale as SaleModel,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynSaleQueryRepository = Arc<dyn SaleQueryRepositoryTrait + Send + Sync>;
pub type DynSaleCommandRepository = Arc<dyn SaleCommandRepositoryTrait + Send + Sync>;

/// Result of the stock transaction. Every variant except `Created` was rolled back.
#[derive(Debug)]
pub enum SaleOutcome {
    Created(SaleModel),
    ProductNotFound,
    ClientNotFound,
    UserNotFound,
    InsufficientStock { available: i64 },
}

#[async_trait]
pub trait SaleQueryRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<SaleModel>, RepositoryError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<SaleModel>, RepositoryError>;
}

#[async_trait]
pub trait SaleCommandRepositoryTrait {
    /// Inserts the sale and decrements product stock in one transaction.
    async fn create_sale(&self, sale: &NewSale) -> Result<SaleOutcome, RepositoryError>;
    async fn update_sale(
        &self,
        id: i64,
        req: &UpdateSaleRequest,
    ) -> Result<SaleModel, RepositoryError>;
    async fn delete_sale(&self, id: i64) -> Result<(), RepositoryError>;
}
