use crate::{
    domain::{
        requests::{CreateSaleRequest, UpdateSaleRequest},
        responses::{ApiResponse, SaleResponse},
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynSaleQueryService = Arc<dyn SaleQueryServiceTrait + Send + Sync>;
pub type DynSaleCommandService = Arc<dyn SaleCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait SaleQueryServiceTrait {
    async fn find_all(&self) -> Result<ApiResponse<Vec<SaleResponse>>, ServiceError>;
    async fn find_by_id(&self, id: i64) -> Result<ApiResponse<SaleResponse>, ServiceError>;
}

#[async_trait]
pub trait SaleCommandServiceTrait {
    /// `acting_user_id` fills in `usuario_id` when the request leaves it out.
    async fn create_sale(
        &self,
        req: &CreateSaleRequest,
        acting_user_id: i64,
    ) -> Result<ApiResponse<SaleResponse>, ServiceError>;
    async fn update_sale(
        &self,
        req: &UpdateSaleRequest,
    ) -> Result<ApiResponse<SaleResponse>, ServiceError>;
    async fn delete_sale(&self, id: i64) -> Result<ApiResponse<()>, ServiceError>;
}
