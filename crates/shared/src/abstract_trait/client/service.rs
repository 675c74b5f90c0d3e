use crate::{
    domain::{
        requests::{CreateClientRequest, UpdateClientRequest},
        responses::{ApiResponse, ClientResponse},
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynClientQueryService = Arc<dyn ClientQueryServiceTrait + Send + Sync>;
pub type DynClientCommandService = Arc<dyn ClientCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait ClientQueryServiceTrait {
    async fn find_all(&self) -> Result<ApiResponse<Vec<ClientResponse>>, ServiceError>;
    async fn find_by_id(&self, id: i64) -> Result<ApiResponse<ClientResponse>, ServiceError>;
}

#[async_trait]
pub trait ClientCommandServiceTrait {
    async fn create_client(
        &self,
        req: &CreateClientRequest,
    ) -> Result<ApiResponse<ClientResponse>, ServiceError>;
    async fn update_client(
        &self,
        req: &UpdateClientRequest,
    ) -> Result<ApiResponse<ClientResponse>, ServiceError>;
    async fn delete_client(&self, id: i64) -> Result<ApiResponse<()>, ServiceError>;
}
