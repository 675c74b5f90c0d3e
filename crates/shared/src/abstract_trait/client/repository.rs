use crate::{
    domain::requests::{CreateClientRequest, UpdateClientRequest},
    errors::RepositoryError,
    model::Client as ClientModel,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynClientQueryRepository = Arc<dyn ClientQueryRepositoryTrait + Send + Sync>;
pub type DynClientCommandRepository = Arc<dyn ClientCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ClientQueryRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<ClientModel>, RepositoryError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<ClientModel>, RepositoryError>;
}

#[async_trait]
pub trait ClientCommandRepositoryTrait {
    async fn create_client(&self, req: &CreateClientRequest)
    -> Result<ClientModel, RepositoryError>;
    async fn update_client(
        &self,
        id: i64,
        req: &UpdateClientRequest,
    ) -> Result<ClientModel, RepositoryError>;
    async fn delete_client(&self, id: i64) -> Result<(), RepositoryError>;
}
