use crate::{
    abstract_trait::{ClientCommandServiceTrait, DynClientCommandRepository},
    domain::{
        requests::{CreateClientRequest, UpdateClientRequest},
        responses::{ApiResponse, ClientResponse},
    },
    errors::{RepositoryError, ServiceError},
    utils::{Method, Metrics, TracingContext},
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};

pub struct ClientCommandService {
    command: DynClientCommandRepository,
    metrics: Metrics,
}

impl ClientCommandService {
    pub async fn new(command: DynClientCommandRepository, registry: Arc<Mutex<Registry>>) -> Self {
        let metrics = Metrics::new();
        metrics.register(
            &mut *registry.lock().await,
            "client_command_service",
            "ClientCommandService",
        );

        Self { command, metrics }
    }
}

#[async_trait]
impl ClientCommandServiceTrait for ClientCommandService {
    async fn create_client(
        &self,
        req: &CreateClientRequest,
    ) -> Result<ApiResponse<ClientResponse>, ServiceError> {
        info!("🏗️ Creating client: {}", req.name);

        let method = Method::Post;
        let tracing_ctx = TracingContext::start("client", "CreateClient");

        let client = match self.command.create_client(req).await {
            Ok(client) => client,
            Err(RepositoryError::AlreadyExists(_)) => {
                tracing_ctx.complete_error(&self.metrics, method, "Duplicate NIT");
                return Err(ServiceError::Conflict(format!(
                    "A client with NIT {} already exists",
                    req.tax_id
                )));
            }
            Err(e) => {
                error!("❌ Failed to create client '{}': {e}", req.name);
                tracing_ctx.complete_error(&self.metrics, method, &e.to_string());
                return Err(ServiceError::Repo(e));
            }
        };

        info!("✅ Client created: {} (ID: {})", client.name, client.id);
        tracing_ctx.complete_success(&self.metrics, method, "Client created successfully");

        Ok(ApiResponse::success(
            "Client created successfully",
            ClientResponse::from(client),
        ))
    }

    async fn update_client(
        &self,
        req: &UpdateClientRequest,
    ) -> Result<ApiResponse<ClientResponse>, ServiceError> {
        let id = req
            .id
            .ok_or_else(|| ServiceError::Internal("Client id missing from update".into()))?;

        info!("✏️ Updating client ID: {id}");

        let method = Method::Put;
        let tracing_ctx = TracingContext::start("client", "UpdateClient");

        match self.command.update_client(id, req).await {
            Ok(client) => {
                tracing_ctx.complete_success(&self.metrics, method, "Client updated");
                Ok(ApiResponse::success(
                    "Client updated successfully",
                    ClientResponse::from(client),
                ))
            }
            Err(RepositoryError::NotFound) => {
                tracing_ctx.complete_error(&self.metrics, method, "Client not found");
                Err(ServiceError::NotFound(format!("Client {id} not found")))
            }
            Err(RepositoryError::AlreadyExists(_)) => {
                tracing_ctx.complete_error(&self.metrics, method, "Duplicate NIT");
                Err(ServiceError::Conflict(format!(
                    "A client with NIT {} already exists",
                    req.tax_id
                )))
            }
            Err(e) => {
                error!("❌ Failed to update client {id}: {e}");
                tracing_ctx.complete_error(&self.metrics, method, &e.to_string());
                Err(ServiceError::Repo(e))
            }
        }
    }

    async fn delete_client(&self, id: i64) -> Result<ApiResponse<()>, ServiceError> {
        info!("🗑️ Deleting client ID: {id}");

        let method = Method::Delete;
        let tracing_ctx = TracingContext::start("client", "DeleteClient");

        match self.command.delete_client(id).await {
            Ok(()) => {
                tracing_ctx.complete_success(&self.metrics, method, "Client deleted");
                Ok(ApiResponse::success("Client deleted successfully", ()))
            }
            Err(RepositoryError::NotFound) => {
                tracing_ctx.complete_error(&self.metrics, method, "Client not found");
                Err(ServiceError::NotFound(format!("Client {id} not found")))
            }
            Err(RepositoryError::ForeignKey(_)) => {
                tracing_ctx.complete_error(&self.metrics, method, "Client referenced by sales");
                Err(ServiceError::Conflict(format!(
                    "Client {id} is referenced by existing sales"
                )))
            }
            Err(e) => {
                error!("❌ Failed to delete client {id}: {e}");
                tracing_ctx.complete_error(&self.metrics, method, &e.to_string());
                Err(ServiceError::Repo(e))
            }
        }
    }
}
