use crate::{
    abstract_trait::{ClientQueryServiceTrait, DynClientQueryRepository},
    domain::responses::{ApiResponse, ClientResponse},
    errors::ServiceError,
    utils::{Method, Metrics, TracingContext},
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::error;

pub struct ClientQueryService {
    query: DynClientQueryRepository,
    metrics: Metrics,
}

impl ClientQueryService {
    pub async fn new(query: DynClientQueryRepository, registry: Arc<Mutex<Registry>>) -> Self {
        let metrics = Metrics::new();
        metrics.register(
            &mut *registry.lock().await,
            "client_query_service",
            "ClientQueryService",
        );

        Self { query, metrics }
    }
}

#[async_trait]
impl ClientQueryServiceTrait for ClientQueryService {
    async fn find_all(&self) -> Result<ApiResponse<Vec<ClientResponse>>, ServiceError> {
        let tracing_ctx = TracingContext::start("client", "FindAllClients");

        match self.query.find_all().await {
            Ok(clients) => {
                tracing_ctx.complete_success(&self.metrics, Method::Get, "Clients listed");
                Ok(ApiResponse::success(
                    "Clients retrieved successfully",
                    clients.into_iter().map(ClientResponse::from).collect(),
                ))
            }
            Err(e) => {
                error!("❌ Failed to list clients: {e}");
                tracing_ctx.complete_error(&self.metrics, Method::Get, &e.to_string());
                Err(ServiceError::Repo(e))
            }
        }
    }

    async fn find_by_id(&self, id: i64) -> Result<ApiResponse<ClientResponse>, ServiceError> {
        let tracing_ctx = TracingContext::start("client", "FindClientById");

        match self.query.find_by_id(id).await {
            Ok(Some(client)) => {
                tracing_ctx.complete_success(&self.metrics, Method::Get, "Client found");
                Ok(ApiResponse::success(
                    "Client retrieved successfully",
                    ClientResponse::from(client),
                ))
            }
            Ok(None) => {
                tracing_ctx.complete_error(&self.metrics, Method::Get, "Client not found");
                Err(ServiceError::NotFound(format!("Client {id} not found")))
            }
            Err(e) => {
                error!("❌ Failed to fetch client {id}: {e}");
                tracing_ctx.complete_error(&self.metrics, Method::Get, &e.to_string());
                Err(ServiceError::Repo(e))
            }
        }
    }
}
