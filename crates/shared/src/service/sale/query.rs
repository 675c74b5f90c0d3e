use crate::{
    abstract_trait::{DynSaleQueryRepository, SaleQueryServiceTrait},
    domain::responses::{ApiResponse, SaleResponse},
    errors::ServiceError,
    utils::{Method, Metrics, TracingContext},
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::error;

pub struct SaleQueryService {
    query: DynSaleQueryRepository,
    metrics: Metrics,
}

impl SaleQueryService {
    pub async fn new(query: DynSaleQueryRepository, registry: Arc<Mutex<Registry>>) -> Self {
        let metrics = Metrics::new();
        metrics.register(
            &mut *registry.lock().await,
            "sale_query_service",
            "SaleQueryService",
        );

        Self { query, metrics }
    }
}

#[async_trait]
impl SaleQueryServiceTrait for SaleQueryService {
    async fn find_all(&self) -> Result<ApiResponse<Vec<SaleResponse>>, ServiceError> {
        let tracing_ctx = TracingContext::start("sale", "FindAllSales");

        match self.query.find_all().await {
            Ok(sales) => {
                tracing_ctx.complete_success(&self.metrics, Method::Get, "Sales listed");
                Ok(ApiResponse::success(
                    "Sales retrieved successfully",
                    sales.into_iter().map(SaleResponse::from).collect(),
                ))
            }
            Err(e) => {
                error!("❌ Failed to list sales: {e}");
                tracing_ctx.complete_error(&self.metrics, Method::Get, &e.to_string());
                Err(ServiceError::Repo(e))
            }
        }
    }

    async fn find_by_id(&self, id: i64) -> Result<ApiResponse<SaleResponse>, ServiceError> {
        let tracing_ctx = TracingContext::start("sale", "FindSaleById");

        match self.query.find_by_id(id).await {
            Ok(Some(sale)) => {
                tracing_ctx.complete_success(&self.metrics, Method::Get, "Sale found");
                Ok(ApiResponse::success(
                    "Sale retrieved successfully",
                    SaleResponse::from(sale),
                ))
            }
            Ok(None) => {
                tracing_ctx.complete_error(&self.metrics, Method::Get, "Sale not found");
                Err(ServiceError::NotFound(format!("Sale {id} not found")))
            }
            Err(e) => {
                error!("❌ Failed to fetch sale {id}: {e}");
                tracing_ctx.complete_error(&self.metrics, Method::Get, &e.to_string());
                Err(ServiceError::Repo(e))
            }
        }
    }
}
