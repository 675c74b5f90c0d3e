use crate::{
    abstract_trait::{DynProductQueryRepository, ProductQueryServiceTrait},
    domain::responses::{ApiResponse, ProductResponse},
    errors::ServiceError,
    utils::{Method, Metrics, TracingContext},
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};

pub struct ProductQueryService {
    query: DynProductQueryRepository,
    metrics: Metrics,
}

impl ProductQueryService {
    pub async fn new(query: DynProductQueryRepository, registry: Arc<Mutex<Registry>>) -> Self {
        let metrics = Metrics::new();
        metrics.register(
            &mut *registry.lock().await,
            "product_query_service",
            "ProductQueryService",
        );

        Self { query, metrics }
    }
}

#[async_trait]
impl ProductQueryServiceTrait for ProductQueryService {
    async fn find_all(&self) -> Result<ApiResponse<Vec<ProductResponse>>, ServiceError> {
        let tracing_ctx = TracingContext::start("product", "FindAllProducts");

        let products = match self.query.find_all().await {
            Ok(products) => products,
            Err(e) => {
                error!("❌ Failed to list products: {e}");
                tracing_ctx.complete_error(&self.metrics, Method::Get, &e.to_string());
                return Err(ServiceError::Repo(e));
            }
        };

        let data: Vec<ProductResponse> = products.into_iter().map(ProductResponse::from).collect();
        tracing_ctx.complete_success(&self.metrics, Method::Get, "Products listed");

        Ok(ApiResponse::success("Products retrieved successfully", data))
    }

    async fn find_by_id(&self, id: i64) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        let tracing_ctx = TracingContext::start("product", "FindProductById");

        match self.query.find_by_id(id).await {
            Ok(Some(product)) => {
                tracing_ctx.complete_success(&self.metrics, Method::Get, "Product found");
                Ok(ApiResponse::success(
                    "Product retrieved successfully",
                    ProductResponse::from(product),
                ))
            }
            Ok(None) => {
                info!("🔎 Product {id} not found");
                tracing_ctx.complete_error(&self.metrics, Method::Get, "Product not found");
                Err(ServiceError::NotFound(format!("Product {id} not found")))
            }
            Err(e) => {
                error!("❌ Failed to fetch product {id}: {e}");
                tracing_ctx.complete_error(&self.metrics, Method::Get, &e.to_string());
                Err(ServiceError::Repo(e))
            }
        }
    }
}
