use crate::{
    abstract_trait::{DynProductCommandRepository, ProductCommandServiceTrait},
    domain::{
        requests::{CreateProductRequest, UpdateProductRequest},
        responses::{ApiResponse, ProductResponse},
    },
    errors::{RepositoryError, ServiceError},
    utils::{Method, Metrics, TracingContext},
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};

pub struct ProductCommandService {
    command: DynProductCommandRepository,
    metrics: Metrics,
}

impl ProductCommandService {
    pub async fn new(command: DynProductCommandRepository, registry: Arc<Mutex<Registry>>) -> Self {
        let metrics = Metrics::new();
        metrics.register(
            &mut *registry.lock().await,
            "product_command_service",
            "ProductCommandService",
        );

        Self { command, metrics }
    }
}

#[async_trait]
impl ProductCommandServiceTrait for ProductCommandService {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        info!("🏗️ Creating product: {}", req.name);

        let method = Method::Post;
        let tracing_ctx = TracingContext::start("product", "CreateProduct");

        let product = match self.command.create_product(req).await {
            Ok(product) => product,
            Err(e) => {
                error!("❌ Failed to create product '{}': {e}", req.name);
                tracing_ctx.complete_error(&self.metrics, method, &e.to_string());
                return Err(ServiceError::Repo(e));
            }
        };

        info!("✅ Product created: {} (ID: {})", product.name, product.id);
        tracing_ctx.complete_success(&self.metrics, method, "Product created successfully");

        Ok(ApiResponse::success(
            "Product created successfully",
            ProductResponse::from(product),
        ))
    }

    async fn update_product(
        &self,
        req: &UpdateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        let id = req
            .id
            .ok_or_else(|| ServiceError::Internal("Product id missing from update".into()))?;

        info!("✏️ Updating product ID: {id}");

        let method = Method::Put;
        let tracing_ctx = TracingContext::start("product", "UpdateProduct");

        let product = match self.command.update_product(id, req).await {
            Ok(product) => product,
            Err(RepositoryError::NotFound) => {
                tracing_ctx.complete_error(&self.metrics, method, "Product not found");
                return Err(ServiceError::NotFound(format!("Product {id} not found")));
            }
            Err(e) => {
                error!("❌ Failed to update product {id}: {e}");
                tracing_ctx.complete_error(&self.metrics, method, &e.to_string());
                return Err(ServiceError::Repo(e));
            }
        };

        tracing_ctx.complete_success(&self.metrics, method, "Product updated successfully");

        Ok(ApiResponse::success(
            "Product updated successfully",
            ProductResponse::from(product),
        ))
    }

    async fn delete_product(&self, id: i64) -> Result<ApiResponse<()>, ServiceError> {
        info!("🗑️ Deleting product ID: {id}");

        let method = Method::Delete;
        let tracing_ctx = TracingContext::start("product", "DeleteProduct");

        match self.command.delete_product(id).await {
            Ok(()) => {
                tracing_ctx.complete_success(&self.metrics, method, "Product deleted");
                Ok(ApiResponse::success("Product deleted successfully", ()))
            }
            Err(RepositoryError::NotFound) => {
                tracing_ctx.complete_error(&self.metrics, method, "Product not found");
                Err(ServiceError::NotFound(format!("Product {id} not found")))
            }
            Err(RepositoryError::ForeignKey(_)) => {
                tracing_ctx.complete_error(&self.metrics, method, "Product referenced by sales");
                Err(ServiceError::Conflict(format!(
                    "Product {id} is referenced by existing sales"
                )))
            }
            Err(e) => {
                error!("❌ Failed to delete product {id}: {e}");
                tracing_ctx.complete_error(&self.metrics, method, &e.to_string());
                Err(ServiceError::Repo(e))
            }
        }
    }
}
