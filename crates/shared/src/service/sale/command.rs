use crate::{
    abstract_trait::{DynSaleCommandRepository, SaleCommandServiceTrait, SaleOutcome},
    domain::{
        requests::{CreateSaleRequest, NewSale, UpdateSaleRequest},
        responses::{ApiResponse, SaleResponse},
    },
    errors::{RepositoryError, ServiceError},
    utils::{Method, Metrics, TracingContext},
};
use async_trait::async_trait;
use chrono::Utc;
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info, warn};

pub struct SaleCommandService {
    command: DynSaleCommandRepository,
    metrics: Metrics,
}

impl SaleCommandService {
    pub async fn new(command: DynSaleCommandRepository, registry: Arc<Mutex<Registry>>) -> Self {
        let metrics = Metrics::new();
        metrics.register(
            &mut *registry.lock().await,
            "sale_command_service",
            "SaleCommandService",
        );

        Self { command, metrics }
    }
}

#[async_trait]
impl SaleCommandServiceTrait for SaleCommandService {
    async fn create_sale(
        &self,
        req: &CreateSaleRequest,
        acting_user_id: i64,
    ) -> Result<ApiResponse<SaleResponse>, ServiceError> {
        let method = Method::Post;
        let tracing_ctx = TracingContext::start("sale", "CreateSale");

        let sale = NewSale {
            sale_date: req.sale_date.unwrap_or_else(|| Utc::now().date_naive()),
            product_id: req.product_id,
            client_id: req.client_id,
            user_id: req.user_id.unwrap_or(acting_user_id),
            quantity: req.quantity,
            unit_price: req.unit_price,
            total: req.total,
        };

        info!(
            "🛒 Creating sale: product {} x{} by user {}",
            sale.product_id, sale.quantity, sale.user_id
        );

        let outcome = match self.command.create_sale(&sale).await {
            Ok(outcome) => outcome,
            Err(e) => {
                error!("❌ Sale transaction failed: {e}");
                tracing_ctx.complete_error(&self.metrics, method, &e.to_string());
                return Err(ServiceError::Repo(e));
            }
        };

        let rejection = match outcome {
            SaleOutcome::Created(created) => {
                info!("✅ Sale created (ID: {})", created.id);
                tracing_ctx.complete_success(&self.metrics, method, "Sale created successfully");
                return Ok(ApiResponse::success(
                    "Sale created successfully",
                    SaleResponse::from(created),
                ));
            }
            SaleOutcome::ProductNotFound => {
                ServiceError::NotFound(format!("Product {} not found", sale.product_id))
            }
            SaleOutcome::ClientNotFound => {
                ServiceError::NotFound(format!("Client {} not found", sale.client_id))
            }
            SaleOutcome::UserNotFound => {
                ServiceError::NotFound(format!("User {} not found", sale.user_id))
            }
            SaleOutcome::InsufficientStock { available } => ServiceError::InsufficientStock {
                product_id: sale.product_id,
                requested: sale.quantity,
                available,
            },
        };

        warn!("⚠️ Sale rejected: {rejection}");
        tracing_ctx.complete_error(&self.metrics, method, &rejection.to_string());
        Err(rejection)
    }

    async fn update_sale(
        &self,
        req: &UpdateSaleRequest,
    ) -> Result<ApiResponse<SaleResponse>, ServiceError> {
        let id = req
            .id
            .ok_or_else(|| ServiceError::Internal("Sale id missing from update".into()))?;

        info!("✏️ Updating sale ID: {id}");

        let method = Method::Put;
        let tracing_ctx = TracingContext::start("sale", "UpdateSale");

        match self.command.update_sale(id, req).await {
            Ok(sale) => {
                tracing_ctx.complete_success(&self.metrics, method, "Sale updated");
                Ok(ApiResponse::success(
                    "Sale updated successfully",
                    SaleResponse::from(sale),
                ))
            }
            Err(RepositoryError::NotFound) => {
                tracing_ctx.complete_error(&self.metrics, method, "Sale not found");
                Err(ServiceError::NotFound(format!("Sale {id} not found")))
            }
            Err(RepositoryError::ForeignKey(_)) => {
                tracing_ctx.complete_error(&self.metrics, method, "Dangling reference");
                Err(ServiceError::NotFound(
                    "Referenced product, client or user not found".into(),
                ))
            }
            Err(e) => {
                error!("❌ Failed to update sale {id}: {e}");
                tracing_ctx.complete_error(&self.metrics, method, &e.to_string());
                Err(ServiceError::Repo(e))
            }
        }
    }

    async fn delete_sale(&self, id: i64) -> Result<ApiResponse<()>, ServiceError> {
        info!("🗑️ Deleting sale ID: {id}");

        let method = Method::Delete;
        let tracing_ctx = TracingContext::start("sale", "DeleteSale");

        match self.command.delete_sale(id).await {
            Ok(()) => {
                tracing_ctx.complete_success(&self.metrics, method, "Sale deleted");
                Ok(ApiResponse::success("Sale deleted successfully", ()))
            }
            Err(RepositoryError::NotFound) => {
                tracing_ctx.complete_error(&self.metrics, method, "Sale not found");
                Err(ServiceError::NotFound(format!("Sale {id} not found")))
            }
            Err(e) => {
                error!("❌ Failed to delete sale {id}: {e}");
                tracing_ctx.complete_error(&self.metrics, method, &e.to_string());
                Err(ServiceError::Repo(e))
            }
        }
    }
}
