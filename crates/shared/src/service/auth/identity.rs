use crate::{
    abstract_trait::{DynJwtService, DynUserQueryRepository, IdentityServiceTrait},
    domain::responses::UserResponse,
    errors::ServiceError,
    utils::{Method, Metrics, TracingContext},
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, warn};

pub struct IdentityService {
    jwt: DynJwtService,
    query: DynUserQueryRepository,
    metrics: Metrics,
}

impl IdentityService {
    pub async fn new(
        jwt: DynJwtService,
        query: DynUserQueryRepository,
        registry: Arc<Mutex<Registry>>,
    ) -> Self {
        let metrics = Metrics::new();
        metrics.register(
            &mut *registry.lock().await,
            "identity_service",
            "IdentityService",
        );

        Self {
            jwt,
            query,
            metrics,
        }
    }
}

#[async_trait]
impl IdentityServiceTrait for IdentityService {
    async fn authenticate(&self, token: &str) -> Result<UserResponse, ServiceError> {
        let method = Method::Get;
        let tracing_ctx = TracingContext::start("auth", "Authenticate");

        let email = match self.jwt.verify_token(token) {
            Ok(subject) => subject,
            Err(e) => {
                warn!("🔒 Rejected token: {e}");
                tracing_ctx.complete_error(&self.metrics, method, "Token rejected");
                return Err(e);
            }
        };

        match self.query.find_by_email(&email).await {
            Ok(Some(user)) => {
                tracing_ctx.complete_success(&self.metrics, method, "Identity resolved");
                Ok(UserResponse::from(user))
            }
            Ok(None) => {
                warn!("🔒 Token subject {email} no longer exists");
                tracing_ctx.complete_error(&self.metrics, method, "Unknown subject");
                Err(ServiceError::InvalidToken)
            }
            Err(e) => {
                error!("❌ Failed to resolve identity {email}: {e}");
                tracing_ctx.complete_error(&self.metrics, method, &e.to_string());
                Err(ServiceError::Repo(e))
            }
        }
    }
}
