use crate::{
    abstract_trait::{
        DynHashing, DynUserCommandRepository, DynUserQueryRepository, RegisterServiceTrait,
    },
    domain::{
        requests::{CreateUserRecord, RegisterRequest},
        responses::{ApiResponse, UserResponse},
    },
    errors::{RepositoryError, ServiceError},
    utils::{Method, Metrics, TracingContext},
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info, warn};

pub struct RegisterService {
    hash: DynHashing,
    query: DynUserQueryRepository,
    command: DynUserCommandRepository,
    metrics: Metrics,
}

impl RegisterService {
    pub async fn new(
        hash: DynHashing,
        query: DynUserQueryRepository,
        command: DynUserCommandRepository,
        registry: Arc<Mutex<Registry>>,
    ) -> Self {
        let metrics = Metrics::new();
        metrics.register(
            &mut *registry.lock().await,
            "register_service",
            "RegisterService",
        );

        Self {
            hash,
            query,
            command,
            metrics,
        }
    }
}

#[async_trait]
impl RegisterServiceTrait for RegisterService {
    async fn register(
        &self,
        req: &RegisterRequest,
    ) -> Result<ApiResponse<UserResponse>, ServiceError> {
        info!("📝 Registering identity: {}", req.email);

        let method = Method::Post;
        let tracing_ctx = TracingContext::start("auth", "Register");

        match self.query.find_by_email(&req.email).await {
            Ok(Some(_)) => {
                warn!("⚠️ Email already registered: {}", req.email);
                tracing_ctx.complete_error(&self.metrics, method, "Email already registered");
                return Err(ServiceError::Conflict("Email already registered".into()));
            }
            Ok(None) => {}
            Err(e) => {
                error!("❌ Failed to look up email {}: {e}", req.email);
                tracing_ctx.complete_error(&self.metrics, method, &e.to_string());
                return Err(ServiceError::Repo(e));
            }
        }

        let password_hash = match self.hash.hash_password(&req.password).await {
            Ok(hash) => hash,
            Err(e) => {
                tracing_ctx.complete_error(&self.metrics, method, "Password hashing failed");
                return Err(e);
            }
        };

        let record = CreateUserRecord {
            name: req.name.clone(),
            email: req.email.clone(),
            password_hash,
            position: None,
        };

        let user = match self.command.create_user(&record).await {
            Ok(user) => user,
            // a concurrent registration won the unique index
            Err(RepositoryError::AlreadyExists(_)) => {
                tracing_ctx.complete_error(&self.metrics, method, "Email already registered");
                return Err(ServiceError::Conflict("Email already registered".into()));
            }
            Err(e) => {
                error!("❌ Failed to register {}: {e}", req.email);
                tracing_ctx.complete_error(&self.metrics, method, &e.to_string());
                return Err(ServiceError::Repo(e));
            }
        };

        info!("✅ Identity registered: {} (ID: {})", user.email, user.id);
        tracing_ctx.complete_success(&self.metrics, method, "User registered");

        Ok(ApiResponse::success(
            "User registered successfully",
            UserResponse::from(user),
        ))
    }
}
