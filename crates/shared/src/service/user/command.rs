use crate::{
    abstract_trait::{DynHashing, DynUserCommandRepository, UserCommandServiceTrait},
    domain::{
        requests::{CreateUserRecord, CreateUserRequest, UpdateUserRecord, UpdateUserRequest},
        responses::{ApiResponse, UserResponse},
    },
    errors::{RepositoryError, ServiceError},
    utils::{Method, Metrics, TracingContext},
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};

pub struct UserCommandService {
    command: DynUserCommandRepository,
    hash: DynHashing,
    metrics: Metrics,
}

impl UserCommandService {
    pub async fn new(
        command: DynUserCommandRepository,
        hash: DynHashing,
        registry: Arc<Mutex<Registry>>,
    ) -> Self {
        let metrics = Metrics::new();
        metrics.register(
            &mut *registry.lock().await,
            "user_command_service",
            "UserCommandService",
        );

        Self {
            command,
            hash,
            metrics,
        }
    }
}

#[async_trait]
impl UserCommandServiceTrait for UserCommandService {
    async fn create_user(
        &self,
        req: &CreateUserRequest,
    ) -> Result<ApiResponse<UserResponse>, ServiceError> {
        info!("🏗️ Creating new user: {}", req.email);

        let method = Method::Post;
        let tracing_ctx = TracingContext::start("user", "CreateUser");

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
            position: Some(req.position.clone()),
        };

        let user = match self.command.create_user(&record).await {
            Ok(user) => user,
            Err(RepositoryError::AlreadyExists(_)) => {
                tracing_ctx.complete_error(&self.metrics, method, "Duplicate email");
                return Err(ServiceError::Conflict(format!(
                    "Email {} is already registered",
                    req.email
                )));
            }
            Err(e) => {
                error!("❌ Failed to create user '{}': {e}", req.email);
                tracing_ctx.complete_error(&self.metrics, method, &e.to_string());
                return Err(ServiceError::Repo(e));
            }
        };

        info!("✅ User created: {} (ID: {})", user.email, user.id);
        tracing_ctx.complete_success(&self.metrics, method, "User created successfully");

        Ok(ApiResponse::success(
            "User created successfully",
            UserResponse::from(user),
        ))
    }

    async fn update_user(
        &self,
        req: &UpdateUserRequest,
    ) -> Result<ApiResponse<UserResponse>, ServiceError> {
        let id = req
            .id
            .ok_or_else(|| ServiceError::Internal("User id missing from update".into()))?;

        info!("✏️ Updating user ID: {id}");

        let method = Method::Put;
        let tracing_ctx = TracingContext::start("user", "UpdateUser");

        let password_hash = match self.hash.hash_password(&req.password).await {
            Ok(hash) => hash,
            Err(e) => {
                tracing_ctx.complete_error(&self.metrics, method, "Password hashing failed");
                return Err(e);
            }
        };

        let record = UpdateUserRecord {
            id,
            name: req.name.clone(),
            email: req.email.clone(),
            password_hash,
            position: Some(req.position.clone()),
        };

        match self.command.update_user(&record).await {
            Ok(user) => {
                tracing_ctx.complete_success(&self.metrics, method, "User updated");
                Ok(ApiResponse::success(
                    "User updated successfully",
                    UserResponse::from(user),
                ))
            }
            Err(RepositoryError::NotFound) => {
                tracing_ctx.complete_error(&self.metrics, method, "User not found");
                Err(ServiceError::NotFound(format!("User {id} not found")))
            }
            Err(RepositoryError::AlreadyExists(_)) => {
                tracing_ctx.complete_error(&self.metrics, method, "Duplicate email");
                Err(ServiceError::Conflict(format!(
                    "Email {} is already registered",
                    req.email
                )))
            }
            Err(e) => {
                error!("❌ Failed to update user {id}: {e}");
                tracing_ctx.complete_error(&self.metrics, method, &e.to_string());
                Err(ServiceError::Repo(e))
            }
        }
    }

    async fn delete_user(&self, id: i64) -> Result<ApiResponse<()>, ServiceError> {
        info!("💀 Deleting user ID: {id}");

        let method = Method::Delete;
        let tracing_ctx = TracingContext::start("user", "DeleteUser");

        match self.command.delete_user(id).await {
            Ok(()) => {
                tracing_ctx.complete_success(&self.metrics, method, "User deleted");
                Ok(ApiResponse::success("User deleted successfully", ()))
            }
            Err(RepositoryError::NotFound) => {
                tracing_ctx.complete_error(&self.metrics, method, "User not found");
                Err(ServiceError::NotFound(format!("User {id} not found")))
            }
            Err(RepositoryError::ForeignKey(_)) => {
                tracing_ctx.complete_error(&self.metrics, method, "User referenced by sales");
                Err(ServiceError::Conflict(format!(
                    "User {id} is referenced by existing sales"
                )))
            }
            Err(e) => {
                error!("❌ Failed to delete user {id}: {e}");
                tracing_ctx.complete_error(&self.metrics, method, &e.to_string());
                Err(ServiceError::Repo(e))
            }
        }
    }
}
