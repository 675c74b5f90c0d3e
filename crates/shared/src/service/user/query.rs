use crate::{
    abstract_trait::{DynUserQueryRepository, UserQueryServiceTrait},
    domain::responses::{ApiResponse, UserResponse},
    errors::ServiceError,
    utils::{Method, Metrics, TracingContext},
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};

pub struct UserQueryService {
    query: DynUserQueryRepository,
    metrics: Metrics,
}

impl UserQueryService {
    pub async fn new(query: DynUserQueryRepository, registry: Arc<Mutex<Registry>>) -> Self {
        let metrics = Metrics::new();
        metrics.register(
            &mut *registry.lock().await,
            "user_query_service",
            "UserQueryService",
        );

        Self { query, metrics }
    }
}

#[async_trait]
impl UserQueryServiceTrait for UserQueryService {
    async fn find_all(&self) -> Result<ApiResponse<Vec<UserResponse>>, ServiceError> {
        let tracing_ctx = TracingContext::start("user", "FindAllUsers");

        let users = match self.query.find_all().await {
            Ok(users) => users,
            Err(e) => {
                error!("❌ Failed to list users: {e}");
                tracing_ctx.complete_error(&self.metrics, Method::Get, &e.to_string());
                return Err(ServiceError::Repo(e));
            }
        };

        info!("👥 Listing {} users", users.len());
        tracing_ctx.complete_success(&self.metrics, Method::Get, "Users listed");

        Ok(ApiResponse::success(
            "Users retrieved successfully",
            users.into_iter().map(UserResponse::from).collect(),
        ))
    }

    async fn find_by_id(&self, id: i64) -> Result<ApiResponse<UserResponse>, ServiceError> {
        let tracing_ctx = TracingContext::start("user", "FindUserById");

        match self.query.find_by_id(id).await {
            Ok(Some(user)) => {
                tracing_ctx.complete_success(&self.metrics, Method::Get, "User found");
                Ok(ApiResponse::success(
                    "User retrieved successfully",
                    UserResponse::from(user),
                ))
            }
            Ok(None) => {
                tracing_ctx.complete_error(&self.metrics, Method::Get, "User not found");
                Err(ServiceError::NotFound(format!("User {id} not found")))
            }
            Err(e) => {
                error!("❌ Failed to fetch user {id}: {e}");
                tracing_ctx.complete_error(&self.metrics, Method::Get, &e.to_string());
                Err(ServiceError::Repo(e))
            }
        }
    }
}
