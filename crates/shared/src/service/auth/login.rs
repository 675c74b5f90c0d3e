use crate::{
    abstract_trait::{DynHashing, DynJwtService, DynUserQueryRepository, LoginServiceTrait},
    domain::{requests::LoginRequest, responses::TokenResponse},
    errors::ServiceError,
    utils::{Method, Metrics, TracingContext},
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info, warn};

pub struct LoginService {
    hash: DynHashing,
    jwt: DynJwtService,
    query: DynUserQueryRepository,
    metrics: Metrics,
}

impl LoginService {
    pub async fn new(
        hash: DynHashing,
        jwt: DynJwtService,
        query: DynUserQueryRepository,
        registry: Arc<Mutex<Registry>>,
    ) -> Self {
        let metrics = Metrics::new();
        metrics.register(&mut *registry.lock().await, "login_service", "LoginService");

        Self {
            hash,
            jwt,
            query,
            metrics,
        }
    }
}

#[async_trait]
impl LoginServiceTrait for LoginService {
    async fn login(&self, req: &LoginRequest) -> Result<TokenResponse, ServiceError> {
        let email = &req.username;
        info!("🔐 Attempting login for email: {email}");

        let method = Method::Post;
        let tracing_ctx = TracingContext::start("auth", "Login");

        let user = match self.query.find_by_email(email).await {
            Ok(Some(user)) => user,
            Ok(None) => {
                warn!("❌ Login failed, unknown email: {email}");
                tracing_ctx.complete_error(&self.metrics, method, "Unknown email");
                return Err(ServiceError::InvalidCredentials);
            }
            Err(e) => {
                error!("❌ Failed to query user {email}: {e}");
                tracing_ctx.complete_error(&self.metrics, method, "Database error");
                return Err(ServiceError::Repo(e));
            }
        };

        if let Err(e) = self
            .hash
            .compare_password(&user.password_hash, &req.password)
            .await
        {
            warn!("❌ Login failed for {email}: {e}");
            tracing_ctx.complete_error(&self.metrics, method, "Invalid password");
            return Err(ServiceError::InvalidCredentials);
        }

        let access_token = match self.jwt.generate_token(&user.email) {
            Ok(token) => token,
            Err(e) => {
                error!("❌ Failed to generate access token: {e}");
                tracing_ctx.complete_error(&self.metrics, method, "Token generation failed");
                return Err(e);
            }
        };

        info!("✅ Login successful for {email}");
        tracing_ctx.complete_success(&self.metrics, method, "Login successful");

        Ok(TokenResponse::bearer(access_token))
    }
}
