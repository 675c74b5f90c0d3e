mod auth;
mod client;
mod product;
mod sale;
mod user;

use crate::state::AppState;
use anyhow::{Context, Result};
use axum::{
    Json, Router,
    body::Body,
    extract::{DefaultBodyLimit, State},
    http::{StatusCode, header::CONTENT_TYPE},
    response::{IntoResponse, Response},
    routing::get,
};
use prometheus_client::encoding::text::encode;
use serde_json::json;
use shared::{errors::HttpError, utils::shutdown_signal};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};
use tracing::{error, info};
use utoipa::{
    Modify, OpenApi,
    openapi::security::{Http, HttpAuthScheme, SecurityScheme},
};
use utoipa_axum::router::OpenApiRouter;

pub use self::auth::auth_routes;
pub use self::client::client_routes;
pub use self::product::product_routes;
pub use self::sale::sale_routes;
pub use self::user::user_routes;

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::register_user_handler,
        auth::login_user_handler,
        auth::get_me_handler,

        user::get_users,
        user::get_user,
        user::create_user,
        user::update_user,
        user::delete_user,

        client::get_clients,
        client::get_client,
        client::create_client,
        client::update_client,
        client::delete_client,

        product::get_products,
        product::get_product,
        product::create_product,
        product::update_product,
        product::delete_product,

        sale::get_sales,
        sale::get_sale,
        sale::create_sale,
        sale::update_sale,
        sale::delete_sale,

        health_handler,
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Auth", description = "Registration, login and current identity"),
        (name = "User", description = "User endpoints"),
        (name = "Client", description = "Client endpoints"),
        (name = "Product", description = "Product and stock endpoints"),
        (name = "Sale", description = "Sale endpoints"),
        (name = "Health", description = "Liveness"),
    )
)]
struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);

        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}

pub async fn metrics_handler(State(state): State<Arc<AppState>>) -> Response {
    let mut buffer = String::new();

    let registry = state.registry.lock().await;

    if let Err(e) = encode(&mut buffer, &registry) {
        error!("❌ Failed to encode metrics: {e}");
        return HttpError::Internal(format!("Failed to encode metrics: {e}")).into_response();
    }

    (
        StatusCode::OK,
        [(
            CONTENT_TYPE,
            "application/openmetrics-text; version=1.0.0; charset=utf-8",
        )],
        Body::from(buffer),
    )
        .into_response()
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service and database are reachable"),
        (status = 500, description = "Database unreachable")
    )
)]
pub async fn health_handler(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    sqlx::query("SELECT 1")
        .execute(&state.pool)
        .await
        .map_err(|e| {
            error!("❌ Health probe failed: {e}");
            HttpError::Internal("Database unreachable".into())
        })?;

    Ok((
        StatusCode::OK,
        Json(json!({
            "status": "success",
            "message": "Inventory API is healthy"
        })),
    ))
}

pub struct AppRouter;

impl AppRouter {
    pub fn build(app_state: AppState) -> Router {
        let shared_state = Arc::new(app_state);
        let services = shared_state.di_container.clone();
        let identity = services.auth_service.identity.clone();

        let api_router = OpenApiRouter::with_openapi(ApiDoc::openapi())
            .route("/metrics", get(metrics_handler))
            .route("/health", get(health_handler))
            .with_state(shared_state.clone())
            .merge(auth_routes(
                services.auth_service.register.clone(),
                services.auth_service.login.clone(),
                identity.clone(),
            ))
            .merge(user_routes(
                services.user_service.query.clone(),
                services.user_service.command.clone(),
                identity.clone(),
            ))
            .merge(client_routes(
                services.client_service.query.clone(),
                services.client_service.command.clone(),
                identity.clone(),
            ))
            .merge(product_routes(
                services.product_service.query.clone(),
                services.product_service.command.clone(),
                identity.clone(),
            ))
            .merge(sale_routes(
                services.sale_service.query.clone(),
                services.sale_service.command.clone(),
                identity,
            ));

        let router_with_layers = api_router
            .layer(DefaultBodyLimit::disable())
            .layer(RequestBodyLimitLayer::new(1024 * 1024))
            .layer(TraceLayer::new_for_http());

        let (app_router, api) = router_with_layers.split_for_parts();

        app_router.route(
            "/api-docs/openapi.json",
            get(move || {
                let api = api.clone();
                async move { Json(api) }
            }),
        )
    }

    pub async fn serve(port: u16, app_state: AppState) -> Result<()> {
        let app = Self::build(app_state);

        let addr = format!("0.0.0.0:{port}");
        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("Failed to bind {addr}"))?;

        info!("🚀 Server running on http://{}", listener.local_addr()?);
        info!("📚 OpenAPI document: http://localhost:{port}/api-docs/openapi.json");
        info!("📊 Metrics: http://localhost:{port}/metrics");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("Server error")?;

        Ok(())
    }
}
