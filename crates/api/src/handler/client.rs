use crate::middleware::{jwt::auth_middleware, validate::SimpleValidatedJson};
use axum::{
    Extension, Json,
    extract::Path,
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, post, put},
};
use shared::{
    abstract_trait::{DynIdentityService, DynClientCommandService, DynClientQueryService},
    domain::{
        requests::{CreateClientRequest, UpdateClientRequest},
        responses::{ApiResponse, ClientResponse},
    },
    errors::{ErrorResponse, HttpError},
};
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/clientes",
    tag = "Client",
    responses(
        (status = 200, description = "List of clients", body = ApiResponse<Vec<ClientResponse>>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_clients(
    Extension(service): Extension<DynClientQueryService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_all().await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/clientes/{id}",
    tag = "Client",
    params(("id" = i64, Path, description = "Client ID")),
    responses(
        (status = 200, description = "Client details", body = ApiResponse<ClientResponse>),
        (status = 404, description = "Client not found", body = ErrorResponse)
    )
)]
pub async fn get_client(
    Extension(service): Extension<DynClientQueryService>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_id(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/clientes",
    tag = "Client",
    security(("bearer_auth" = [])),
    request_body = CreateClientRequest,
    responses(
        (status = 201, description = "Client created", body = ApiResponse<ClientResponse>),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 409, description = "Duplicate Client", body = ErrorResponse)
    )
)]
pub async fn create_client(
    Extension(service): Extension<DynClientCommandService>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateClientRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.create_client(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    put,
    path = "/clientes/{id}",
    tag = "Client",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Client ID")),
    request_body = UpdateClientRequest,
    responses(
        (status = 200, description = "Client updated", body = ApiResponse<ClientResponse>),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Client not found", body = ErrorResponse)
    )
)]
pub async fn update_client(
    Extension(service): Extension<DynClientCommandService>,
    Path(id): Path<i64>,
    SimpleValidatedJson(mut body): SimpleValidatedJson<UpdateClientRequest>,
) -> Result<impl IntoResponse, HttpError> {
    body.id = Some(id);

    let response = service.update_client(&body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/clientes/{id}",
    tag = "Client",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Client ID")),
    responses(
        (status = 200, description = "Client deleted", body = serde_json::Value),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Client not found", body = ErrorResponse),
        (status = 409, description = "Client is referenced by sales", body = ErrorResponse)
    )
)]
pub async fn delete_client(
    Extension(service): Extension<DynClientCommandService>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.delete_client(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

/// Reads are public; writes need a token.
pub fn client_routes(
    query: DynClientQueryService,
    command: DynClientCommandService,
    identity: DynIdentityService,
) -> OpenApiRouter {
    let public_routes = OpenApiRouter::new()
        .route("/clientes", get(get_clients))
        .route("/clientes/{id}", get(get_client))
        .layer(Extension(query));

    let private_routes = OpenApiRouter::new()
        .route("/clientes", post(create_client))
        .route("/clientes/{id}", put(update_client).delete(delete_client))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(command))
        .layer(Extension(identity));

    public_routes.merge(private_routes)
}
