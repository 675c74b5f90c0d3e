use crate::middleware::{jwt::auth_middleware, validate::SimpleValidatedJson};
use axum::{
    Extension, Json,
    extract::Path,
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::get,
};
use shared::{
    abstract_trait::{DynIdentityService, DynSaleCommandService, DynSaleQueryService},
    domain::{
        requests::{CreateSaleRequest, UpdateSaleRequest},
        responses::{ApiResponse, SaleResponse, UserResponse},
    },
    errors::{ErrorResponse, HttpError},
};
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/ventas",
    tag = "Sale",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "List of sales", body = ApiResponse<Vec<SaleResponse>>),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    )
)]
pub async fn get_sales(
    Extension(service): Extension<DynSaleQueryService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_all().await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/ventas/{id}",
    tag = "Sale",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Sale ID")),
    responses(
        (status = 200, description = "Sale details", body = ApiResponse<SaleResponse>),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Sale not found", body = ErrorResponse)
    )
)]
pub async fn get_sale(
    Extension(service): Extension<DynSaleQueryService>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_id(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

/// Registers a sale and decrements the product stock atomically.
///
/// `usuario_id` defaults to the caller and `fecha` to today (UTC).
#[utoipa::path(
    post,
    path = "/ventas",
    tag = "Sale",
    security(("bearer_auth" = [])),
    request_body = CreateSaleRequest,
    responses(
        (status = 201, description = "Sale created", body = ApiResponse<SaleResponse>),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Product, client or user not found", body = ErrorResponse),
        (status = 422, description = "Insufficient stock", body = ErrorResponse)
    )
)]
pub async fn create_sale(
    Extension(service): Extension<DynSaleCommandService>,
    Extension(current_user): Extension<UserResponse>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateSaleRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.create_sale(&body, current_user.id).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    put,
    path = "/ventas/{id}",
    tag = "Sale",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Sale ID")),
    request_body = UpdateSaleRequest,
    responses(
        (status = 200, description = "Sale updated", body = ApiResponse<SaleResponse>),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Sale or reference not found", body = ErrorResponse)
    )
)]
pub async fn update_sale(
    Extension(service): Extension<DynSaleCommandService>,
    Path(id): Path<i64>,
    SimpleValidatedJson(mut body): SimpleValidatedJson<UpdateSaleRequest>,
) -> Result<impl IntoResponse, HttpError> {
    body.id = Some(id);

    let response = service.update_sale(&body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/ventas/{id}",
    tag = "Sale",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Sale ID")),
    responses(
        (status = 200, description = "Sale deleted", body = serde_json::Value),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Sale not found", body = ErrorResponse)
    )
)]
pub async fn delete_sale(
    Extension(service): Extension<DynSaleCommandService>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.delete_sale(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn sale_routes(
    query: DynSaleQueryService,
    command: DynSaleCommandService,
    identity: DynIdentityService,
) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/ventas", get(get_sales).post(create_sale))
        .route(
            "/ventas/{id}",
            get(get_sale).put(update_sale).delete(delete_sale),
        )
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(query))
        .layer(Extension(command))
        .layer(Extension(identity))
}
