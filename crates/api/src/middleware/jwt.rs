use axum::{
    Extension,
    body::Body,
    http::{Request, header},
    middleware::Next,
    response::IntoResponse,
};
use axum_extra::extract::cookie::CookieJar;
use shared::{abstract_trait::DynIdentityService, errors::HttpError};
use tracing::warn;

/// Resolves the bearer token (or `token` cookie) to a stored identity and
/// exposes it to handlers as `Extension<UserResponse>`.
pub async fn auth_middleware(
    cookie_jar: CookieJar,
    Extension(identity): Extension<DynIdentityService>,
    mut req: Request<Body>,
    next: Next,
) -> Result<impl IntoResponse, HttpError> {
    let token = cookie_jar
        .get("token")
        .map(|cookie| cookie.value().to_string())
        .or_else(|| {
            req.headers()
                .get(header::AUTHORIZATION)
                .and_then(|auth_header| auth_header.to_str().ok())
                .and_then(|auth_value| auth_value.strip_prefix("Bearer ").map(str::to_owned))
        });

    let Some(token) = token else {
        return Err(HttpError::Unauthorized(
            "You are not logged in, please provide token".to_string(),
        ));
    };

    let current_user = identity.authenticate(&token).await.map_err(|e| {
        warn!("🔒 Authentication failed for {} {}: {e}", req.method(), req.uri());
        HttpError::from(e)
    })?;

    req.extensions_mut().insert(current_user);

    Ok(next.run(req).await)
}
