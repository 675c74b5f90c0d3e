use crate::errors::{error::ErrorResponse, repository::RepositoryError, service::ServiceError};
use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::error;

#[derive(Debug)]
pub enum HttpError {
    BadRequest(String),
    Unauthorized(String),
    NotFound(String),
    Conflict(String),
    UnprocessableEntity(String),
    Internal(String),
}

impl HttpError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            HttpError::BadRequest(_) => StatusCode::BAD_REQUEST,
            HttpError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            HttpError::NotFound(_) => StatusCode::NOT_FOUND,
            HttpError::Conflict(_) => StatusCode::CONFLICT,
            HttpError::UnprocessableEntity(_) => StatusCode::UNPROCESSABLE_ENTITY,
            HttpError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ServiceError> for HttpError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::InvalidCredentials => {
                HttpError::Unauthorized("Invalid credentials".to_string())
            }

            ServiceError::NotFound(msg) => HttpError::NotFound(msg),

            ServiceError::Conflict(msg) => HttpError::Conflict(msg),

            ServiceError::InsufficientStock { .. } => {
                HttpError::UnprocessableEntity(err.to_string())
            }

            ServiceError::Repo(repo_err) => match repo_err {
                RepositoryError::NotFound => HttpError::NotFound("Not found".into()),
                RepositoryError::AlreadyExists(msg) => HttpError::Conflict(msg),
                RepositoryError::ForeignKey(msg) => {
                    HttpError::Conflict(format!("Foreign key violation: {msg}"))
                }
                other => {
                    error!("❌ Repository failure: {other}");
                    HttpError::Internal("Repository error".into())
                }
            },

            ServiceError::Jwt(_) | ServiceError::InvalidToken => {
                HttpError::Unauthorized("Invalid token".into())
            }

            ServiceError::TokenExpired => HttpError::Unauthorized("Token expired".into()),

            ServiceError::Bcrypt(_) => {
                HttpError::Internal("Internal authentication error".into())
            }

            ServiceError::Internal(msg) => HttpError::Internal(msg),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let unauthorized = status == StatusCode::UNAUTHORIZED;

        let msg = match self {
            HttpError::BadRequest(msg)
            | HttpError::Unauthorized(msg)
            | HttpError::NotFound(msg)
            | HttpError::Conflict(msg)
            | HttpError::UnprocessableEntity(msg)
            | HttpError::Internal(msg) => msg,
        };

        let body = Json(ErrorResponse::new(msg));

        if unauthorized {
            (status, [(header::WWW_AUTHENTICATE, "Bearer")], body).into_response()
        } else {
            (status, body).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insufficient_stock_is_distinct_from_not_found() {
        let stock = HttpError::from(ServiceError::InsufficientStock {
            product_id: 1,
            requested: 6,
            available: 5,
        });
        let missing = HttpError::from(ServiceError::NotFound("Product 1 not found".into()));

        assert_eq!(stock.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(missing.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn repository_conflicts_map_to_409() {
        let dup = HttpError::from(ServiceError::Repo(RepositoryError::AlreadyExists(
            "UNIQUE constraint failed: users.email".into(),
        )));
        let fk = HttpError::from(ServiceError::Repo(RepositoryError::ForeignKey(
            "FOREIGN KEY constraint failed".into(),
        )));

        assert_eq!(dup.status_code(), StatusCode::CONFLICT);
        assert_eq!(fk.status_code(), StatusCode::CONFLICT);
    }

    #[test]
    fn token_failures_are_unauthorized() {
        for err in [ServiceError::TokenExpired, ServiceError::InvalidToken] {
            assert_eq!(HttpError::from(err).status_code(), StatusCode::UNAUTHORIZED);
        }
        assert_eq!(
            HttpError::from(ServiceError::InvalidCredentials).status_code(),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn error_response_carries_bearer_challenge() {
        let response = HttpError::Unauthorized("Invalid token".into()).into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            response.headers().get(header::WWW_AUTHENTICATE).unwrap(),
            "Bearer"
        );
    }
}
