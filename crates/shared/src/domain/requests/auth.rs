use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema, Clone)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 100, message = "Name is required"))]
    #[serde(rename = "nombre")]
    #[schema(example = "Ana Perez")]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "ana@example.com")]
    pub email: String,

    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    #[serde(rename = "passwd")]
    pub password: String,
}

/// OAuth2 password-grant style form; `username` carries the email.
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema, Clone)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    #[schema(example = "ana@example.com")]
    pub username: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}
