use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = 50, message = "Username is required"))]
    #[serde(rename = "username")]
    #[schema(example = "ana")]
    pub name: String,

    #[validate(
        email(message = "Invalid email format"),
        length(max = 100, message = "Email is too long")
    )]
    #[schema(example = "ana@example.com")]
    pub email: String,

    #[validate(length(min = 10, message = "Password must be at least 10 characters"))]
    pub password: String,

    #[validate(length(min = 1, max = 50, message = "Cargo is required"))]
    #[serde(rename = "cargo")]
    #[schema(example = "cashier")]
    pub position: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateUserRequest {
    #[serde(default)]
    pub id: Option<i64>,

    #[validate(length(min = 1, max = 50, message = "Username is required"))]
    #[serde(rename = "username")]
    #[schema(example = "ana")]
    pub name: String,

    #[validate(
        email(message = "Invalid email format"),
        length(max = 100, message = "Email is too long")
    )]
    #[schema(example = "ana@example.com")]
    pub email: String,

    #[validate(length(min = 10, message = "Password must be at least 10 characters"))]
    pub password: String,

    #[validate(length(min = 1, max = 50, message = "Cargo is required"))]
    #[serde(rename = "cargo")]
    #[schema(example = "cashier")]
    pub position: String,
}

/// Row to insert, password already hashed.
#[derive(Debug, Clone)]
pub struct CreateUserRecord {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub position: Option<String>,
}

#[derive(Debug, Clone)]
pub struct UpdateUserRecord {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub position: Option<String>,
}
