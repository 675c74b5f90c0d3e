use crate::model::User;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
pub struct UserResponse {
    pub id: i64,
    #[serde(rename = "username")]
    pub name: String,
    pub email: String,
    #[serde(rename = "cargo")]
    pub position: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

// model to response
impl From<User> for UserResponse {
    fn from(value: User) -> Self {
        UserResponse {
            id: value.id,
            name: value.name,
            email: value.email,
            position: value.position,
            created_at: value.created_at.map(|dt| dt.to_string()),
            updated_at: value.updated_at.map(|dt| dt.to_string()),
        }
    }
}
