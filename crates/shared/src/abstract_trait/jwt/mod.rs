use crate::errors::ServiceError;
use std::sync::Arc;

pub type DynJwtService = Arc<dyn JwtServiceTrait + Send + Sync>;

/// Issues and checks bearer tokens whose subject is the identity email.
pub trait JwtServiceTrait: Send + Sync + std::fmt::Debug {
    fn generate_token(&self, subject: &str) -> Result<String, ServiceError>;
    fn verify_token(&self, token: &str) -> Result<String, ServiceError>;
}
