use crate::{
    domain::requests::{CreateUserRecord, UpdateUserRecord},
    errors::RepositoryError,
    model::User as UserModel,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynUserQueryRepository = Arc<dyn UserQueryRepositoryTrait + Send + Sync>;
pub type DynUserCommandRepository = Arc<dyn UserCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait UserQueryRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<UserModel>, RepositoryError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<UserModel>, RepositoryError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<UserModel>, RepositoryError>;
}

#[async_trait]
pub trait UserCommandRepositoryTrait {
    async fn create_user(&self, req: &CreateUserRecord) -> Result<UserModel, RepositoryError>;
    async fn update_user(&self, req: &UpdateUserRecord) -> Result<UserModel, RepositoryError>;
    async fn delete_user(&self, id: i64) -> Result<(), RepositoryError>;
}
