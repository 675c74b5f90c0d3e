use crate::{
    abstract_trait::UserQueryRepositoryTrait, config::ConnectionPool, errors::RepositoryError,
    model::User as UserModel,
};
use async_trait::async_trait;
use tracing::{error, info};

#[derive(Clone)]
pub struct UserQueryRepository {
    db: ConnectionPool,
}

impl UserQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserQueryRepositoryTrait for UserQueryRepository {
    async fn find_all(&self) -> Result<Vec<UserModel>, RepositoryError> {
        info!("🔍 Fetching all users");

        let users = sqlx::query_as::<_, UserModel>(
            r#"
            SELECT id, name, email, password_hash, position, created_at, updated_at
            FROM users
            ORDER BY id
            "#,
        )
        .fetch_all(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch users: {e:?}");
            RepositoryError::from(e)
        })?;

        info!("✅ Found {} users", users.len());
        Ok(users)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<UserModel>, RepositoryError> {
        info!("🆔 Fetching user by ID: {id}");

        let user = sqlx::query_as::<_, UserModel>(
            r#"
            SELECT id, name, email, password_hash, position, created_at, updated_at
            FROM users
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch user {id}: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserModel>, RepositoryError> {
        info!("📧 Fetching user by email: {email}");

        let user = sqlx::query_as::<_, UserModel>(
            r#"
            SELECT id, name, email, password_hash, position, created_at, updated_at
            FROM users
            WHERE email = ?
            "#,
        )
        .bind(email)
        .fetch_optional(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch user by email {email}: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(user)
    }
}
