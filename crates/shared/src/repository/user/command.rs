use crate::{
    abstract_trait::UserCommandRepositoryTrait,
    config::ConnectionPool,
    domain::requests::{CreateUserRecord, UpdateUserRecord},
    errors::RepositoryError,
    model::User as UserModel,
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct UserCommandRepository {
    db: ConnectionPool,
}

impl UserCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserCommandRepositoryTrait for UserCommandRepository {
    async fn create_user(&self, req: &CreateUserRecord) -> Result<UserModel, RepositoryError> {
        info!("🆕 Inserting user: {}", req.email);

        let user = sqlx::query_as::<_, UserModel>(
            r#"
            INSERT INTO users (name, email, password_hash, position)
            VALUES (?, ?, ?, ?)
            RETURNING id, name, email, password_hash, position, created_at, updated_at
            "#,
        )
        .bind(&req.name)
        .bind(&req.email)
        .bind(&req.password_hash)
        .bind(&req.position)
        .fetch_one(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to insert user {}: {e:?}", req.email);
            RepositoryError::from(e)
        })?;

        Ok(user)
    }

    async fn update_user(&self, req: &UpdateUserRecord) -> Result<UserModel, RepositoryError> {
        info!("✏️ Updating user ID: {}", req.id);

        let user = sqlx::query_as::<_, UserModel>(
            r#"
            UPDATE users
            SET name = ?,
                email = ?,
                password_hash = ?,
                position = ?,
                updated_at = CURRENT_TIMESTAMP
            WHERE id = ?
            RETURNING id, name, email, password_hash, position, created_at, updated_at
            "#,
        )
        .bind(&req.name)
        .bind(&req.email)
        .bind(&req.password_hash)
        .bind(&req.position)
        .bind(req.id)
        .fetch_one(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to update user {}: {e:?}", req.id);
            RepositoryError::from(e)
        })?;

        Ok(user)
    }

    async fn delete_user(&self, id: i64) -> Result<(), RepositoryError> {
        info!("🗑️ Deleting user ID: {id}");

        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to delete user {id}: {e:?}");
                RepositoryError::from(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
