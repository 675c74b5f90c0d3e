use crate::{
    abstract_trait::ClientCommandRepositoryTrait,
    config::ConnectionPool,
    domain::requests::{CreateClientRequest, UpdateClientRequest},
    errors::RepositoryError,
    model::Client as ClientModel,
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct ClientCommandRepository {
    db: ConnectionPool,
}

impl ClientCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ClientCommandRepositoryTrait for ClientCommandRepository {
    async fn create_client(
        &self,
        req: &CreateClientRequest,
    ) -> Result<ClientModel, RepositoryError> {
        info!("🆕 Inserting client with NIT {}", req.tax_id);

        let client = sqlx::query_as::<_, ClientModel>(
            r#"
            INSERT INTO clients (name, tax_id)
            VALUES (?, ?)
            RETURNING id, name, tax_id, created_at, updated_at
            "#,
        )
        .bind(&req.name)
        .bind(&req.tax_id)
        .fetch_one(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to insert client {}: {e:?}", req.tax_id);
            RepositoryError::from(e)
        })?;

        Ok(client)
    }

    async fn update_client(
        &self,
        id: i64,
        req: &UpdateClientRequest,
    ) -> Result<ClientModel, RepositoryError> {
        info!("✏️ Updating client ID: {id}");

        let client = sqlx::query_as::<_, ClientModel>(
            r#"
            UPDATE clients
            SET name = ?, tax_id = ?, updated_at = CURRENT_TIMESTAMP
            WHERE id = ?
            RETURNING id, name, tax_id, created_at, updated_at
            "#,
        )
        .bind(&req.name)
        .bind(&req.tax_id)
        .bind(id)
        .fetch_one(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to update client {id}: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(client)
    }

    async fn delete_client(&self, id: i64) -> Result<(), RepositoryError> {
        info!("🗑️ Deleting client ID: {id}");

        let result = sqlx::query("DELETE FROM clients WHERE id = ?")
            .bind(id)
            .execute(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to delete client {id}: {e:?}");
                RepositoryError::from(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
