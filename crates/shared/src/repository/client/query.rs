use crate::{
    abstract_trait::ClientQueryRepositoryTrait, config::ConnectionPool, errors::RepositoryError,
    model::Client as ClientModel,
};
use async_trait::async_trait;
use tracing::{error, info};

#[derive(Clone)]
pub struct ClientQueryRepository {
    db: ConnectionPool,
}

impl ClientQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ClientQueryRepositoryTrait for ClientQueryRepository {
    async fn find_all(&self) -> Result<Vec<ClientModel>, RepositoryError> {
        info!("🔍 Fetching all clients");

        let clients = sqlx::query_as::<_, ClientModel>(
            "SELECT id, name, tax_id, created_at, updated_at FROM clients ORDER BY id",
        )
        .fetch_all(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch clients: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(clients)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<ClientModel>, RepositoryError> {
        info!("🆔 Fetching client by ID: {id}");

        let client = sqlx::query_as::<_, ClientModel>(
            "SELECT id, name, tax_id, created_at, updated_at FROM clients WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch client {id}: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(client)
    }
}
