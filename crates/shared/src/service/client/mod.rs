mod command;
mod query;

use self::command::ClientCommandService;
use self::query::ClientQueryService;
use crate::abstract_trait::{
    DynClientCommandRepository, DynClientCommandService, DynClientQueryRepository,
    DynClientQueryService,
};
use prometheus_client::registry::Registry;
use std::{fmt, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct ClientService {
    pub query: DynClientQueryService,
    pub command: DynClientCommandService,
}

impl fmt::Debug for ClientService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientService")
            .field("query", &"Arc<dyn ClientQueryServiceTrait>")
            .field("command", &"Arc<dyn ClientCommandServiceTrait>")
            .finish()
    }
}

impl ClientService {
    pub async fn new(
        query: DynClientQueryRepository,
        command: DynClientCommandRepository,
        registry: Arc<Mutex<Registry>>,
    ) -> Self {
        let query = Arc::new(ClientQueryService::new(query, registry.clone()).await)
            as DynClientQueryService;
        let command = Arc::new(ClientCommandService::new(command, registry).await)
            as DynClientCommandService;

        Self { query, command }
    }
}
