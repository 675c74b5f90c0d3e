mod command;
mod query;

use self::command::SaleCommandService;
use self::query::SaleQueryService;
use crate::abstract_trait::{
    DynSaleCommandRepository, DynSaleCommandService, DynSaleQueryRepository, DynSaleQueryService,
};
use prometheus_client::registry::Registry;
use std::{fmt, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct SaleService {
    pub query: DynSaleQueryService,
    pub command: DynSaleCommandService,
}

impl fmt::Debug for SaleService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SaleService")
            .field("query", &"Arc<dyn SaleQueryServiceTrait>")
            .field("command", &"Arc<dyn SaleCommandServiceTrait>")
            .finish()
    }
}

impl SaleService {
    pub async fn new(
        query: DynSaleQueryRepository,
        command: DynSaleCommandRepository,
        registry: Arc<Mutex<Registry>>,
    ) -> Self {
        let query =
            Arc::new(SaleQueryService::new(query, registry.clone()).await) as DynSaleQueryService;
        let command =
            Arc::new(SaleCommandService::new(command, registry).await) as DynSaleCommandService;

        Self { query, command }
    }
}
