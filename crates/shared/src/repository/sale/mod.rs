mod command;
mod query;

use self::command::SaleCommandRepository;
use self::query::SaleQueryRepository;

use crate::{
    abstract_trait::{DynSaleCommandRepository, DynSaleQueryRepository},
    config::ConnectionPool,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct SaleRepository {
    pub query: DynSaleQueryRepository,
    pub command: DynSaleCommandRepository,
}

impl SaleRepository {
    pub fn new(pool: ConnectionPool) -> Self {
        let query = Arc::new(SaleQueryRepository::new(pool.clone())) as DynSaleQueryRepository;
        let command =
            Arc::new(SaleCommandRepository::new(pool.clone())) as DynSaleCommandRepository;

        Self { query, command }
    }
}
