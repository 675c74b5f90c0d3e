mod repository;
mod service;

pub use self::repository::{
    DynSaleCommandRepository, DynSaleQueryRepository, SaleCommandRepositoryTrait, SaleOutcome,
    SaleQueryRepositoryTrait,
};
pub use self::service::{
    DynSaleCommandService, DynSaleQueryService, SaleCommandServiceTrait, SaleQueryServiceTrait,
};
