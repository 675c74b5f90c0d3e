mod repository;
mod service;

pub use self::repository::{
    DynClientCommandRepository, DynClientQueryRepository, ClientCommandRepositoryTrait,
    ClientQueryRepositoryTrait,
};
pub use self::service::{
    DynClientCommandService, DynClientQueryService, ClientCommandServiceTrait, ClientQueryServiceTrait,
};
