mod auth;
mod client;
mod hashing;
mod jwt;
mod product;
mod sale;
mod user;

pub use self::auth::{
    DynIdentityService, DynLoginService, DynRegisterService, IdentityServiceTrait,
    LoginServiceTrait, RegisterServiceTrait,
};
pub use self::client::{
    ClientCommandRepositoryTrait, ClientCommandServiceTrait, ClientQueryRepositoryTrait,
    ClientQueryServiceTrait, DynClientCommandRepository, DynClientCommandService,
    DynClientQueryRepository, DynClientQueryService,
};
pub use self::hashing::{DynHashing, HashingTrait};
pub use self::jwt::{DynJwtService, JwtServiceTrait};
pub use self::product::{
    DynProductCommandRepository, DynProductCommandService, DynProductQueryRepository,
    DynProductQueryService, ProductCommandRepositoryTrait, ProductCommandServiceTrait,
    ProductQueryRepositoryTrait, ProductQueryServiceTrait,
};
pub use self::sale::{
    DynSaleCommandRepository, DynSaleCommandService, DynSaleQueryRepository,
    DynSaleQueryService, SaleCommandRepositoryTrait, SaleCommandServiceTrait, SaleOutcome,
    SaleQueryRepositoryTrait, SaleQueryServiceTrait,
};
pub use self::user::{
    DynUserCommandRepository, DynUserCommandService, DynUserQueryRepository,
    DynUserQueryService, UserCommandRepositoryTrait, UserCommandServiceTrait,
    UserQueryRepositoryTrait, UserQueryServiceTrait,
};
