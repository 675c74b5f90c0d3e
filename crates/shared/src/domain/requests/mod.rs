mod auth;
mod client;
mod product;
mod sale;
mod user;

pub use self::auth::{LoginRequest, RegisterRequest};
pub use self::client::{CreateClientRequest, UpdateClientRequest};
pub use self::product::{CreateProductRequest, UpdateProductRequest};
pub use self::sale::{CreateSaleRequest, NewSale, UpdateSaleRequest};
pub use self::user::{CreateUserRecord, CreateUserRequest, UpdateUserRecord, UpdateUserRequest};
