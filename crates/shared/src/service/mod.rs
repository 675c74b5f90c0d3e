mod auth;
mod client;
mod product;
mod sale;
mod user;

pub use self::auth::{AuthService, AuthServiceDeps};
pub use self::client::ClientService;
pub use self::product::ProductService;
pub use self::sale::SaleService;
pub use self::user::UserService;
