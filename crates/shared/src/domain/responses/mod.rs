mod api;
mod client;
mod product;
mod sale;
mod token;
mod user;

pub use self::api::ApiResponse;
pub use self::client::ClientResponse;
pub use self::product::ProductResponse;
pub use self::sale::SaleResponse;
pub use self::token::TokenResponse;
pub use self::user::UserResponse;
