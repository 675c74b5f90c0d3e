mod client;
mod product;
mod sale;
mod user;

pub use self::client::Client;
pub use self::product::Product;
pub use self::sale::Sale;
pub use self::user::User;
