mod client;
mod product;
mod sale;
mod user;

pub use self::client::ClientRepository;
pub use self::product::ProductRepository;
pub use self::sale::SaleRepository;
pub use self::user::UserRepository;
