//! Repositories for database operations

pub mod contact;
pub mod item;
pub mod user;

pub use contact::ContactRepository;
pub use item::ItemRepository;
pub use user::UserRepository;
