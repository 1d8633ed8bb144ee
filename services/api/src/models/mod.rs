//! Domain models and wire payloads

pub mod contact;
pub mod item;
pub mod user;

// Re-export for convenience
pub use contact::{ContactMessage, NewContactMessage};
pub use item::{Item, NewItem};
pub use user::{NewUser, PublicUser, User};
