// Stores layer - Data access and repository pattern
pub mod credential_store;
pub mod item_store;

pub use credential_store::CredentialStore;
pub use item_store::ItemStore;
