// Errors layer - per-API error enums mapped to HTTP responses
pub mod auth;
pub mod items;

pub use auth::AuthError;
pub use items::ItemError;
