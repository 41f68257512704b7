// proxy module - REST proxy in front of the tabular store and image host

pub mod config;
pub mod server;

pub mod common; // Common tools
pub mod handlers; // API endpoint handlers
pub mod mappers; // Request body mappers
pub mod middleware; // Axum middleware
pub mod upstream; // Upstream clients

pub use config::ProxyConfig;
pub use server::{build_router, AppState, AxumServer};
