// Middleware module - Axum middleware

pub mod auth;
pub mod cors;
pub mod logging;

pub use auth::ensure_admin;
pub use cors::cors_layer;
pub use logging::logging_middleware;
