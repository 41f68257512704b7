// CORS layer
use axum::http::Method;
use tower_http::cors::{Any, CorsLayer};

/// The mobile app and web previews call the proxy from arbitrary origins
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
}
