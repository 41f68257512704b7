// Request logging middleware
use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;

/// Log method, URI, status and latency of every request under a request id
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let request_id = uuid::Uuid::new_v4().simple().to_string();
    let method = request.method().clone();
    let uri = request.uri().clone();
    let started = Instant::now();

    tracing::info!("[{}] Request: {} {}", &request_id[..8], method, uri);

    let response = next.run(request).await;

    let status = response.status();
    let elapsed = started.elapsed().as_millis();
    if status.is_server_error() {
        tracing::error!("[{}] {} {} -> {} ({} ms)", &request_id[..8], method, uri, status, elapsed);
    } else {
        tracing::info!("[{}] {} {} -> {} ({} ms)", &request_id[..8], method, uri, status, elapsed);
    }

    response
}
