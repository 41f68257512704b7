use crate::proxy::config::ProxyConfig;
use crate::proxy::upstream::{ImageHostClient, StoreClient};
use axum::{
    extract::DefaultBodyLimit,
    response::{IntoResponse, Json, Response},
    routing::{get, patch, post},
    Router,
};
use std::sync::Arc;
use tokio::sync::oneshot;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::{debug, error};

/// Axum application state; everything in it is read-only after startup
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ProxyConfig>,
    pub store: Arc<StoreClient>,
    pub image_host: Arc<ImageHostClient>,
}

impl AppState {
    pub fn new(config: ProxyConfig) -> Self {
        let proxy = Some(&config.upstream_proxy);
        let store = StoreClient::new(config.store.clone(), config.request_timeout, proxy);
        let image_host =
            ImageHostClient::new(config.image_host.clone(), config.request_timeout, proxy);

        Self {
            config: Arc::new(config),
            store: Arc::new(store),
            image_host: Arc::new(image_host),
        }
    }
}

/// Build the application router
pub fn build_router(state: AppState) -> Router {
    use crate::proxy::handlers;

    Router::new()
        .route(
            "/events",
            get(handlers::events::handle_list_events).post(handlers::events::handle_create_event),
        )
        .route(
            "/events/:id",
            patch(handlers::events::handle_edit_event)
                .delete(handlers::events::handle_delete_event),
        )
        .route(
            "/ads",
            get(handlers::ads::handle_list_ads).post(handlers::ads::handle_create_ad),
        )
        .route("/upload", post(handlers::upload::handle_upload))
        .route("/healthz", get(health_check_handler))
        .layer(
            ServiceBuilder::new()
                .layer(crate::proxy::middleware::cors_layer())
                .layer(axum::middleware::from_fn(
                    crate::proxy::middleware::logging_middleware,
                ))
                .layer(TraceLayer::new_for_http())
                .layer(DefaultBodyLimit::max(32 * 1024 * 1024)),
        )
        .with_state(state)
}

/// Axum server instance
pub struct AxumServer {
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl AxumServer {
    /// Start Axum server
    pub async fn start(
        config: ProxyConfig,
    ) -> Result<(Self, tokio::task::JoinHandle<()>), String> {
        let addr = config.get_bind_address();
        let app = build_router(AppState::new(config));

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| format!("Failed to bind address {}: {}", addr, e))?;

        tracing::info!("Proxy server started at http://{}", addr);

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel::<()>();

        let server_instance = Self {
            shutdown_tx: Some(shutdown_tx),
        };

        let handle = tokio::spawn(async move {
            use hyper::server::conn::http1;
            use hyper_util::rt::TokioIo;
            use hyper_util::service::TowerToHyperService;

            loop {
                tokio::select! {
                    res = listener.accept() => {
                        match res {
                            Ok((stream, _)) => {
                                let io = TokioIo::new(stream);
                                let service = TowerToHyperService::new(app.clone());

                                tokio::task::spawn(async move {
                                    if let Err(err) = http1::Builder::new()
                                        .serve_connection(io, service)
                                        .await
                                    {
                                        debug!("Connection handling finished or errored: {:?}", err);
                                    }
                                });
                            }
                            Err(e) => {
                                error!("Failed to accept connection: {:?}", e);
                            }
                        }
                    }
                    _ = &mut shutdown_rx => {
                        tracing::info!("Proxy server stopped listening");
                        break;
                    }
                }
            }
        });

        Ok((server_instance, handle))
    }

    /// Stop server
    pub fn stop(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

/// Health check handler
async fn health_check_handler() -> Response {
    Json(serde_json::json!({
        "status": "ok"
    }))
    .into_response()
}
