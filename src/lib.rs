pub mod client;
pub mod error;
pub mod models;
pub mod modules;
pub mod proxy; // Proxy service module
mod utils;

use modules::logger;
use tracing::{error, info};

/// Boot the proxy server and serve until Ctrl-C
pub async fn run() -> anyhow::Result<()> {
    logger::init_logger();

    let config = modules::config::load_proxy_config().inspect_err(|e| {
        error!("Failed to load configuration: {}", e);
    })?;
    info!(
        "Configuration loaded (base {}, events table {}, ads table {})",
        config.store.base_id, config.store.events.table_id, config.store.ads.table_id
    );

    let (server, handle) = proxy::AxumServer::start(config)
        .await
        .map_err(anyhow::Error::msg)?;

    tokio::signal::ctrl_c().await?;
    info!("Shutdown signal received");

    server.stop();
    handle.await?;
    Ok(())
}
