use std::time::Duration;

use reqwest::{Client, Proxy};

use crate::proxy::config::UpstreamProxyConfig;

/// Create an HTTP client with a timeout and no outbound proxy
pub fn create_client(timeout_secs: u64) -> Client {
    create_client_with_proxy(timeout_secs, None)
}

/// Client for store and image host calls. An unparsable proxy URL is logged
/// and the client falls back to a direct connection.
pub fn create_client_with_proxy(
    timeout_secs: u64,
    proxy_config: Option<&UpstreamProxyConfig>,
) -> Client {
    let builder = Client::builder().timeout(Duration::from_secs(timeout_secs));

    let builder = match proxy_config.filter(|c| c.enabled && !c.url.is_empty()) {
        Some(config) => match Proxy::all(&config.url) {
            Ok(proxy) => {
                tracing::info!("Routing upstream requests through {}", config.url);
                builder.proxy(proxy)
            }
            Err(e) => {
                tracing::warn!(
                    "Ignoring UPSTREAM_PROXY_URL {}: {}; connecting directly",
                    config.url,
                    e
                );
                builder
            }
        },
        None => builder,
    };

    builder.build().unwrap_or_else(|e| {
        tracing::error!("Failed to build HTTP client, using defaults: {}", e);
        Client::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_proxy_url_still_builds_client() {
        let config = UpstreamProxyConfig {
            enabled: true,
            url: "not a url".to_string(),
        };
        let _client = create_client_with_proxy(5, Some(&config));
    }
}
