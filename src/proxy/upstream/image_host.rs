// Image host client
// Images travel base64-encoded in the `image` query parameter

use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::Client;

use crate::error::{AppError, AppResult};
use crate::models::ImageHostResponse;
use crate::proxy::config::{ImageHostConfig, UpstreamProxyConfig};

pub struct ImageHostClient {
    http_client: Client,
    config: ImageHostConfig,
}

impl ImageHostClient {
    pub fn new(
        config: ImageHostConfig,
        timeout_secs: u64,
        proxy_config: Option<&UpstreamProxyConfig>,
    ) -> Self {
        let http_client = crate::utils::http::create_client_with_proxy(timeout_secs, proxy_config);
        Self {
            http_client,
            config,
        }
    }

    /// Upload raw image bytes and return the publicly reachable URL
    pub async fn upload(&self, image: &[u8]) -> AppResult<String> {
        let encoded = STANDARD.encode(image);
        tracing::debug!(
            "Uploading image: {} bytes ({} encoded)",
            image.len(),
            encoded.len()
        );

        let request = self.http_client.post(&self.config.upload_url).query(&[
            ("key", self.config.api_key.as_str()),
            ("image", encoded.as_str()),
        ]);
        let body = super::client::send(request).await?;

        let hosted: ImageHostResponse = serde_json::from_value(body)
            .map_err(|e| AppError::Upstream(format!("Unexpected image host response: {}", e)))?;
        Ok(hosted.data.url)
    }
}
