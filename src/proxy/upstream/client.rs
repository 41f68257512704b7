// Tabular store client
// One bearer key per table, one shared base

use reqwest::{Client, Method, RequestBuilder};
use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::error::{AppError, AppResult};
use crate::models::RecordPayload;
use crate::proxy::config::{StoreConfig, TableConfig, UpstreamProxyConfig};

/// Tables the proxy knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    Events,
    Ads,
}

pub struct StoreClient {
    http_client: Client,
    store: StoreConfig,
}

impl StoreClient {
    pub fn new(
        store: StoreConfig,
        timeout_secs: u64,
        proxy_config: Option<&UpstreamProxyConfig>,
    ) -> Self {
        let http_client = crate::utils::http::create_client_with_proxy(timeout_secs, proxy_config);
        Self { http_client, store }
    }

    fn table(&self, table: Table) -> &TableConfig {
        match table {
            Table::Events => &self.store.events,
            Table::Ads => &self.store.ads,
        }
    }

    /// Build the URL of a single record; the id is percent-encoded as one path segment
    fn record_url(&self, table: Table, record_id: &str) -> AppResult<Url> {
        let base = self.store.table_url(self.table(table));
        let mut url = Url::parse(&base)
            .map_err(|e| AppError::Upstream(format!("Invalid table URL {}: {}", base, e)))?;
        url.path_segments_mut()
            .map_err(|_| AppError::Upstream(format!("Table URL cannot be a base: {}", base)))?
            .pop_if_empty()
            .push(record_id);
        Ok(url)
    }

    fn request(&self, table: Table, method: Method, url: &str) -> RequestBuilder {
        self.http_client
            .request(method, url)
            .bearer_auth(&self.table(table).api_key)
    }

    /// List all records of a table; the store's body is returned untouched
    pub async fn list_records(&self, table: Table) -> AppResult<Value> {
        let url = self.store.table_url(self.table(table));
        tracing::debug!("Listing records of {:?}", table);
        send(self.request(table, Method::GET, &url)).await
    }

    pub async fn create_record<F: Serialize>(&self, table: Table, fields: F) -> AppResult<Value> {
        let url = self.store.table_url(self.table(table));
        tracing::debug!("Creating record in {:?}", table);
        send(
            self.request(table, Method::POST, &url)
                .json(&RecordPayload::new(fields)),
        )
        .await
    }

    /// Partial update; columns absent from `fields` keep their stored value
    pub async fn update_record<F: Serialize>(
        &self,
        table: Table,
        record_id: &str,
        fields: F,
    ) -> AppResult<Value> {
        let url = self.record_url(table, record_id)?;
        tracing::debug!("Updating record {} in {:?}", record_id, table);
        send(
            self.request(table, Method::PATCH, url.as_str())
                .json(&RecordPayload::new(fields)),
        )
        .await
    }

    pub async fn delete_record(&self, table: Table, record_id: &str) -> AppResult<Value> {
        let url = self.record_url(table, record_id)?;
        tracing::debug!("Deleting record {} from {:?}", record_id, table);
        send(self.request(table, Method::DELETE, url.as_str())).await
    }
}

/// Send the request and decode a successful JSON body.
/// Non-2xx statuses become `AppError::Upstream` carrying the upstream body.
pub(crate) async fn send(request: RequestBuilder) -> AppResult<Value> {
    // The image host carries its key in the query string; keep URLs out of error text
    let response = request
        .send()
        .await
        .map_err(|e| AppError::Network(e.without_url()))?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(AppError::Upstream(format!(
            "Upstream returned {}: {}",
            status, body
        )));
    }

    response
        .json::<Value>()
        .await
        .map_err(|e| AppError::Upstream(format!("Parse json failed: {}", e)))
}
