pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_TABLE_API_URL: &str = "https://api.airtable.com/v0";
pub const DEFAULT_IMAGE_HOST_URL: &str = "https://api.imgbb.com/1/upload";
pub const DEFAULT_REQUEST_TIMEOUT: u64 = 120;

/// Proxy service configuration, built once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct ProxyConfig {
    /// Bind address
    pub host: String,

    /// Listen port
    pub port: u16,

    /// The single identity allowed to create, edit and delete records
    pub admin_id: i64,

    /// Tabular store settings
    pub store: StoreConfig,

    /// Image host settings
    pub image_host: ImageHostConfig,

    /// Upstream request timeout (seconds)
    pub request_timeout: u64,

    /// Optional outbound proxy
    pub upstream_proxy: UpstreamProxyConfig,
}

/// Tabular store: one base shared by both tables, one key per table.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub api_url: String,
    pub base_id: String,
    pub events: TableConfig,
    pub ads: TableConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    pub table_id: String,
    pub api_key: String,
}

#[derive(Debug, Clone)]
pub struct ImageHostConfig {
    pub upload_url: String,
    pub api_key: String,
}

/// Upstream proxy configuration
#[derive(Debug, Clone, Default)]
pub struct UpstreamProxyConfig {
    pub enabled: bool,
    /// Proxy address (http://, https://, socks5://)
    pub url: String,
}

impl ProxyConfig {
    /// Address the listener binds to
    pub fn get_bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl StoreConfig {
    /// Collection URL of a table, e.g. `https://api.airtable.com/v0/appXYZ/Events`
    pub fn table_url(&self, table: &TableConfig) -> String {
        format!(
            "{}/{}/{}",
            self.api_url.trim_end_matches('/'),
            self.base_id,
            table.table_id
        )
    }
}
