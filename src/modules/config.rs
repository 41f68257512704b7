use crate::error::{AppError, AppResult};
use crate::proxy::config::{
    ImageHostConfig, ProxyConfig, StoreConfig, TableConfig, UpstreamProxyConfig, DEFAULT_HOST,
    DEFAULT_IMAGE_HOST_URL, DEFAULT_PORT, DEFAULT_REQUEST_TIMEOUT, DEFAULT_TABLE_API_URL,
};

/// Load proxy config from the process environment
pub fn load_proxy_config() -> AppResult<ProxyConfig> {
    load_proxy_config_from(|key| std::env::var(key).ok())
}

/// Load proxy config through an arbitrary variable lookup
pub fn load_proxy_config_from<F>(lookup: F) -> AppResult<ProxyConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
    let require = |key: &str| {
        get(key).ok_or_else(|| AppError::Config(format!("Missing environment variable {}", key)))
    };

    let admin_raw = require("ADMIN_ID")?;
    let admin_id = admin_raw
        .trim()
        .parse::<i64>()
        .map_err(|e| AppError::Config(format!("Invalid ADMIN_ID {:?}: {}", admin_raw, e)))?;

    let port = match get("PORT") {
        Some(raw) => raw
            .trim()
            .parse::<u16>()
            .map_err(|e| AppError::Config(format!("Invalid PORT {:?}: {}", raw, e)))?,
        None => DEFAULT_PORT,
    };

    let request_timeout = match get("REQUEST_TIMEOUT") {
        Some(raw) => raw
            .trim()
            .parse::<u64>()
            .map_err(|e| AppError::Config(format!("Invalid REQUEST_TIMEOUT {:?}: {}", raw, e)))?,
        None => DEFAULT_REQUEST_TIMEOUT,
    };

    let upstream_proxy = match get("UPSTREAM_PROXY_URL") {
        Some(url) => UpstreamProxyConfig { enabled: true, url },
        None => UpstreamProxyConfig::default(),
    };

    Ok(ProxyConfig {
        host: get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
        port,
        admin_id,
        store: StoreConfig {
            api_url: get("TABLE_API_URL").unwrap_or_else(|| DEFAULT_TABLE_API_URL.to_string()),
            base_id: require("BASE_ID")?,
            events: TableConfig {
                table_id: get("EVENTS_TABLE_ID").unwrap_or_else(|| "Events".to_string()),
                api_key: require("EVENTS_API_KEY")?,
            },
            ads: TableConfig {
                table_id: get("ADS_TABLE_ID").unwrap_or_else(|| "Ads".to_string()),
                api_key: require("ADS_API_KEY")?,
            },
        },
        image_host: ImageHostConfig {
            upload_url: get("IMAGE_HOST_URL").unwrap_or_else(|| DEFAULT_IMAGE_HOST_URL.to_string()),
            api_key: require("IMGBB_API_KEY")?,
        },
        request_timeout,
        upstream_proxy,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn required() -> Vec<(&'static str, &'static str)> {
        vec![
            ("EVENTS_API_KEY", "ev-key"),
            ("ADS_API_KEY", "ad-key"),
            ("BASE_ID", "appBase"),
            ("IMGBB_API_KEY", "img-key"),
            ("ADMIN_ID", "42"),
        ]
    }

    #[test]
    fn test_defaults_applied() {
        let vars = env(&required());
        let config = load_proxy_config_from(|k| vars.get(k).cloned()).unwrap();

        assert_eq!(config.port, 3000);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.admin_id, 42);
        assert_eq!(config.store.api_url, DEFAULT_TABLE_API_URL);
        assert_eq!(config.store.events.table_id, "Events");
        assert_eq!(config.store.ads.table_id, "Ads");
        assert_eq!(config.store.ads.api_key, "ad-key");
        assert_eq!(config.image_host.upload_url, DEFAULT_IMAGE_HOST_URL);
        assert_eq!(config.request_timeout, 120);
        assert!(!config.upstream_proxy.enabled);
    }

    #[test]
    fn test_overrides() {
        let mut pairs = required();
        pairs.extend([
            ("PORT", "8080"),
            ("EVENTS_TABLE_ID", "tblEvents"),
            ("UPSTREAM_PROXY_URL", "socks5://127.0.0.1:1080"),
        ]);
        let vars = env(&pairs);
        let config = load_proxy_config_from(|k| vars.get(k).cloned()).unwrap();

        assert_eq!(config.get_bind_address(), "0.0.0.0:8080");
        assert_eq!(config.store.events.table_id, "tblEvents");
        assert!(config.upstream_proxy.enabled);
        assert_eq!(config.upstream_proxy.url, "socks5://127.0.0.1:1080");
    }

    #[test]
    fn test_missing_required_variable() {
        let pairs: Vec<_> = required()
            .into_iter()
            .filter(|(k, _)| *k != "BASE_ID")
            .collect();
        let vars = env(&pairs);
        let err = load_proxy_config_from(|k| vars.get(k).cloned()).unwrap_err();
        assert!(matches!(err, AppError::Config(msg) if msg.contains("BASE_ID")));
    }

    #[test]
    fn test_invalid_admin_id() {
        let mut pairs = required();
        pairs.retain(|(k, _)| *k != "ADMIN_ID");
        pairs.push(("ADMIN_ID", "admin"));
        let vars = env(&pairs);
        assert!(matches!(
            load_proxy_config_from(|k| vars.get(k).cloned()),
            Err(AppError::Config(_))
        ));
    }
}
