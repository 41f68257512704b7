// client module - API layer used by the mobile app
//
// `BackendClient` talks to the richer backend (multipart uploads, votings),
// `ProxyClient` talks to this crate's own proxy server.

pub mod backend;
pub mod envelope;
pub mod image;
pub mod proxy;

pub use backend::BackendClient;
pub use envelope::Envelope;
pub use image::ImageFile;
pub use proxy::ProxyClient;

use reqwest::{RequestBuilder, Response};
use serde_json::Value;
use url::Url;

use crate::error::ClientResult;

/// Client-side timeout for every call (seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Append percent-encoded path segments to a base URL
pub(crate) fn endpoint(base_url: &str, segments: &[&str]) -> ClientResult<Url> {
    let mut url = Url::parse(base_url)?;
    url.path_segments_mut()
        .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// Send and parse the JSON body, whatever the status
pub(crate) async fn send_json(request: RequestBuilder) -> ClientResult<(reqwest::StatusCode, Value)> {
    let response: Response = request.send().await?;
    let status = response.status();
    let body = response.json::<Value>().await?;
    Ok((status, body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_and_encodes() {
        let url = endpoint("http://localhost:3000/", &["api", "votings", "a b/c", "upload-option-image"])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:3000/api/votings/a%20b%2Fc/upload-option-image"
        );

        let url = endpoint("https://backend.example/prefix", &["api", "events"]).unwrap();
        assert_eq!(url.as_str(), "https://backend.example/prefix/api/events");
    }

    #[test]
    fn test_endpoint_rejects_bad_base() {
        assert!(endpoint("not a url", &["api"]).is_err());
    }
}
