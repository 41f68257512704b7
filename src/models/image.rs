use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One element of the store's `Image` attachment column.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImageAttachment {
    pub url: Value,
}

impl ImageAttachment {
    /// Wraps an optional URL into the single-element list the store expects.
    pub fn wrap(url: Option<Value>) -> Option<Vec<ImageAttachment>> {
        url.map(|url| vec![ImageAttachment { url }])
    }
}

/// Response body of `POST /upload`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UploadedImage {
    pub url: String,
}

/// Image host reply; only `data.url` is read.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageHostResponse {
    pub data: ImageHostData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImageHostData {
    pub url: String,
}

/// Image attached to one option of a voting, as reported by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VotingOptionImage {
    pub voting_id: String,
    pub option_index: u32,
    pub image_url: String,
}
