use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::image::ImageAttachment;

/// Flat ad body accepted by `POST /ads`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdInput {
    #[serde(default)]
    pub user_id: Option<Value>,
    pub title: Option<Value>,
    pub description: Option<Value>,
    pub link: Option<Value>,
    pub image_url: Option<Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AdFields {
    #[serde(rename = "ID", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "Title", skip_serializing_if = "Option::is_none")]
    pub title: Option<Value>,
    #[serde(rename = "Description", skip_serializing_if = "Option::is_none")]
    pub description: Option<Value>,
    #[serde(rename = "Link", skip_serializing_if = "Option::is_none")]
    pub link: Option<Value>,
    #[serde(rename = "Image", skip_serializing_if = "Option::is_none")]
    pub image: Option<Vec<ImageAttachment>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewAd {
    pub title: String,
    pub description: String,
    pub link: String,
}

/// JSON part of the `/api/ads-with-image` multipart body.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct BackendAdFields {
    pub title: String,
    pub description: String,
    pub link: String,
}

impl From<&NewAd> for BackendAdFields {
    fn from(ad: &NewAd) -> Self {
        Self {
            title: ad.title.clone(),
            description: ad.description.clone(),
            link: ad.link.clone(),
        }
    }
}
