use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::image::ImageAttachment;

/// Flat event body accepted by `POST /events` and `PATCH /events/:id`.
///
/// `user_id` is the caller's claimed identity and is never forwarded. The
/// other columns are carried as raw JSON so their shape is the store's call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventInput {
    #[serde(default)]
    pub user_id: Option<Value>,
    pub title: Option<Value>,
    #[serde(rename = "type")]
    pub kind: Option<Value>,
    pub date: Option<Value>,
    pub location: Option<Value>,
    pub description: Option<Value>,
    pub image_url: Option<Value>,
}

/// Event columns as stored upstream. Unset columns are left out so the same
/// type serves full creates and partial updates.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EventFields {
    #[serde(rename = "ID", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "Title", skip_serializing_if = "Option::is_none")]
    pub title: Option<Value>,
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<Value>,
    #[serde(rename = "Date", skip_serializing_if = "Option::is_none")]
    pub date: Option<Value>,
    #[serde(rename = "Location", skip_serializing_if = "Option::is_none")]
    pub location: Option<Value>,
    #[serde(rename = "Description", skip_serializing_if = "Option::is_none")]
    pub description: Option<Value>,
    #[serde(rename = "Image", skip_serializing_if = "Option::is_none")]
    pub image: Option<Vec<ImageAttachment>>,
}

/// Event as the client library submits it to the backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEvent {
    pub title: String,
    pub description: String,
    pub date: String,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

/// JSON part of the `/api/events-with-image` multipart body.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct BackendEventFields {
    pub title: String,
    pub description: String,
    pub date: String,
    pub location: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl From<&NewEvent> for BackendEventFields {
    fn from(event: &NewEvent) -> Self {
        Self {
            title: event.title.clone(),
            description: event.description.clone(),
            date: event.date.clone(),
            location: event.location.clone(),
            latitude: event.latitude,
            longitude: event.longitude,
        }
    }
}
