// Backend client
// Image-bearing endpoints answer with `{success, event|ad|imageUrl, error}`;
// the plain CRUD endpoints answer with the created object as-is.

use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

use super::envelope::Envelope;
use super::image::ImageFile;
use super::{endpoint, send_json, DEFAULT_TIMEOUT_SECS};
use crate::error::{ClientError, ClientResult};
use crate::models::{BackendAdFields, BackendEventFields, NewAd, NewEvent, VotingOptionImage};

/// Multipart part holding the JSON-encoded record
pub const DATA_PART: &str = "data";
/// Multipart part holding the image file
pub const IMAGE_PART: &str = "image";
/// Multipart part holding the voting option index
pub const OPTION_INDEX_PART: &str = "optionIndex";

pub struct BackendClient {
    http_client: Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, crate::utils::http::create_client(DEFAULT_TIMEOUT_SECS))
    }

    pub fn with_client(base_url: impl Into<String>, http_client: Client) -> Self {
        Self {
            http_client,
            base_url: base_url.into(),
        }
    }

    /// POST /api/events-with-image, returns the created `event`
    pub async fn create_event_with_image(
        &self,
        event: &NewEvent,
        image: Option<ImageFile>,
    ) -> ClientResult<Value> {
        let form = record_form(&BackendEventFields::from(event), image)?;
        self.post_form(&["api", "events-with-image"], form)
            .await
            .and_then(|envelope| envelope.into_payload("event"))
            .inspect_err(|e| tracing::error!("Failed to create event with image: {}", e))
    }

    /// POST /api/ads-with-image, returns the created `ad`
    pub async fn create_ad_with_image(
        &self,
        ad: &NewAd,
        image: Option<ImageFile>,
    ) -> ClientResult<Value> {
        let form = record_form(&BackendAdFields::from(ad), image)?;
        self.post_form(&["api", "ads-with-image"], form)
            .await
            .and_then(|envelope| envelope.into_payload("ad"))
            .inspect_err(|e| tracing::error!("Failed to create ad with image: {}", e))
    }

    /// POST /api/votings/{voting_id}/upload-option-image
    pub async fn upload_voting_option_image(
        &self,
        voting_id: &str,
        option_index: u32,
        image: ImageFile,
    ) -> ClientResult<VotingOptionImage> {
        let result: ClientResult<VotingOptionImage> = async {
            let form = Form::new()
                .part(IMAGE_PART, image.into_part()?)
                .text(OPTION_INDEX_PART, option_index.to_string());
            let payload = self
                .post_form(&["api", "votings", voting_id, "upload-option-image"], form)
                .await?
                .into_payload("imageUrl")?;

            match payload {
                Value::String(image_url) => Ok(VotingOptionImage {
                    voting_id: voting_id.to_string(),
                    option_index,
                    image_url,
                }),
                other => Err(ClientError::Envelope(format!(
                    "Unexpected imageUrl in response: {}",
                    other
                ))),
            }
        }
        .await;

        result.inspect_err(|e| {
            tracing::error!(
                "Failed to upload image for voting {} option {}: {}",
                voting_id,
                option_index,
                e
            )
        })
    }

    /// GET /api/test-upload, raw body
    pub async fn test_backend(&self) -> ClientResult<Value> {
        let result: ClientResult<Value> = async {
            let url = endpoint(&self.base_url, &["api", "test-upload"])?;
            let (_, body) = send_json(self.http_client.get(url)).await?;
            Ok(body)
        }
        .await;

        result.inspect_err(|e| tracing::error!("Backend probe failed: {}", e))
    }

    /// POST /api/events, raw body
    pub async fn create_event(&self, event: &NewEvent) -> ClientResult<Value> {
        self.post_json(&["api", "events"], event)
            .await
            .inspect_err(|e| tracing::error!("Failed to create event: {}", e))
    }

    /// POST /api/ads, raw body
    pub async fn create_ad(&self, ad: &NewAd) -> ClientResult<Value> {
        self.post_json(&["api", "ads"], ad)
            .await
            .inspect_err(|e| tracing::error!("Failed to create ad: {}", e))
    }

    /// POST /api/votings, raw body
    pub async fn create_voting(&self, voting: &Value) -> ClientResult<Value> {
        self.post_json(&["api", "votings"], voting)
            .await
            .inspect_err(|e| tracing::error!("Failed to create voting: {}", e))
    }

    async fn post_form(&self, segments: &[&str], form: Form) -> ClientResult<Envelope> {
        let url = endpoint(&self.base_url, segments)?;
        let (_, body) = send_json(self.http_client.post(url).multipart(form)).await?;
        Ok(Envelope::from_value(body))
    }

    /// Plain JSON calls hand back the body verbatim, even a `success: false`
    /// one; the failure is only logged.
    async fn post_json<T: Serialize + ?Sized>(
        &self,
        segments: &[&str],
        payload: &T,
    ) -> ClientResult<Value> {
        let url = endpoint(&self.base_url, segments)?;
        let (status, body) = send_json(self.http_client.post(url).json(payload)).await?;

        let envelope = Envelope::from_value(body);
        if let Envelope::Failure { message, .. } = &envelope {
            tracing::warn!(
                "POST /{} reported failure ({}): {}",
                segments.join("/"),
                status,
                message
            );
        }
        Ok(envelope.into_body())
    }
}

/// `data` part with the JSON record, plus `image` when a file is given
fn record_form<T: Serialize>(fields: &T, image: Option<ImageFile>) -> ClientResult<Form> {
    let data = serde_json::to_string(fields)?;
    let mut form = Form::new().part(DATA_PART, Part::text(data));
    if let Some(image) = image {
        form = form.part(IMAGE_PART, image.into_part()?);
    }
    Ok(form)
}
