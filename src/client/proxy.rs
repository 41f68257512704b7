// Proxy client
// Wraps the proxy server's own REST surface

use reqwest::multipart::Form;
use reqwest::{Client, RequestBuilder};
use serde_json::{json, Value};

use super::envelope::error_message;
use super::image::ImageFile;
use super::{endpoint, send_json, DEFAULT_TIMEOUT_SECS};
use crate::error::{ClientError, ClientResult};
use crate::models::{AdInput, EventInput, UploadedImage};

pub struct ProxyClient {
    http_client: Client,
    base_url: String,
    user_id: Option<i64>,
}

impl ProxyClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, crate::utils::http::create_client(DEFAULT_TIMEOUT_SECS))
    }

    pub fn with_client(base_url: impl Into<String>, http_client: Client) -> Self {
        Self {
            http_client,
            base_url: base_url.into(),
            user_id: None,
        }
    }

    /// Identity sent as `userId` on writes
    pub fn with_user_id(mut self, user_id: i64) -> Self {
        self.user_id = Some(user_id);
        self
    }

    pub async fn list_events(&self) -> ClientResult<Value> {
        let url = endpoint(&self.base_url, &["events"])?;
        self.execute("list events", self.http_client.get(url)).await
    }

    pub async fn list_ads(&self) -> ClientResult<Value> {
        let url = endpoint(&self.base_url, &["ads"])?;
        self.execute("list ads", self.http_client.get(url)).await
    }

    pub async fn create_event(&self, event: &EventInput) -> ClientResult<Value> {
        let url = endpoint(&self.base_url, &["events"])?;
        let body = self.sign(event.clone(), |e, id| e.user_id = id);
        self.execute("create event", self.http_client.post(url).json(&body))
            .await
    }

    pub async fn create_ad(&self, ad: &AdInput) -> ClientResult<Value> {
        let url = endpoint(&self.base_url, &["ads"])?;
        let body = self.sign(ad.clone(), |a, id| a.user_id = id);
        self.execute("create ad", self.http_client.post(url).json(&body))
            .await
    }

    pub async fn edit_event(&self, record_id: &str, changes: &EventInput) -> ClientResult<Value> {
        let url = endpoint(&self.base_url, &["events", record_id])?;
        let body = self.sign(changes.clone(), |e, id| e.user_id = id);
        self.execute("edit event", self.http_client.patch(url).json(&body))
            .await
    }

    pub async fn delete_event(&self, record_id: &str) -> ClientResult<Value> {
        let url = endpoint(&self.base_url, &["events", record_id])?;
        let body = json!({ "userId": self.user_id });
        self.execute("delete event", self.http_client.delete(url).json(&body))
            .await
    }

    /// POST /upload, returns the hosted URL
    pub async fn upload_image(&self, image: ImageFile) -> ClientResult<String> {
        let url = endpoint(&self.base_url, &["upload"])?;
        let form = Form::new().part("image", image.into_part()?);
        let body = self
            .execute("upload image", self.http_client.post(url).multipart(form))
            .await?;

        let uploaded: UploadedImage = serde_json::from_value(body)?;
        Ok(uploaded.url)
    }

    /// Overwrite the payload's `userId` with this client's identity, if any
    fn sign<T>(&self, mut payload: T, set: impl FnOnce(&mut T, Option<Value>)) -> T {
        if let Some(id) = self.user_id {
            set(&mut payload, Some(json!(id)));
        }
        payload
    }

    /// Non-2xx answers carry `{"error": message}`
    async fn execute(&self, action: &str, request: RequestBuilder) -> ClientResult<Value> {
        let (status, body) = send_json(request)
            .await
            .inspect_err(|e| tracing::error!("Failed to {}: {}", action, e))?;

        if !status.is_success() {
            let message = error_message(&body);
            tracing::error!("Failed to {}: {} {}", action, status, message);
            return Err(ClientError::Envelope(message));
        }
        Ok(body)
    }
}
