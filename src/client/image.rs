use std::path::Path;

use bytes::Bytes;
use chrono::{DateTime, Utc};
use reqwest::multipart::Part;

use crate::error::ClientResult;

pub const DEFAULT_MIME_TYPE: &str = "image/jpeg";

/// An image to attach to a multipart request.
#[derive(Debug, Clone)]
pub struct ImageFile {
    pub bytes: Bytes,
    pub file_name: Option<String>,
    pub mime_type: Option<String>,
}

impl ImageFile {
    pub fn new(bytes: impl Into<Bytes>) -> Self {
        Self {
            bytes: bytes.into(),
            file_name: None,
            mime_type: None,
        }
    }

    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    /// Read an image from disk. The file name is kept and the MIME type is
    /// guessed from the extension.
    pub async fn from_path(path: impl AsRef<Path>) -> ClientResult<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;

        let mut image = Self::new(bytes);
        image.file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .map(str::to_string);
        image.mime_type = path
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(mime_for_extension)
            .map(str::to_string);
        Ok(image)
    }

    /// Multipart part with JPEG / timestamped-name defaults filled in
    pub(crate) fn into_part(self) -> ClientResult<Part> {
        let file_name = self
            .file_name
            .unwrap_or_else(|| default_file_name(Utc::now()));
        let mime_type = self
            .mime_type
            .unwrap_or_else(|| DEFAULT_MIME_TYPE.to_string());

        let part = Part::bytes(self.bytes.to_vec())
            .file_name(file_name)
            .mime_str(&mime_type)?;
        Ok(part)
    }
}

pub(crate) fn default_file_name(now: DateTime<Utc>) -> String {
    format!("image_{}.jpg", now.timestamp_millis())
}

fn mime_for_extension(ext: &str) -> Option<&'static str> {
    match ext.to_ascii_lowercase().as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "heic" => Some("image/heic"),
        _ => None,
    }
}
