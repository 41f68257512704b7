// Upload Handler
use axum::extract::{multipart::MultipartRejection, Json, Multipart, State};

use crate::error::{AppError, AppResult};
use crate::models::UploadedImage;
use crate::proxy::server::AppState;

/// Multipart field carrying the file
pub const IMAGE_FIELD: &str = "image";

/// POST /upload
pub async fn handle_upload(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> AppResult<Json<UploadedImage>> {
    let mut multipart = multipart.map_err(|e| {
        tracing::warn!("Upload rejected, body is not multipart: {}", e);
        AppError::MissingFile
    })?;

    let mut image = None;
    while let Some(field) = multipart.next_field().await.map_err(|e| {
        tracing::warn!("Upload rejected, malformed multipart body: {}", e);
        AppError::MissingFile
    })? {
        // Text fields named `image` are not files
        if field.name() != Some(IMAGE_FIELD) || field.file_name().is_none() {
            continue;
        }

        let file_name = field.file_name().unwrap_or_default().to_string();
        let bytes = field.bytes().await.map_err(|e| {
            tracing::warn!("Failed to read uploaded file {}: {}", file_name, e);
            AppError::MissingFile
        })?;
        tracing::info!("Received upload {} ({} bytes)", file_name, bytes.len());
        image = Some(bytes);
        break;
    }

    let image = image.ok_or(AppError::MissingFile)?;
    let url = state.image_host.upload(&image).await?;
    Ok(Json(UploadedImage { url }))
}
