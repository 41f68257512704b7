// Handlers module - API endpoint handlers

pub mod ads;
pub mod events;
pub mod upload;

use axum::extract::Json;

/// A missing or non-JSON body is treated as an empty one, so the admin gate
/// answers 403 instead of the extractor answering 4xx. Column values are
/// raw JSON, so any JSON object decodes.
pub(crate) fn into_input<T: Default>(payload: Option<Json<T>>) -> T {
    payload.map(|Json(input)| input).unwrap_or_default()
}
