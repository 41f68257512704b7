// Events Handler
use axum::extract::{Json, Path, State};
use serde_json::Value;

use crate::error::AppResult;
use crate::models::EventInput;
use crate::proxy::common::utils::generate_record_id;
use crate::proxy::mappers::{map_event_create, map_event_patch};
use crate::proxy::middleware::ensure_admin;
use crate::proxy::server::AppState;
use crate::proxy::upstream::Table;

/// GET /events
pub async fn handle_list_events(State(state): State<AppState>) -> AppResult<Json<Value>> {
    let body = state.store.list_records(Table::Events).await?;
    Ok(Json(body))
}

/// POST /events
pub async fn handle_create_event(
    State(state): State<AppState>,
    payload: Option<Json<EventInput>>,
) -> AppResult<Json<Value>> {
    let input = super::into_input(payload);
    ensure_admin(input.user_id.as_ref(), state.config.admin_id)?;

    let record_id = generate_record_id();
    tracing::info!("Creating event {} ({:?})", record_id, input.title);

    let fields = map_event_create(input, record_id);
    let body = state.store.create_record(Table::Events, fields).await?;
    Ok(Json(body))
}

/// PATCH /events/:id
pub async fn handle_edit_event(
    State(state): State<AppState>,
    Path(record_id): Path<String>,
    payload: Option<Json<EventInput>>,
) -> AppResult<Json<Value>> {
    let input = super::into_input(payload);
    ensure_admin(input.user_id.as_ref(), state.config.admin_id)?;

    tracing::info!("Editing event {}", record_id);
    let body = state
        .store
        .update_record(Table::Events, &record_id, map_event_patch(input))
        .await?;
    Ok(Json(body))
}

/// DELETE /events/:id
pub async fn handle_delete_event(
    State(state): State<AppState>,
    Path(record_id): Path<String>,
    payload: Option<Json<EventInput>>,
) -> AppResult<Json<Value>> {
    let input = super::into_input(payload);
    ensure_admin(input.user_id.as_ref(), state.config.admin_id)?;

    tracing::info!("Deleting event {}", record_id);
    let body = state.store.delete_record(Table::Events, &record_id).await?;
    Ok(Json(body))
}
