// Ads Handler
use axum::extract::{Json, State};
use serde_json::Value;

use crate::error::AppResult;
use crate::models::AdInput;
use crate::proxy::common::utils::generate_record_id;
use crate::proxy::mappers::map_ad_create;
use crate::proxy::middleware::ensure_admin;
use crate::proxy::server::AppState;
use crate::proxy::upstream::Table;

/// GET /ads
pub async fn handle_list_ads(State(state): State<AppState>) -> AppResult<Json<Value>> {
    let body = state.store.list_records(Table::Ads).await?;
    Ok(Json(body))
}

/// POST /ads
pub async fn handle_create_ad(
    State(state): State<AppState>,
    payload: Option<Json<AdInput>>,
) -> AppResult<Json<Value>> {
    let input = super::into_input(payload);
    ensure_admin(input.user_id.as_ref(), state.config.admin_id)?;

    let record_id = generate_record_id();
    tracing::info!("Creating ad {} ({:?})", record_id, input.title);

    let body = state
        .store
        .create_record(Table::Ads, map_ad_create(input, record_id))
        .await?;
    Ok(Json(body))
}
