//! Item handlers

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use super::item_to_api;
use crate::infra::http::api::error::{ApiError, ApiJson};
use crate::infra::http::api::models::{ItemCreateRequest, ItemUpdateRequest};
use crate::infra::http::api::state::ApiState;

pub async fn list_items(State(state): State<ApiState>) -> Result<impl IntoResponse, ApiError> {
    let items = state.items.list().await.map_err(item_to_api)?;

    if items.is_empty() {
        return Err(ApiError::not_found("No items found."));
    }
    Ok(Json(items))
}

pub async fn get_item(
    State(state): State<ApiState>,
    Path(item_name): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    if item_name.trim().is_empty() {
        return Err(ApiError::bad_request("Item name is required."));
    }

    let item = state.items.find(&item_name).await.map_err(item_to_api)?;

    match item {
        Some(item) => Ok(Json(item)),
        None => Err(ApiError::not_found("Item not found")),
    }
}

pub async fn create_item(
    State(state): State<ApiState>,
    ApiJson(payload): ApiJson<ItemCreateRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let item = state
        .items
        .create(payload.into())
        .await
        .map_err(item_to_api)?;

    Ok((StatusCode::CREATED, Json(item)))
}

pub async fn update_item(
    State(state): State<ApiState>,
    Path(item_name): Path<String>,
    ApiJson(payload): ApiJson<ItemUpdateRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let item = state
        .items
        .update(&item_name, payload.into())
        .await
        .map_err(item_to_api)?;

    Ok(Json(item))
}

pub async fn delete_item(
    State(state): State<ApiState>,
    Path(item_name): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .items
        .delete(&item_name)
        .await
        .map_err(item_to_api)?;

    Ok(StatusCode::NO_CONTENT)
}
