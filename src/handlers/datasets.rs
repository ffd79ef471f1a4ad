use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::geojson;
use crate::store::{self, DatasetSummary, NewDataset, StoreError};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct SaveDatasetRequest {
    pub data: Option<Value>,
    pub filename: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
}

/// POST /api/save-dataset - store a GeoJSON payload with derived metadata
pub async fn dataset_save(
    State(state): State<AppState>,
    Json(body): Json<SaveDatasetRequest>,
) -> Result<Json<Value>, ApiError> {
    let payload = body
        .data
        .ok_or_else(|| ApiError::bad_request("No data provided"))?;

    let filename = body
        .filename
        .unwrap_or_else(|| "untitled.geojson".to_string());
    let name = body
        .name
        .unwrap_or_else(|| filename.replace("geojson", ""));
    let description = body.description.unwrap_or_default();

    let summary = geojson::classify(&payload);
    let data = serde_json::to_string(&payload).map_err(StoreError::from)?;

    let id = store::datasets::insert(
        &state.pool,
        NewDataset {
            name: name.clone(),
            filename,
            data,
            geometry_types: summary.geometry_types,
            feature_count: summary.feature_count,
            bounds: None,
            description,
        },
    )
    .await?;

    Ok(Json(json!({
        "success": true,
        "id": id,
        "message": format!("Dataset {} saved successfully", name),
    })))
}

/// GET /api/get-datasets - summaries of every stored dataset, newest first
pub async fn dataset_list(
    State(state): State<AppState>,
) -> Result<Json<Vec<DatasetSummary>>, ApiError> {
    let summaries = store::datasets::list_summaries(&state.pool).await?;
    Ok(Json(summaries))
}

/// GET /api/get-dataset/:id - the raw stored payload, no wrapper object
pub async fn dataset_get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    let payload = store::datasets::get_payload(&state.pool, id).await?;
    Ok(Json(payload))
}

/// DELETE /api/remove-dataset/:id - idempotent; `deleted` reports
/// whether a row actually existed
pub async fn dataset_delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    let deleted = store::datasets::delete(&state.pool, id).await?;

    Ok(Json(json!({
        "success": true,
        "id": id,
        "deleted": deleted,
        "message": format!("Dataset {} removed successfully", id),
    })))
}
