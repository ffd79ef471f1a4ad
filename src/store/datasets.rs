use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use sqlx::{FromRow, SqlitePool};

use super::StoreError;

/// Metadata for list views; the payload itself is excluded by design
/// to keep list responses small.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct DatasetSummary {
    pub id: i64,
    pub name: String,
    pub filename: String,
    pub upload_date: DateTime<Utc>,
    pub geometry_types: String,
    pub feature_count: i64,
    pub description: String,
}

/// Row contents for a new dataset. `id` and `upload_date` are assigned
/// by the store at insert time.
#[derive(Debug)]
pub struct NewDataset {
    pub name: String,
    pub filename: String,
    /// The submitted payload, serialized verbatim
    pub data: String,
    pub geometry_types: String,
    pub feature_count: i64,
    /// Schema placeholder, never computed
    pub bounds: Option<String>,
    pub description: String,
}

/// Append a row and return its assigned id. No uniqueness constraint
/// on name or filename; duplicates are allowed.
pub async fn insert(pool: &SqlitePool, dataset: NewDataset) -> Result<i64, StoreError> {
    let result = sqlx::query(
        "INSERT INTO datasets
         (name, filename, data, upload_date, geometry_types, feature_count, bounds, description)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(dataset.name)
    .bind(dataset.filename)
    .bind(dataset.data)
    .bind(Utc::now())
    .bind(dataset.geometry_types)
    .bind(dataset.feature_count)
    .bind(dataset.bounds)
    .bind(dataset.description)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

/// All summaries, most recent upload first. Unbounded; no pagination.
/// The id tiebreak keeps ordering deterministic when two inserts land
/// on the same timestamp.
pub async fn list_summaries(pool: &SqlitePool) -> Result<Vec<DatasetSummary>, StoreError> {
    let summaries = sqlx::query_as::<_, DatasetSummary>(
        "SELECT id, name, filename, upload_date, geometry_types, feature_count, description
         FROM datasets
         ORDER BY upload_date DESC, id DESC",
    )
    .fetch_all(pool)
    .await?;

    Ok(summaries)
}

/// The stored payload, deserialized unchanged from what was submitted.
pub async fn get_payload(pool: &SqlitePool, id: i64) -> Result<Value, StoreError> {
    let row: Option<(String,)> = sqlx::query_as("SELECT data FROM datasets WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    match row {
        Some((data,)) => Ok(serde_json::from_str(&data)?),
        None => Err(StoreError::NotFound("Dataset not found".to_string())),
    }
}

/// Remove a row if present. Returns whether a row actually existed;
/// deleting a missing id is not an error.
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, StoreError> {
    let result = sqlx::query("DELETE FROM datasets WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
