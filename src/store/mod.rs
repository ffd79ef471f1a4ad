use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use thiserror::Error;
use tracing::info;

use crate::config::DatabaseConfig;

pub mod datasets;

pub use datasets::{DatasetSummary, NewDataset};

/// Errors from the dataset store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0}")]
    NotFound(String),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),

    #[error("invalid stored payload: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Open the shared connection pool, creating the database file if absent.
pub async fn connect(config: &DatabaseConfig) -> Result<SqlitePool, StoreError> {
    let options = SqliteConnectOptions::from_str(&config.url)?.create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await?;

    info!("Opened dataset store at {}", config.url);
    Ok(pool)
}

/// Create the datasets table if absent. Idempotent; no migration logic.
pub async fn init(pool: &SqlitePool) -> Result<(), StoreError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS datasets (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            filename TEXT NOT NULL,
            data TEXT NOT NULL,
            upload_date TEXT NOT NULL,
            user_id TEXT DEFAULT 'anonymous',
            geometry_types TEXT,
            feature_count INTEGER,
            bounds TEXT,
            description TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// Pings the store to ensure connectivity
pub async fn health(pool: &SqlitePool) -> Result<(), StoreError> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
