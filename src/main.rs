use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use sqlx::SqlitePool;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

mod config;
mod error;
mod geojson;
mod handlers;
mod store;

/// Shared per-process state; the pool is the scoped-acquisition layer
/// around the single SQLite file.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
}

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up WEBGIS_DATABASE_URL etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = config::AppConfig::from_env();

    let pool = store::connect(&config.database)
        .await
        .unwrap_or_else(|e| panic!("failed to open dataset store {}: {}", config.database.url, e));
    store::init(&pool)
        .await
        .expect("failed to initialize datasets table");

    let app = app(AppState { pool });

    let bind_addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    tracing::info!("webgis-api listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}

fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        // Dataset API
        .route("/api/save-dataset", post(handlers::dataset_save))
        .route("/api/get-datasets", get(handlers::dataset_list))
        .route("/api/get-dataset/:id", get(handlers::dataset_get))
        .route("/api/remove-dataset/:id", delete(handlers::dataset_delete))
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "name": "WebGIS Dataset API",
        "version": version,
        "description": "Stores and retrieves GeoJSON datasets",
        "endpoints": {
            "save": "POST /api/save-dataset",
            "list": "GET /api/get-datasets",
            "get": "GET /api/get-dataset/:id",
            "remove": "DELETE /api/remove-dataset/:id",
            "health": "GET /health",
        }
    }))
}

async fn health(State(state): State<AppState>) -> impl axum::response::IntoResponse {
    let now = chrono::Utc::now();

    match store::health(&state.pool).await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "timestamp": now,
                "database": "ok"
            })),
        ),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "degraded",
                "timestamp": now,
                "database_error": e.to_string()
            })),
        ),
    }
}
