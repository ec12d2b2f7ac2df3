//! Application route configuration.

use axum::{extract::State, http::StatusCode, response::Json, routing::get, Router};
use serde::Serialize;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::user_routes;
use super::openapi::ApiDoc;
use super::AppState;

/// Create the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        // OpenAPI Swagger UI documentation
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(user_routes())
        // Global middleware
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub storage: StorageStatus,
}

/// Storage backend status
#[derive(Debug, Serialize)]
pub struct StorageStatus {
    pub backend: &'static str,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Health check endpoint; pings the database when one backs the users
async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let ping = match &state.database {
        Some(database) => database.ping().await.map_err(|e| e.to_string()),
        None => Ok(()),
    };

    let storage = match ping {
        Ok(()) => StorageStatus {
            backend: state.storage.as_str(),
            status: "healthy",
            error: None,
        },
        Err(e) => StorageStatus {
            backend: state.storage.as_str(),
            status: "unhealthy",
            error: Some(e),
        },
    };

    let healthy = storage.error.is_none();
    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" },
        storage,
    };

    let status_code = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status_code, Json(response))
}
