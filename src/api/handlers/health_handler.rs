//! Health check handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::Serialize;

use crate::api::AppState;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<ServiceHealth>,
}

/// Service health with optional error message.
#[derive(Debug, Serialize)]
pub struct ServiceHealth {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Create health routes.
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(health_check))
}

/// Health check endpoint - pings the database when one is wired in.
pub async fn health_check(State(state): State<AppState>) -> Response {
    let database = match &state.database {
        Some(db) => Some(match db.ping().await {
            Ok(()) => ServiceHealth {
                status: "healthy",
                error: None,
            },
            Err(e) => {
                tracing::warn!(error = %e, "Database health check failed");
                ServiceHealth {
                    status: "unhealthy",
                    error: Some(e.to_string()),
                }
            }
        }),
        None => None,
    };

    let all_healthy = database.as_ref().map_or(true, |db| db.status == "healthy");

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" },
        database,
    };

    if all_healthy {
        (StatusCode::OK, Json(response)).into_response()
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, Json(response)).into_response()
    }
}
