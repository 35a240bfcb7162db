//! Centralized error handling.
//!
//! Provides a unified error type for the entire application,
//! with automatic HTTP response conversion.
//!
//! Clients only ever see two outcomes: `404` for an unknown user on update
//! and a generic `500` for everything else. The underlying cause is logged.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use crate::config::{INTERNAL_ERROR_MESSAGE, USER_NOT_FOUND_MESSAGE};

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Any failure below the repository abstraction
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// An update targeted an id that matches no record
    #[error("Resource not found")]
    NotFound,

    /// Request body could not be read as JSON of the expected shape
    #[error("Invalid request body: {0}")]
    Payload(#[from] JsonRejection),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "Internal server error")]
    pub error: String,
}

impl AppError {
    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> &'static str {
        match self {
            AppError::NotFound => USER_NOT_FOUND_MESSAGE,
            _ => INTERNAL_ERROR_MESSAGE,
        }
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let body = ErrorResponse {
            error: self.user_message().to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self) -> AppResult<T> {
        self.ok_or(AppError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::DbErr;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_not_found_maps_to_404() {
        let response = AppError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "error": "User not found" })
        );
    }

    #[tokio::test]
    async fn test_database_error_hides_details() {
        let err = AppError::from(DbErr::Custom("duplicate key value on users_email_key".into()));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body, serde_json::json!({ "error": "Internal server error" }));
    }

    #[tokio::test]
    async fn test_internal_error_is_500() {
        let response = AppError::internal("bind failed").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_option_ext() {
        assert_eq!(Some(7).ok_or_not_found().unwrap(), 7);
        assert!(matches!(None::<i32>.ok_or_not_found(), Err(AppError::NotFound)));
    }
}
