//! Error types for GearGuard server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application error codes reported in error payloads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    Success = 0,
    Failure = 1,
    MissingField = 2,
    InvalidEquipment = 3,
    InvalidStage = 4,
    InvalidDuration = 5,
    NotFound = 6,
    StorageUnavailable = 7,
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing field: {0}")]
    MissingField(String),

    #[error("Invalid equipment: {0}")]
    InvalidEquipment(String),

    #[error("Invalid stage: {0}")]
    InvalidStage(String),

    #[error("Invalid duration: {0}")]
    InvalidDuration(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub code: u32,
    pub error: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::MissingField(msg) => {
                (StatusCode::BAD_REQUEST, ErrorCode::MissingField, msg.clone())
            }
            AppError::InvalidEquipment(msg) => {
                (StatusCode::BAD_REQUEST, ErrorCode::InvalidEquipment, msg.clone())
            }
            AppError::InvalidStage(msg) => {
                (StatusCode::BAD_REQUEST, ErrorCode::InvalidStage, msg.clone())
            }
            AppError::InvalidDuration(msg) => {
                (StatusCode::BAD_REQUEST, ErrorCode::InvalidDuration, msg.clone())
            }
            AppError::NotFound(msg) => {
                (StatusCode::NOT_FOUND, ErrorCode::NotFound, msg.clone())
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::StorageUnavailable,
                    "Storage unavailable".to_string(),
                )
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::Failure,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            code: code as u32,
            error: format!("{:?}", code),
            message,
        });

        (status, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_faults_map_to_bad_request() {
        for err in [
            AppError::MissingField("subject is required".into()),
            AppError::InvalidEquipment("Invalid or scrapped equipment".into()),
            AppError::InvalidStage("bogus".into()),
            AppError::InvalidDuration("duration_hours must be a positive number".into()),
        ] {
            assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn storage_faults_map_to_server_error() {
        let err = AppError::Database(sqlx::Error::PoolClosed);
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn missing_record_maps_to_not_found() {
        let err = AppError::NotFound("Equipment 42 not found".into());
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }
}
