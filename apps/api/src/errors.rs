#![allow(dead_code)]

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::models::RecordStatus;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Please select a file first")]
    MissingFile,

    #[error("Invalid format. Please use PDF, DOC, DOCX, or TXT")]
    UnsupportedFormat(String),

    #[error("Please upload the file first")]
    NotUploadedYet,

    #[error("Missing required field: {0}")]
    RequiredFieldMissing(&'static str),

    #[error("Invalid status transition: {from} -> {to}")]
    InvalidTransition { from: RecordStatus, to: RecordStatus },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("No active session")]
    Unauthorized,

    #[error("Delivery failed: {0}")]
    DeliveryFailed(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                "INVALID_CREDENTIALS",
                self.to_string(),
            ),
            AppError::MissingFile => (StatusCode::BAD_REQUEST, "MISSING_FILE", self.to_string()),
            AppError::UnsupportedFormat(ext) => {
                tracing::debug!(extension = %ext, "rejected file format");
                (
                    StatusCode::BAD_REQUEST,
                    "UNSUPPORTED_FORMAT",
                    self.to_string(),
                )
            }
            AppError::NotUploadedYet => {
                (StatusCode::NOT_FOUND, "NOT_UPLOADED_YET", self.to_string())
            }
            AppError::RequiredFieldMissing(_) => (
                StatusCode::BAD_REQUEST,
                "REQUIRED_FIELD_MISSING",
                self.to_string(),
            ),
            AppError::InvalidTransition { .. } => (
                StatusCode::CONFLICT,
                "INVALID_TRANSITION",
                self.to_string(),
            ),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", self.to_string()),
            AppError::DeliveryFailed(msg) => {
                tracing::error!("Delivery error: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "DELIVERY_FAILED",
                    "Email delivery failed".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
