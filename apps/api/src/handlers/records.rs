use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::SubmissionRecord;
use crate::state::AppState;

/// File extensions the intake accepts, compared case-insensitively.
pub const ALLOWED_FORMATS: [&str; 4] = ["pdf", "doc", "docx", "txt"];

#[derive(Debug, Deserialize)]
pub struct UploadRequest {
    pub filename: String,
}

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub id: u64,
}

/// Checks an upload's filename: non-empty, and the part after the last dot
/// must be one of the allowed formats.
pub fn validate_filename(filename: &str) -> Result<(), AppError> {
    if filename.trim().is_empty() {
        return Err(AppError::MissingFile);
    }
    // A dotless name is its own "extension" and so only passes if the whole
    // name happens to be a known format.
    let ext = filename.rsplit('.').next().unwrap_or("").to_lowercase();
    if !ALLOWED_FORMATS.contains(&ext.as_str()) {
        return Err(AppError::UnsupportedFormat(ext));
    }
    Ok(())
}

/// POST /api/v1/records
pub async fn handle_upload(
    State(state): State<AppState>,
    Json(req): Json<UploadRequest>,
) -> Result<(StatusCode, Json<UploadResponse>), AppError> {
    validate_filename(&req.filename)?;

    let mut ats = state.ats.write().await;
    let owner_id = ats.active().ok_or(AppError::Unauthorized)?.id;
    let id = ats.add_record(owner_id, &req.filename, Utc::now());

    Ok((StatusCode::CREATED, Json(UploadResponse { id })))
}

/// GET /api/v1/records
pub async fn handle_list(State(state): State<AppState>) -> Json<Vec<SubmissionRecord>> {
    let ats = state.ats.read().await;
    Json(ats.records().to_vec())
}

/// GET /api/v1/records/:id
pub async fn handle_get(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<SubmissionRecord>, AppError> {
    let ats = state.ats.read().await;
    ats.record(id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("record {id}")))
}

/// GET /api/v1/records/mine
pub async fn handle_mine(
    State(state): State<AppState>,
) -> Result<Json<Vec<SubmissionRecord>>, AppError> {
    let ats = state.ats.read().await;
    let owner_id = ats.active().ok_or(AppError::Unauthorized)?.id;
    Ok(Json(ats.records_for_owner(owner_id)))
}
