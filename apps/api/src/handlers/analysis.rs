use axum::{
    extract::{Path, State},
    http::StatusCode,
};

use crate::analysis::simulator::spawn_analysis;
use crate::errors::AppError;
use crate::state::AppState;

/// POST /api/v1/records/:id/analyze
///
/// Accepts immediately; the analysis itself runs in a background task
/// after the simulated delay. Triggering a record that is past `uploaded`
/// still returns 202, and the task then skips it quietly.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<StatusCode, AppError> {
    {
        let ats = state.ats.read().await;
        if ats.record(id).is_none() {
            return Err(AppError::NotUploadedYet);
        }
    }

    spawn_analysis(state, id);
    Ok(StatusCode::ACCEPTED)
}
