use axum::{
    extract::{Path, State},
    response::Html,
    Json,
};
use chrono::Utc;

use crate::errors::AppError;
use crate::models::ActivityEntry;
use crate::notify::templates::{
    HrSubmissionAlert, OfferLetter, ShortlistNotification, UploadConfirmation,
};
use crate::notify::DeliveryRecord;
use crate::state::AppState;
use crate::stats::{compute_stats, StatsReport};

/// GET /api/v1/activity
pub async fn handle_activity(State(state): State<AppState>) -> Json<Vec<ActivityEntry>> {
    let ats = state.ats.read().await;
    Json(ats.activity().iter().cloned().collect())
}

/// GET /api/v1/stats
pub async fn handle_stats(State(state): State<AppState>) -> Json<StatsReport> {
    let ats = state.ats.read().await;
    Json(compute_stats(ats.records(), ats.accounts(), Utc::now()))
}

/// GET /api/v1/outbox
pub async fn handle_outbox(State(state): State<AppState>) -> Json<Vec<DeliveryRecord>> {
    Json(state.outbox.snapshot())
}

/// GET /api/v1/templates/:kind
///
/// Renders the given template against fixed sample data, for eyeballing
/// the markup without sending anything.
pub async fn handle_template_preview(Path(kind): Path<String>) -> Result<Html<String>, AppError> {
    let html = match kind.as_str() {
        "upload" => UploadConfirmation {
            candidate_name: "John Candidate".to_string(),
            filename: "resume.pdf".to_string(),
            score: 78,
        }
        .to_string(),
        "shortlist" => ShortlistNotification {
            candidate_name: "John Candidate".to_string(),
            role: "Full Stack Developer".to_string(),
        }
        .to_string(),
        "hr" => HrSubmissionAlert {
            candidate_name: "John Candidate".to_string(),
            filename: "resume.pdf".to_string(),
            role: "Full Stack Developer".to_string(),
            score: 82,
        }
        .to_string(),
        "offer" => OfferLetter {
            candidate_name: "John Candidate".to_string(),
            candidate_email: "john@example.com".to_string(),
            role: "Senior Full Stack Developer".to_string(),
            company_name: "TechCorp Solutions".to_string(),
            salary: Some("$95,000".to_string()),
            joining_date: Some("March 1, 2026".to_string()),
            message: Some("We are excited to have you join our engineering team!".to_string()),
        }
        .to_string(),
        other => return Err(AppError::NotFound(format!("template {other}"))),
    };
    Ok(Html(html))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use tokio::sync::RwLock;

    use super::*;
    use crate::analysis::scenarios::FixedScenarioSource;
    use crate::config::Config;
    use crate::notify::{Outbox, SimulatedMailer};
    use crate::store::Ats;

    fn make_state() -> AppState {
        let outbox = Outbox::default();
        AppState {
            ats: Arc::new(RwLock::new(Ats::seeded(Utc::now()))),
            scenarios: Arc::new(FixedScenarioSource(0)),
            mailer: Arc::new(SimulatedMailer::new(outbox.clone())),
            outbox,
            config: Config::default(),
        }
    }

    #[tokio::test]
    async fn test_activity_endpoint_returns_the_seeded_feed() {
        let state = make_state();

        let Json(feed) = handle_activity(State(state)).await;

        assert_eq!(feed.len(), 2);
        assert_eq!(feed[0].actor, "John Candidate");
    }

    #[tokio::test]
    async fn test_stats_endpoint_reflects_the_seeded_directory() {
        let state = make_state();

        let Json(report) = handle_stats(State(state)).await;

        assert_eq!(report.total_candidates, 0);
        assert_eq!(report.directory.total, 3);
        assert_eq!(report.directory.online, 1);
    }

    #[tokio::test]
    async fn test_template_previews_render_sample_data() {
        for (kind, marker) in [
            ("upload", "78%"),
            ("shortlist", "You've Been Shortlisted"),
            ("hr", "New Resume Uploaded"),
            ("offer", "Senior Full Stack Developer"),
        ] {
            let Html(html) = handle_template_preview(Path(kind.to_string()))
                .await
                .unwrap_or_else(|_| panic!("{kind} preview should render"));
            assert!(html.contains(marker), "{kind} preview misses {marker}");
            assert!(html.contains("John Candidate"));
        }
    }

    #[tokio::test]
    async fn test_unknown_template_kind_is_not_found() {
        let err = handle_template_preview(Path("welcome".to_string()))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
