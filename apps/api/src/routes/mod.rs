pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{admin, analysis, auth, decisions, records};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Session
        .route("/api/v1/auth/login", post(auth::handle_login))
        .route("/api/v1/auth/logout", post(auth::handle_logout))
        .route("/api/v1/auth/session", get(auth::handle_session))
        .route("/api/v1/accounts", get(auth::handle_accounts))
        // Submissions
        .route(
            "/api/v1/records",
            post(records::handle_upload).get(records::handle_list),
        )
        .route("/api/v1/records/mine", get(records::handle_mine))
        .route("/api/v1/records/:id", get(records::handle_get))
        .route("/api/v1/records/:id/analyze", post(analysis::handle_analyze))
        .route(
            "/api/v1/records/:id/decision",
            post(decisions::handle_decision),
        )
        .route("/api/v1/offers", post(decisions::handle_offer))
        // Admin
        .route("/api/v1/activity", get(admin::handle_activity))
        .route("/api/v1/stats", get(admin::handle_stats))
        .route("/api/v1/outbox", get(admin::handle_outbox))
        .route("/api/v1/templates/:kind", get(admin::handle_template_preview))
        .with_state(state)
}
