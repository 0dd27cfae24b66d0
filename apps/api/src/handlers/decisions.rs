use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::SubmissionRecord;
use crate::notify::Delivery;
use crate::state::AppState;
use crate::workflow::{self, Decision, OfferRequest};

#[derive(Debug, Deserialize)]
pub struct DecisionRequest {
    pub action: Decision,
}

/// POST /api/v1/records/:id/decision
pub async fn handle_decision(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(req): Json<DecisionRequest>,
) -> Result<Json<SubmissionRecord>, AppError> {
    workflow::decide(&state, id, req.action).await.map(Json)
}

/// POST /api/v1/offers
pub async fn handle_offer(
    State(state): State<AppState>,
    Json(req): Json<OfferRequest>,
) -> Result<Json<Delivery>, AppError> {
    workflow::send_offer(&state, req).await.map(Json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decision_request_parses_the_action_verbs() {
        let req: DecisionRequest = serde_json::from_str(r#"{"action":"shortlist"}"#).unwrap();
        assert_eq!(req.action, Decision::Shortlist);
        let req: DecisionRequest = serde_json::from_str(r#"{"action":"reject"}"#).unwrap();
        assert_eq!(req.action, Decision::Reject);
        assert!(serde_json::from_str::<DecisionRequest>(r#"{"action":"promote"}"#).is_err());
    }

    #[test]
    fn test_offer_request_tolerates_omitted_optionals() {
        let req: OfferRequest = serde_json::from_str(
            r#"{
                "candidate_name": "John Candidate",
                "candidate_email": "john@example.com",
                "company_name": "TechCorp Solutions"
            }"#,
        )
        .unwrap();
        assert!(req.record_id.is_none());
        assert!(req.salary.is_none());
        assert!(req.joining_date.is_none());
        assert!(req.message.is_none());
    }
}
