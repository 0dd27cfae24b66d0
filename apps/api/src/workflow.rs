#![allow(dead_code)]

// HR decision flow and offer letters. Decisions are the only way a record
// reaches a terminal state; both paths validate the transition against the
// status machine before touching the store.

use chrono::Utc;
use serde::Deserialize;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::models::{RecordPatch, RecordStatus, SubmissionRecord};
use crate::notify::templates::OfferLetter;
use crate::notify::{Delivery, EmailMessage};
use crate::state::AppState;

/// Role used wherever a record has no detected role yet.
pub const DEFAULT_ROLE: &str = "Software Developer";

/// Terminal HR call on an analyzed submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Shortlist,
    Reject,
}

impl Decision {
    pub fn target(self) -> RecordStatus {
        match self {
            Decision::Shortlist => RecordStatus::Shortlisted,
            Decision::Reject => RecordStatus::Rejected,
        }
    }
}

/// Applies an HR decision to a record. Only `analyzed` records can be
/// decided; anything else is an invalid transition. Shortlisting notifies
/// the candidate (one email, awaited); rejection sends nothing.
pub async fn decide(
    state: &AppState,
    record_id: u64,
    decision: Decision,
) -> Result<SubmissionRecord, AppError> {
    let target = decision.target();

    let (record, owner) = {
        let mut ats = state.ats.write().await;
        let current = ats
            .record(record_id)
            .ok_or_else(|| AppError::NotFound(format!("record {record_id}")))?;
        if !current.status.can_advance_to(target) {
            return Err(AppError::InvalidTransition {
                from: current.status,
                to: target,
            });
        }

        let now = Utc::now();
        let patch = RecordPatch {
            hr_action_at: Some(now),
            ..Default::default()
        };
        let updated = ats
            .update_status(record_id, target, patch, now)
            .ok_or_else(|| AppError::NotFound(format!("record {record_id}")))?;
        let owner = ats.account(updated.owner_id).cloned();
        (updated, owner)
    };

    info!(record_id, decision = ?decision, "HR decision recorded");

    if target == RecordStatus::Shortlisted {
        match owner {
            Some(owner) => {
                let role = record
                    .role
                    .clone()
                    .unwrap_or_else(|| DEFAULT_ROLE.to_string());
                let message =
                    EmailMessage::shortlist_notification(&owner.email, &owner.name, &role);
                state.mailer.send(message).await?;
            }
            None => warn!(
                record_id,
                owner_id = record.owner_id,
                "owner not in directory, skipping shortlist notification"
            ),
        }
    }

    Ok(record)
}

/// Offer letter request. Contact fields are required; salary, joining date,
/// and the notes paragraph stay optional and empty strings count as absent.
#[derive(Debug, Clone, Deserialize)]
pub struct OfferRequest {
    #[serde(default)]
    pub record_id: Option<u64>,
    pub candidate_name: String,
    pub candidate_email: String,
    pub company_name: String,
    #[serde(default)]
    pub salary: Option<String>,
    #[serde(default)]
    pub joining_date: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Renders and sends an offer letter. The role is taken from the referenced
/// record when it has one, falling back to `DEFAULT_ROLE`. Offers carry no
/// status precondition; HR can extend one at any stage.
pub async fn send_offer(state: &AppState, request: OfferRequest) -> Result<Delivery, AppError> {
    if request.candidate_name.trim().is_empty() {
        return Err(AppError::RequiredFieldMissing("candidate_name"));
    }
    if request.candidate_email.trim().is_empty() {
        return Err(AppError::RequiredFieldMissing("candidate_email"));
    }
    if request.company_name.trim().is_empty() {
        return Err(AppError::RequiredFieldMissing("company_name"));
    }

    let role = {
        let ats = state.ats.read().await;
        request
            .record_id
            .and_then(|id| ats.record(id))
            .and_then(|r| r.role.clone())
    }
    .unwrap_or_else(|| DEFAULT_ROLE.to_string());

    let offer = OfferLetter {
        candidate_name: request.candidate_name,
        candidate_email: request.candidate_email,
        role,
        company_name: request.company_name,
        salary: request.salary.filter(|s| !s.is_empty()),
        joining_date: request.joining_date.filter(|s| !s.is_empty()),
        message: request.message.filter(|s| !s.is_empty()),
    };

    info!(to = %offer.candidate_email, role = %offer.role, "sending offer letter");
    state.mailer.send(EmailMessage::offer_letter(offer)).await
}
