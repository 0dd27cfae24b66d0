#![allow(dead_code)]

// The delayed analysis task. Triggering analysis schedules a background
// task that waits out the fixed delay, re-checks that the record is still
// awaiting analysis, applies one drawn scenario, and sends the two result
// emails. The re-check under the write lock makes double triggers collapse
// into a single outcome.

use std::time::Duration;

use chrono::Utc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::models::RecordStatus;
use crate::notify::EmailMessage;
use crate::state::AppState;

/// Simulated thinking time of the analysis engine.
pub const ANALYSIS_DELAY: Duration = Duration::from_secs(2);

/// Kicks off the delayed analysis of `record_id`. The returned handle
/// resolves once the record is patched and both notifications are sent.
pub fn spawn_analysis(state: AppState, record_id: u64) -> JoinHandle<()> {
    tokio::spawn(run_analysis(state, record_id))
}

async fn run_analysis(state: AppState, record_id: u64) {
    tokio::time::sleep(ANALYSIS_DELAY).await;

    let outcome = state.scenarios.pick();
    let role = outcome.role.clone();
    let score = outcome.score;

    // Guard and apply under one write lock so a record analyzed or decided
    // in the meantime is left alone.
    let (record, owner) = {
        let mut ats = state.ats.write().await;
        match ats.record(record_id) {
            Some(r) if r.status == RecordStatus::Uploaded => {}
            Some(r) => {
                debug!(
                    record_id,
                    status = %r.status,
                    "record no longer awaiting analysis, skipping"
                );
                return;
            }
            None => {
                debug!(record_id, "record gone before analysis, skipping");
                return;
            }
        }

        let now = Utc::now();
        let updated =
            match ats.update_status(record_id, RecordStatus::Analyzed, outcome.into_patch(now), now)
            {
                Some(updated) => updated,
                None => return,
            };
        let owner = ats.account(updated.owner_id).cloned();
        (updated, owner)
    };

    info!(record_id, role = %role, score, "analysis complete");

    let owner = match owner {
        Some(owner) => owner,
        None => {
            warn!(
                record_id,
                owner_id = record.owner_id,
                "owner not in directory, skipping notifications"
            );
            return;
        }
    };

    let confirmation =
        EmailMessage::upload_confirmation(&owner.email, &owner.name, &record.filename, score);
    let alert = EmailMessage::hr_notification(
        &state.config.hr_email,
        &owner.name,
        &record.filename,
        &role,
        score,
    );
    for message in [confirmation, alert] {
        if let Err(e) = state.mailer.send(message).await {
            warn!(record_id, "notification send failed: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use tokio::sync::RwLock;

    use super::*;
    use crate::analysis::scenarios::FixedScenarioSource;
    use crate::config::Config;
    use crate::notify::{EmailKind, Outbox, SimulatedMailer};
    use crate::store::Ats;

    fn make_state(scenario: usize) -> AppState {
        let outbox = Outbox::default();
        AppState {
            ats: Arc::new(RwLock::new(Ats::seeded(Utc::now()))),
            scenarios: Arc::new(FixedScenarioSource(scenario)),
            mailer: Arc::new(SimulatedMailer::new(outbox.clone())),
            outbox,
            config: Config::default(),
        }
    }

    async fn upload(state: &AppState, owner_id: u64, filename: &str) -> u64 {
        let mut ats = state.ats.write().await;
        ats.add_record(owner_id, filename, Utc::now())
    }

    #[tokio::test(start_paused = true)]
    async fn test_analysis_applies_scenario_and_notifies_both_parties() {
        // Scenario 2 is the senior full-stack profile.
        let state = make_state(2);
        let id = upload(&state, 1, "resume.pdf").await;

        spawn_analysis(state.clone(), id).await.unwrap();

        let ats = state.ats.read().await;
        let record = ats.record(id).unwrap();
        assert_eq!(record.status, RecordStatus::Analyzed);
        assert_eq!(record.role.as_deref(), Some("Full Stack Developer"));
        assert_eq!(record.score, Some(82));
        assert_eq!(record.skill_score, Some(88));
        assert_eq!(record.experience_level.as_deref(), Some("senior"));
        assert_eq!(record.education_level.as_deref(), Some("bachelors"));
        assert_eq!(
            record.missing_skills,
            Some(vec!["Kubernetes".to_string()])
        );
        assert!(record.analyzed_at.is_some());
        assert_eq!(
            ats.activity().front().unwrap().action,
            "analyzed resume.pdf"
        );

        let sent = state.outbox.snapshot();
        assert_eq!(sent.len(), 2, "candidate confirmation plus HR alert");
        assert_eq!(sent[0].kind, EmailKind::UploadConfirmation);
        assert_eq!(sent[0].to, "candidate@example.com");
        assert_eq!(sent[1].kind, EmailKind::HrNotification);
        assert_eq!(sent[1].to, "hr@example.com");
        assert_eq!(
            sent[1].subject,
            "New Resume: John Candidate - Full Stack Developer (Score: 82%)"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_trigger_leaves_the_first_outcome_alone() {
        let state = make_state(2);
        let id = upload(&state, 1, "resume.pdf").await;

        spawn_analysis(state.clone(), id).await.unwrap();
        let first = {
            let ats = state.ats.read().await;
            ats.record(id).unwrap().clone()
        };
        let feed_len = state.ats.read().await.activity().len();

        spawn_analysis(state.clone(), id).await.unwrap();

        let ats = state.ats.read().await;
        let record = ats.record(id).unwrap();
        assert_eq!(record.status, RecordStatus::Analyzed);
        assert_eq!(record.analyzed_at, first.analyzed_at, "no re-analysis");
        assert_eq!(state.outbox.len(), 2, "no extra notifications");
        assert_eq!(ats.activity().len(), feed_len);
    }

    #[tokio::test(start_paused = true)]
    async fn test_analysis_of_unknown_record_is_a_silent_skip() {
        let state = make_state(0);

        spawn_analysis(state.clone(), 999).await.unwrap();

        assert!(state.outbox.is_empty());
        assert!(state.ats.read().await.records().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_missing_owner_suppresses_notifications_but_not_analysis() {
        let state = make_state(1);
        let id = upload(&state, 42, "ghost.pdf").await;

        spawn_analysis(state.clone(), id).await.unwrap();

        let ats = state.ats.read().await;
        assert_eq!(ats.record(id).unwrap().status, RecordStatus::Analyzed);
        assert!(state.outbox.is_empty(), "nobody to notify");
    }
}
