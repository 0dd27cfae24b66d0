#![allow(dead_code)]

// Submission record operations. Inserting and patching keep the list
// newest-first; both log into the activity feed in the same call so the
// record change and its feed line can never be observed apart.

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use super::Ats;
use crate::models::{RecordPatch, RecordStatus, SubmissionRecord};

impl Ats {
    /// Inserts a fresh `uploaded` record at the front of the list and logs
    /// the upload. Returns the new record's id.
    pub fn add_record(&mut self, owner_id: u64, filename: &str, now: DateTime<Utc>) -> u64 {
        let id = self.next_record_id;
        self.next_record_id += 1;

        self.records.insert(
            0,
            SubmissionRecord {
                id,
                owner_id,
                filename: filename.to_string(),
                status: RecordStatus::Uploaded,
                uploaded_at: now,
                analyzed_at: None,
                hr_action_at: None,
                role: None,
                score: None,
                skill_score: None,
                experience_score: None,
                education_score: None,
                experience_level: None,
                education_level: None,
                matched_skills: None,
                missing_skills: None,
                reasoning: None,
            },
        );

        let actor = self
            .active_name()
            .unwrap_or_else(|| "Candidate".to_string());
        self.log_activity(&actor, format!("uploaded {filename}"), now);
        info!(record_id = id, owner_id, filename, "record added");

        id
    }

    /// Merges `patch` into the record and sets its status, in one step.
    /// Logs the transition and touches the acting account. Returns the
    /// updated record, or `None` (leaving everything untouched) when no
    /// record has this id.
    ///
    /// Status legality is the caller's business; see `workflow` and
    /// `analysis::simulator` for the guarded paths.
    pub fn update_status(
        &mut self,
        id: u64,
        new_status: RecordStatus,
        patch: RecordPatch,
        now: DateTime<Utc>,
    ) -> Option<SubmissionRecord> {
        let idx = match self.records.iter().position(|r| r.id == id) {
            Some(idx) => idx,
            None => {
                debug!(record_id = id, "update_status on unknown record, skipping");
                return None;
            }
        };

        let updated = {
            let record = &mut self.records[idx];
            patch.apply(record);
            record.status = new_status;
            record.clone()
        };

        let actor = self.active_name().unwrap_or_else(|| "User".to_string());
        self.log_activity(
            &actor,
            format!("{} {}", new_status, updated.filename),
            now,
        );
        if let Some(active) = self.active_id {
            self.touch(active, now);
        }
        info!(record_id = id, status = %new_status, "record status updated");

        Some(updated)
    }

    pub fn record(&self, id: u64) -> Option<&SubmissionRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// All records, newest-first.
    pub fn records(&self) -> &[SubmissionRecord] {
        &self.records
    }

    /// One owner's records, newest-first.
    pub fn records_for_owner(&self, owner_id: u64) -> Vec<SubmissionRecord> {
        self.records
            .iter()
            .filter(|r| r.owner_id == owner_id)
            .cloned()
            .collect()
    }
}
