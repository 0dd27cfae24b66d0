#![allow(dead_code)]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle of a submission. The only legal walk is
/// uploaded -> analyzed -> (shortlisted | rejected); both HR outcomes are
/// terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordStatus {
    Uploaded,
    Analyzed,
    Shortlisted,
    Rejected,
}

impl RecordStatus {
    /// Whether moving from `self` to `next` is a legal forward step.
    pub fn can_advance_to(self, next: RecordStatus) -> bool {
        matches!(
            (self, next),
            (RecordStatus::Uploaded, RecordStatus::Analyzed)
                | (RecordStatus::Analyzed, RecordStatus::Shortlisted)
                | (RecordStatus::Analyzed, RecordStatus::Rejected)
        )
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, RecordStatus::Shortlisted | RecordStatus::Rejected)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RecordStatus::Uploaded => "uploaded",
            RecordStatus::Analyzed => "analyzed",
            RecordStatus::Shortlisted => "shortlisted",
            RecordStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A candidate submission. Analysis fields are `None` until the simulator
/// fills them in; `hr_action_at` is set by the terminal HR decision.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionRecord {
    pub id: u64,
    pub owner_id: u64,
    pub filename: String,
    pub status: RecordStatus,
    pub uploaded_at: DateTime<Utc>,
    pub analyzed_at: Option<DateTime<Utc>>,
    pub hr_action_at: Option<DateTime<Utc>>,
    pub role: Option<String>,
    pub score: Option<u32>,
    pub skill_score: Option<u32>,
    pub experience_score: Option<u32>,
    pub education_score: Option<u32>,
    pub experience_level: Option<String>,
    pub education_level: Option<String>,
    pub matched_skills: Option<Vec<String>>,
    pub missing_skills: Option<Vec<String>>,
    pub reasoning: Option<Vec<String>>,
}

impl SubmissionRecord {
    /// Human-readable candidate label derived from the filename: extension
    /// stripped, underscores turned into spaces. Used to prefill offer
    /// letters when no nicer name is at hand.
    pub fn display_name(&self) -> String {
        let stem = match self.filename.rsplit_once('.') {
            Some((stem, _ext)) => stem,
            None => self.filename.as_str(),
        };
        stem.replace('_', " ")
    }
}

/// Partial update merged into a record by `Ats::update_status`. `None`
/// fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct RecordPatch {
    pub role: Option<String>,
    pub score: Option<u32>,
    pub skill_score: Option<u32>,
    pub experience_score: Option<u32>,
    pub education_score: Option<u32>,
    pub experience_level: Option<String>,
    pub education_level: Option<String>,
    pub matched_skills: Option<Vec<String>>,
    pub missing_skills: Option<Vec<String>>,
    pub reasoning: Option<Vec<String>>,
    pub analyzed_at: Option<DateTime<Utc>>,
    pub hr_action_at: Option<DateTime<Utc>>,
}

impl RecordPatch {
    pub fn apply(self, record: &mut SubmissionRecord) {
        if let Some(role) = self.role {
            record.role = Some(role);
        }
        if let Some(score) = self.score {
            record.score = Some(score);
        }
        if let Some(skill) = self.skill_score {
            record.skill_score = Some(skill);
        }
        if let Some(experience) = self.experience_score {
            record.experience_score = Some(experience);
        }
        if let Some(education) = self.education_score {
            record.education_score = Some(education);
        }
        if let Some(level) = self.experience_level {
            record.experience_level = Some(level);
        }
        if let Some(level) = self.education_level {
            record.education_level = Some(level);
        }
        if let Some(skills) = self.matched_skills {
            record.matched_skills = Some(skills);
        }
        if let Some(skills) = self.missing_skills {
            record.missing_skills = Some(skills);
        }
        if let Some(reasoning) = self.reasoning {
            record.reasoning = Some(reasoning);
        }
        if let Some(at) = self.analyzed_at {
            record.analyzed_at = Some(at);
        }
        if let Some(at) = self.hr_action_at {
            record.hr_action_at = Some(at);
        }
    }
}
