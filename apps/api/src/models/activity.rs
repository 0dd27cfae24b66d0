#![allow(dead_code)]

use chrono::{DateTime, Utc};
use serde::Serialize;

/// One line of the recent-activity feed ("Jane HR shortlisted resume.pdf").
/// The feed is bounded; see `store::activity`.
#[derive(Debug, Clone, Serialize)]
pub struct ActivityEntry {
    pub id: u64,
    pub actor: String,
    pub action: String,
    pub at: DateTime<Utc>,
}
