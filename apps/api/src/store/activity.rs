#![allow(dead_code)]

// Bounded activity feed. Newest entries sit at the front; once the feed
// holds `ACTIVITY_CAP` entries the oldest fall off the back.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};

use super::Ats;
use crate::models::ActivityEntry;

/// Maximum number of feed entries retained.
pub const ACTIVITY_CAP: usize = 50;

impl Ats {
    pub(crate) fn log_activity(&mut self, actor: &str, action: String, now: DateTime<Utc>) {
        let id = self.next_activity_id;
        self.next_activity_id += 1;

        self.activity.push_front(ActivityEntry {
            id,
            actor: actor.to_string(),
            action,
            at: now,
        });
        self.activity.truncate(ACTIVITY_CAP);
    }

    /// The feed, newest-first.
    pub fn activity(&self) -> &VecDeque<ActivityEntry> {
        &self.activity
    }
}
