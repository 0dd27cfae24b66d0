#![allow(dead_code)]

// Relative-time formatting and presence classification for the directory
// views. Pure functions over an explicit `now` so thresholds are testable.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Presence bucket derived from an account's last action:
/// within 3 minutes is online, within 30 is idle, anything older (or no
/// recorded action at all) is offline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Presence {
    Online,
    Idle,
    Offline,
}

impl Presence {
    pub fn as_str(self) -> &'static str {
        match self {
            Presence::Online => "online",
            Presence::Idle => "idle",
            Presence::Offline => "offline",
        }
    }
}

/// Coarse "how long ago" label: under a minute is "Just now", then whole
/// minutes, whole hours, whole days. A missing timestamp reads "Never".
pub fn time_ago(ts: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    let ts = match ts {
        Some(ts) => ts,
        None => return "Never".to_string(),
    };

    let elapsed = now.signed_duration_since(ts);
    if elapsed.num_seconds() < 60 {
        return "Just now".to_string();
    }
    let minutes = elapsed.num_minutes();
    if minutes < 60 {
        return format!("{minutes}m ago");
    }
    let hours = elapsed.num_hours();
    if hours < 24 {
        return format!("{hours}h ago");
    }
    format!("{}d ago", elapsed.num_days())
}

pub fn presence(last_action: Option<DateTime<Utc>>, now: DateTime<Utc>) -> Presence {
    let last_action = match last_action {
        Some(at) => at,
        None => return Presence::Offline,
    };

    let elapsed = now.signed_duration_since(last_action).num_seconds();
    if elapsed <= 3 * 60 {
        Presence::Online
    } else if elapsed <= 30 * 60 {
        Presence::Idle
    } else {
        Presence::Offline
    }
}
