// In-memory application state: the demo account directory, submission
// records, and the bounded activity feed. All mutation goes through the
// operations defined in this module tree; handlers take the whole struct
// behind one RwLock so every read-modify-write is atomic.

pub mod activity;
pub mod directory;
pub mod submissions;

use std::collections::VecDeque;

use chrono::{DateTime, Duration, Utc};

use crate::models::{Account, ActivityEntry, Role, SubmissionRecord};

/// Root of the in-memory store. Records and activity are kept newest-first.
#[derive(Debug)]
pub struct Ats {
    accounts: Vec<Account>,
    active_id: Option<u64>,
    records: Vec<SubmissionRecord>,
    activity: VecDeque<ActivityEntry>,
    next_record_id: u64,
    next_activity_id: u64,
}

impl Ats {
    /// Empty store, no accounts. Login is impossible until accounts exist,
    /// so production code uses `seeded` instead.
    pub fn new() -> Self {
        Ats {
            accounts: Vec::new(),
            active_id: None,
            records: Vec::new(),
            activity: VecDeque::new(),
            next_record_id: 1,
            next_activity_id: 1,
        }
    }

    /// Store pre-loaded with the three demo accounts and a couple of feed
    /// entries, timestamped relative to `now` so the directory views show
    /// one online, one idle, and one offline account at boot.
    pub fn seeded(now: DateTime<Utc>) -> Self {
        let accounts = vec![
            Account {
                id: 1,
                email: "candidate@example.com".to_string(),
                password: "pass123".to_string(),
                role: Role::Candidate,
                name: "John Candidate".to_string(),
                last_login: now,
                last_action: now,
                total_sessions: 5,
            },
            Account {
                id: 2,
                email: "hr@example.com".to_string(),
                password: "pass123".to_string(),
                role: Role::Hr,
                name: "Jane HR".to_string(),
                last_login: now - Duration::hours(1),
                last_action: now - Duration::minutes(10),
                total_sessions: 12,
            },
            Account {
                id: 3,
                email: "admin@example.com".to_string(),
                password: "pass123".to_string(),
                role: Role::Admin,
                name: "Admin User".to_string(),
                last_login: now - Duration::hours(24),
                last_action: now - Duration::hours(24),
                total_sessions: 23,
            },
        ];

        let activity = VecDeque::from(vec![
            ActivityEntry {
                id: 1,
                actor: "John Candidate".to_string(),
                action: "uploaded resume.pdf".to_string(),
                at: now - Duration::minutes(10),
            },
            ActivityEntry {
                id: 2,
                actor: "Jane HR".to_string(),
                action: "shortlisted John for Full Stack Developer".to_string(),
                at: now - Duration::minutes(20),
            },
        ]);

        Ats {
            accounts,
            active_id: None,
            records: Vec::new(),
            activity,
            next_record_id: 1,
            next_activity_id: 3,
        }
    }
}

impl Default for Ats {
    fn default() -> Self {
        Ats::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presence::{presence, Presence};

    #[test]
    fn test_seeded_directory_has_three_demo_accounts() {
        let now = Utc::now();
        let ats = Ats::seeded(now);

        let emails: Vec<&str> = ats.accounts().iter().map(|a| a.email.as_str()).collect();
        assert_eq!(
            emails,
            vec![
                "candidate@example.com",
                "hr@example.com",
                "admin@example.com"
            ]
        );
        assert_eq!(ats.accounts()[0].role, Role::Candidate);
        assert_eq!(ats.accounts()[1].role, Role::Hr);
        assert_eq!(ats.accounts()[2].role, Role::Admin);
        assert_eq!(ats.accounts()[0].total_sessions, 5);
        assert_eq!(ats.accounts()[1].total_sessions, 12);
        assert_eq!(ats.accounts()[2].total_sessions, 23);
        assert!(ats.active().is_none(), "nobody is logged in at boot");
    }

    #[test]
    fn test_seeded_presence_spans_all_three_buckets() {
        let now = Utc::now();
        let ats = Ats::seeded(now);

        let buckets: Vec<Presence> = ats
            .accounts()
            .iter()
            .map(|a| presence(Some(a.last_action), now))
            .collect();
        assert_eq!(
            buckets,
            vec![Presence::Online, Presence::Idle, Presence::Offline]
        );
    }

    #[test]
    fn test_seeded_feed_is_newest_first() {
        let now = Utc::now();
        let ats = Ats::seeded(now);

        let feed: Vec<&ActivityEntry> = ats.activity().iter().collect();
        assert_eq!(feed.len(), 2);
        assert_eq!(feed[0].action, "uploaded resume.pdf");
        assert_eq!(feed[1].actor, "Jane HR");
        assert!(feed[0].at > feed[1].at);
    }
}
