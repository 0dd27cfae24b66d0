#![allow(dead_code)]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Access level of a demo account. Fixed at seed time; accounts are never
/// created or promoted at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Candidate,
    Hr,
    Admin,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Candidate => "candidate",
            Role::Hr => "hr",
            Role::Admin => "admin",
        }
    }
}

/// Demo directory account. The password is a plaintext demo credential and
/// is never serialized into responses.
#[derive(Debug, Clone, Serialize)]
pub struct Account {
    pub id: u64,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub role: Role,
    pub name: String,
    pub last_login: DateTime<Utc>,
    pub last_action: DateTime<Utc>,
    pub total_sessions: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_account() -> Account {
        Account {
            id: 1,
            email: "candidate@example.com".to_string(),
            password: "pass123".to_string(),
            role: Role::Candidate,
            name: "John Candidate".to_string(),
            last_login: Utc::now(),
            last_action: Utc::now(),
            total_sessions: 5,
        }
    }

    #[test]
    fn test_password_is_never_serialized() {
        let json = serde_json::to_value(make_account()).unwrap();
        assert!(
            json.get("password").is_none(),
            "password must not appear in serialized accounts"
        );
        assert_eq!(json["email"], "candidate@example.com");
        assert_eq!(json["role"], "candidate");
    }

    #[test]
    fn test_roles_serialize_lowercase() {
        assert_eq!(serde_json::to_value(Role::Hr).unwrap(), "hr");
        assert_eq!(serde_json::to_value(Role::Admin).unwrap(), "admin");
        assert_eq!(serde_json::to_value(Role::Candidate).unwrap(), "candidate");
    }
}
