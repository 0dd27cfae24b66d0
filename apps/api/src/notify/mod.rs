#![allow(dead_code)]

// Notification dispatch. Delivery is simulated: every send waits the fixed
// delay, always succeeds, and lands in the in-memory outbox for inspection.
// Swapping in a real provider means implementing `Mailer` and wiring it
// into `AppState`.

pub mod templates;

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use templates::{HrSubmissionAlert, OfferLetter, ShortlistNotification, UploadConfirmation};

/// Simulated network latency per send.
pub const SEND_DELAY: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmailKind {
    UploadConfirmation,
    ShortlistNotification,
    HrNotification,
    OfferLetter,
}

/// A fully-rendered email ready for dispatch.
#[derive(Debug, Clone)]
pub struct EmailMessage {
    pub to: String,
    pub subject: String,
    pub html: String,
    pub kind: EmailKind,
}

impl EmailMessage {
    pub fn upload_confirmation(
        to: &str,
        candidate_name: &str,
        filename: &str,
        score: u32,
    ) -> Self {
        EmailMessage {
            to: to.to_string(),
            subject: format!("Smart ATS - Resume Analysis Complete (Score: {score}%)"),
            html: UploadConfirmation {
                candidate_name: candidate_name.to_string(),
                filename: filename.to_string(),
                score,
            }
            .to_string(),
            kind: EmailKind::UploadConfirmation,
        }
    }

    pub fn shortlist_notification(to: &str, candidate_name: &str, role: &str) -> Self {
        EmailMessage {
            to: to.to_string(),
            subject: format!("🎉 Congratulations! You've been shortlisted for {role}"),
            html: ShortlistNotification {
                candidate_name: candidate_name.to_string(),
                role: role.to_string(),
            }
            .to_string(),
            kind: EmailKind::ShortlistNotification,
        }
    }

    pub fn hr_notification(
        to: &str,
        candidate_name: &str,
        filename: &str,
        role: &str,
        score: u32,
    ) -> Self {
        EmailMessage {
            to: to.to_string(),
            subject: format!("New Resume: {candidate_name} - {role} (Score: {score}%)"),
            html: HrSubmissionAlert {
                candidate_name: candidate_name.to_string(),
                filename: filename.to_string(),
                role: role.to_string(),
                score,
            }
            .to_string(),
            kind: EmailKind::HrNotification,
        }
    }

    pub fn offer_letter(offer: OfferLetter) -> Self {
        EmailMessage {
            to: offer.candidate_email.clone(),
            subject: format!("Offer Letter - {} at {}", offer.role, offer.company_name),
            html: offer.to_string(),
            kind: EmailKind::OfferLetter,
        }
    }
}

/// What the caller gets back from a send.
#[derive(Debug, Clone, Serialize)]
pub struct Delivery {
    pub success: bool,
    pub message: String,
}

/// Outbox line: proof that a message went out, minus the body.
#[derive(Debug, Clone, Serialize)]
pub struct DeliveryRecord {
    pub message_id: Uuid,
    pub to: String,
    pub subject: String,
    pub kind: EmailKind,
    pub sent_at: DateTime<Utc>,
}

/// Shared record of every simulated delivery, newest-last.
#[derive(Debug, Clone, Default)]
pub struct Outbox {
    inner: Arc<Mutex<Vec<DeliveryRecord>>>,
}

impl Outbox {
    pub fn push(&self, record: DeliveryRecord) {
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        inner.push(record);
    }

    pub fn snapshot(&self) -> Vec<DeliveryRecord> {
        let inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        inner.clone()
    }

    pub fn len(&self) -> usize {
        let inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, message: EmailMessage) -> Result<Delivery, AppError>;
}

/// The demo mailer: sleeps for `SEND_DELAY`, records the delivery, and
/// reports success. It never fails.
pub struct SimulatedMailer {
    outbox: Outbox,
}

impl SimulatedMailer {
    pub fn new(outbox: Outbox) -> Self {
        SimulatedMailer { outbox }
    }
}

#[async_trait]
impl Mailer for SimulatedMailer {
    async fn send(&self, message: EmailMessage) -> Result<Delivery, AppError> {
        tokio::time::sleep(SEND_DELAY).await;

        let record = DeliveryRecord {
            message_id: Uuid::new_v4(),
            to: message.to.clone(),
            subject: message.subject.clone(),
            kind: message.kind,
            sent_at: Utc::now(),
        };
        info!(
            to = %record.to,
            subject = %record.subject,
            kind = ?record.kind,
            "email sent (simulated)"
        );
        self.outbox.push(record);

        Ok(Delivery {
            success: true,
            message: format!("Email sent successfully to {}", message.to),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_simulated_send_succeeds_and_records_delivery() {
        let outbox = Outbox::default();
        let mailer = SimulatedMailer::new(outbox.clone());

        let delivery = mailer
            .send(EmailMessage::upload_confirmation(
                "candidate@example.com",
                "John Candidate",
                "resume.pdf",
                82,
            ))
            .await
            .expect("simulated sends never fail");

        assert!(delivery.success);
        assert_eq!(
            delivery.message,
            "Email sent successfully to candidate@example.com"
        );

        let sent = outbox.snapshot();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to, "candidate@example.com");
        assert_eq!(sent[0].kind, EmailKind::UploadConfirmation);
        assert_eq!(
            sent[0].subject,
            "Smart ATS - Resume Analysis Complete (Score: 82%)"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_every_delivery_gets_its_own_message_id() {
        let outbox = Outbox::default();
        let mailer = SimulatedMailer::new(outbox.clone());

        for _ in 0..2 {
            mailer
                .send(EmailMessage::shortlist_notification(
                    "candidate@example.com",
                    "John Candidate",
                    "Full Stack Developer",
                ))
                .await
                .unwrap();
        }

        let sent = outbox.snapshot();
        assert_eq!(sent.len(), 2);
        assert_ne!(sent[0].message_id, sent[1].message_id);
    }

    #[test]
    fn test_message_constructors_set_subject_and_kind() {
        let shortlist = EmailMessage::shortlist_notification(
            "candidate@example.com",
            "John Candidate",
            "Full Stack Developer",
        );
        assert_eq!(
            shortlist.subject,
            "🎉 Congratulations! You've been shortlisted for Full Stack Developer"
        );
        assert_eq!(shortlist.kind, EmailKind::ShortlistNotification);

        let alert = EmailMessage::hr_notification(
            "hr@example.com",
            "John Candidate",
            "resume.pdf",
            "Full Stack Developer",
            82,
        );
        assert_eq!(
            alert.subject,
            "New Resume: John Candidate - Full Stack Developer (Score: 82%)"
        );
        assert_eq!(alert.to, "hr@example.com");

        let offer = EmailMessage::offer_letter(templates::OfferLetter {
            candidate_name: "John Candidate".to_string(),
            candidate_email: "john@example.com".to_string(),
            role: "Software Developer".to_string(),
            company_name: "TechCorp Solutions".to_string(),
            salary: None,
            joining_date: None,
            message: None,
        });
        assert_eq!(
            offer.subject,
            "Offer Letter - Software Developer at TechCorp Solutions"
        );
        assert_eq!(offer.to, "john@example.com");
        assert_eq!(offer.kind, EmailKind::OfferLetter);
    }

    #[test]
    fn test_email_kind_serializes_snake_case() {
        assert_eq!(
            serde_json::to_value(EmailKind::UploadConfirmation).unwrap(),
            "upload_confirmation"
        );
        assert_eq!(
            serde_json::to_value(EmailKind::HrNotification).unwrap(),
            "hr_notification"
        );
    }
}
