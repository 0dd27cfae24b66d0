#![allow(dead_code)]

// HTML bodies for the four outbound emails. Each template is a plain struct
// rendered through Display, so callers build messages without touching
// markup and tests can assert on the rendered output directly.

use std::fmt::{self, Display};

use chrono::Utc;

/// Badge color for an AI match score: green from 70 up, amber from 50,
/// red below that.
pub fn score_color(score: u32) -> &'static str {
    if score >= 70 {
        "#10b981"
    } else if score >= 50 {
        "#f59e0b"
    } else {
        "#ef4444"
    }
}

fn candidate_score_message(score: u32) -> &'static str {
    if score >= 70 {
        "🎉 Excellent! Your profile is a strong match."
    } else if score >= 50 {
        "👍 Good match! Consider improving skills in recommended areas."
    } else {
        "📚 We recommend building more skills for better opportunities."
    }
}

fn hr_score_message(score: u32) -> &'static str {
    if score >= 70 {
        "⭐ High potential candidate - recommended for immediate review"
    } else if score >= 50 {
        "👍 Moderate match - worth reviewing"
    } else {
        "📋 Low match - review if needed"
    }
}

/// Sent to the candidate once analysis of their upload completes.
#[derive(Debug)]
pub struct UploadConfirmation {
    pub candidate_name: String,
    pub filename: String,
    pub score: u32,
}

impl Display for UploadConfirmation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            r#"
    <!DOCTYPE html>
    <html>
    <head>
      <style>
        body {{ font-family: Arial, sans-serif; line-height: 1.6; color: #333; }}
        .container {{ max-width: 600px; margin: 0 auto; padding: 20px; }}
        .header {{ background: linear-gradient(135deg, #6366f1, #8b5cf6); color: white; padding: 30px; text-align: center; border-radius: 10px 10px 0 0; }}
        .content {{ background: #f9fafb; padding: 30px; border-radius: 0 0 10px 10px; }}
        .score-badge {{ display: inline-block; background: {color}; color: white; padding: 10px 20px; border-radius: 20px; font-size: 24px; font-weight: bold; }}
        .footer {{ text-align: center; padding: 20px; color: #6b7280; font-size: 12px; }}
      </style>
    </head>
    <body>
      <div class="container">
        <div class="header">
          <h1>🤖 Smart ATS</h1>
          <p>Resume Analysis Complete</p>
        </div>
        <div class="content">
          <h2>Hello {candidate_name},</h2>
          <p>Thank you for uploading your resume to Smart ATS. Our AI system has analyzed your application.</p>

          <h3>📄 Resume: {filename}</h3>

          <p><strong>Your AI Match Score:</strong></p>
          <p><span class="score-badge">{score}%</span></p>

          <p>{message}</p>

          <p>Our HR team will review your application and contact you if shortlisted.</p>

          <p>Best regards,<br>Smart ATS Team</p>
        </div>
        <div class="footer">
          <p>This is an automated message from Smart ATS - Enterprise AI Recruitment</p>
        </div>
      </div>
    </body>
    </html>
  "#,
            color = score_color(self.score),
            candidate_name = self.candidate_name,
            filename = self.filename,
            score = self.score,
            message = candidate_score_message(self.score),
        )
    }
}

/// Sent to the candidate when HR shortlists their submission.
#[derive(Debug)]
pub struct ShortlistNotification {
    pub candidate_name: String,
    pub role: String,
}

impl Display for ShortlistNotification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            r#"
    <!DOCTYPE html>
    <html>
    <head>
      <style>
        body {{ font-family: Arial, sans-serif; line-height: 1.6; color: #333; }}
        .container {{ max-width: 600px; margin: 0 auto; padding: 20px; }}
        .header {{ background: linear-gradient(135deg, #10b981, #059669); color: white; padding: 30px; text-align: center; border-radius: 10px 10px 0 0; }}
        .content {{ background: #f9fafb; padding: 30px; border-radius: 0 0 10px 10px; }}
        .highlight {{ background: #ecfdf5; border-left: 4px solid #10b981; padding: 15px; margin: 20px 0; }}
        .footer {{ text-align: center; padding: 20px; color: #6b7280; font-size: 12px; }}
      </style>
    </head>
    <body>
      <div class="container">
        <div class="header">
          <h1>🎉 Congratulations!</h1>
          <p>You've Been Shortlisted</p>
        </div>
        <div class="content">
          <h2>Dear {candidate_name},</h2>

          <div class="highlight">
            <p><strong>Great news!</strong> Your application for <strong>{role}</strong> has been shortlisted by our HR team.</p>
          </div>

          <p>This means your profile stood out among other candidates. Our team will contact you soon with next steps, which may include:</p>

          <ul>
            <li>📞 Phone screening interview</li>
            <li>💻 Technical assessment</li>
            <li>🤝 HR interview</li>
          </ul>

          <p>Please ensure your contact information is up to date and be ready to respond to our communications.</p>

          <p>Best of luck!<br>Smart ATS HR Team</p>
        </div>
        <div class="footer">
          <p>Smart ATS - Enterprise AI Recruitment Platform</p>
        </div>
      </div>
    </body>
    </html>
  "#,
            candidate_name = self.candidate_name,
            role = self.role,
        )
    }
}

/// Sent to the HR inbox when a fresh submission finishes analysis.
#[derive(Debug)]
pub struct HrSubmissionAlert {
    pub candidate_name: String,
    pub filename: String,
    pub role: String,
    pub score: u32,
}

impl Display for HrSubmissionAlert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            r#"
    <!DOCTYPE html>
    <html>
    <head>
      <style>
        body {{ font-family: Arial, sans-serif; line-height: 1.6; color: #333; }}
        .container {{ max-width: 600px; margin: 0 auto; padding: 20px; }}
        .header {{ background: linear-gradient(135deg, #3b82f6, #1d4ed8); color: white; padding: 30px; text-align: center; border-radius: 10px 10px 0 0; }}
        .content {{ background: #f9fafb; padding: 30px; border-radius: 0 0 10px 10px; }}
        .stats {{ display: flex; justify-content: space-around; margin: 20px 0; }}
        .stat-box {{ background: white; padding: 15px 25px; border-radius: 10px; text-align: center; box-shadow: 0 2px 4px rgba(0,0,0,0.1); }}
        .score {{ font-size: 28px; font-weight: bold; color: {color}; }}
        .footer {{ text-align: center; padding: 20px; color: #6b7280; font-size: 12px; }}
      </style>
    </head>
    <body>
      <div class="container">
        <div class="header">
          <h1>📄 New Resume Uploaded</h1>
          <p>AI Analysis Complete</p>
        </div>
        <div class="content">
          <h2>Hello HR Team,</h2>

          <p>A new resume has been uploaded and analyzed by our AI system:</p>

          <table style="width: 100%; border-collapse: collapse; margin: 20px 0;">
            <tr style="background: #f3f4f6;">
              <td style="padding: 12px; border: 1px solid #e5e7eb;"><strong>Candidate</strong></td>
              <td style="padding: 12px; border: 1px solid #e5e7eb;">{candidate_name}</td>
            </tr>
            <tr>
              <td style="padding: 12px; border: 1px solid #e5e7eb;"><strong>File</strong></td>
              <td style="padding: 12px; border: 1px solid #e5e7eb;">{filename}</td>
            </tr>
            <tr style="background: #f3f4f6;">
              <td style="padding: 12px; border: 1px solid #e5e7eb;"><strong>Detected Role</strong></td>
              <td style="padding: 12px; border: 1px solid #e5e7eb;">{role}</td>
            </tr>
            <tr>
              <td style="padding: 12px; border: 1px solid #e5e7eb;"><strong>AI Score</strong></td>
              <td style="padding: 12px; border: 1px solid #e5e7eb;"><span class="score">{score}%</span></td>
            </tr>
          </table>

          <p>{message}</p>

          <p>Login to Smart ATS to review this candidate and take action.</p>
        </div>
        <div class="footer">
          <p>Smart ATS - Automated HR Notification</p>
        </div>
      </div>
    </body>
    </html>
  "#,
            color = score_color(self.score),
            candidate_name = self.candidate_name,
            filename = self.filename,
            role = self.role,
            score = self.score,
            message = hr_score_message(self.score),
        )
    }
}

/// Formal offer letter. Compensation, joining date, and the extra notes
/// paragraph are each rendered only when present; the date line falls back
/// to the current date when no joining date was given.
#[derive(Debug, Clone)]
pub struct OfferLetter {
    pub candidate_name: String,
    pub candidate_email: String,
    pub role: String,
    pub company_name: String,
    pub salary: Option<String>,
    pub joining_date: Option<String>,
    pub message: Option<String>,
}

impl OfferLetter {
    /// Footer contact address, derived from the company name with
    /// whitespace stripped: "TechCorp Solutions" -> hr@techcorpsolutions.com.
    pub fn contact_email(&self) -> String {
        let compact: String = self.company_name.to_lowercase().split_whitespace().collect();
        format!("hr@{compact}.com")
    }
}

impl Display for OfferLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let date_line = self
            .joining_date
            .clone()
            .unwrap_or_else(|| Utc::now().format("%B %-d, %Y").to_string());
        let salary_item = match &self.salary {
            Some(salary) => {
                format!("<li><strong>Compensation:</strong> {salary} per annum</li>")
            }
            None => String::new(),
        };
        let joining_item = match &self.joining_date {
            Some(date) => {
                format!("<li><strong>Expected Joining Date:</strong> {date}</li>")
            }
            None => String::new(),
        };
        let message_block = match &self.message {
            Some(message) => {
                format!("<p><strong>Additional Notes:</strong><br>{message}</p>")
            }
            None => String::new(),
        };

        write!(
            f,
            r#"
    <!DOCTYPE html>
    <html>
    <head>
      <style>
        body {{ font-family: 'Times New Roman', serif; line-height: 1.8; color: #1f2937; }}
        .container {{ max-width: 700px; margin: 0 auto; padding: 40px; background: white; }}
        .letterhead {{ text-align: center; border-bottom: 3px solid #3b82f6; padding-bottom: 20px; margin-bottom: 30px; }}
        .company-name {{ font-size: 28px; font-weight: bold; color: #1e40af; margin: 0; }}
        .company-tagline {{ color: #6b7280; font-style: italic; }}
        .date {{ text-align: right; margin-bottom: 30px; }}
        .subject {{ font-weight: bold; text-align: center; margin: 30px 0; font-size: 18px; text-decoration: underline; }}
        .signature {{ margin-top: 50px; }}
        .footer {{ margin-top: 40px; padding-top: 20px; border-top: 1px solid #e5e7eb; text-align: center; font-size: 12px; color: #6b7280; }}
      </style>
    </head>
    <body>
      <div class="container">
        <div class="letterhead">
          <p class="company-name">{company_name}</p>
          <p class="company-tagline">Excellence in Innovation</p>
        </div>

        <p class="date">Date: {date_line}</p>

        <p><strong>To,</strong><br>
        {candidate_name}<br>
        {candidate_email}</p>

        <p class="subject">OFFER OF EMPLOYMENT</p>

        <p>Dear <strong>{candidate_name}</strong>,</p>

        <p>We are pleased to inform you that after careful consideration of your application and interview performance, we have decided to offer you the position of <strong>{role}</strong> at {company_name}.</p>

        <p>We were impressed by your skills, experience, and enthusiasm during the selection process. We believe you will be a valuable addition to our team.</p>

        <p><strong>Position Details:</strong></p>
        <ul>
          <li><strong>Designation:</strong> {role}</li>
          {salary_item}
          {joining_item}
          <li><strong>Location:</strong> As per company requirement</li>
        </ul>

        {message_block}

        <p>Please confirm your acceptance of this offer by replying to this email within 7 working days.</p>

        <p>We look forward to welcoming you to the {company_name} family!</p>

        <div class="signature">
          <p>Warm Regards,</p>
          <p><strong>HR Department</strong><br>
          {company_name}</p>
        </div>

        <div class="footer">
          <p>This is an official offer letter generated by Smart ATS</p>
          <p>For any queries, please contact {contact}</p>
        </div>
      </div>
    </body>
    </html>
  "#,
            company_name = self.company_name,
            date_line = date_line,
            candidate_name = self.candidate_name,
            candidate_email = self.candidate_email,
            role = self.role,
            salary_item = salary_item,
            joining_item = joining_item,
            message_block = message_block,
            contact = self.contact_email(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_offer() -> OfferLetter {
        OfferLetter {
            candidate_name: "Jane Doe".to_string(),
            candidate_email: "jane@example.com".to_string(),
            role: "Engineer".to_string(),
            company_name: "Acme Corp".to_string(),
            salary: None,
            joining_date: None,
            message: None,
        }
    }

    #[test]
    fn test_score_color_bands() {
        assert_eq!(score_color(100), "#10b981");
        assert_eq!(score_color(70), "#10b981");
        assert_eq!(score_color(69), "#f59e0b");
        assert_eq!(score_color(50), "#f59e0b");
        assert_eq!(score_color(49), "#ef4444");
        assert_eq!(score_color(0), "#ef4444");
    }

    #[test]
    fn test_upload_confirmation_reflects_score_band() {
        let strong = UploadConfirmation {
            candidate_name: "John Candidate".to_string(),
            filename: "resume.pdf".to_string(),
            score: 82,
        }
        .to_string();
        assert!(strong.contains("Hello John Candidate,"));
        assert!(strong.contains("📄 Resume: resume.pdf"));
        assert!(strong.contains("82%"));
        assert!(strong.contains("#10b981"));
        assert!(strong.contains("🎉 Excellent! Your profile is a strong match."));

        let middling = UploadConfirmation {
            candidate_name: "John Candidate".to_string(),
            filename: "resume.pdf".to_string(),
            score: 55,
        }
        .to_string();
        assert!(middling.contains("#f59e0b"));
        assert!(middling.contains("👍 Good match! Consider improving skills in recommended areas."));

        let weak = UploadConfirmation {
            candidate_name: "John Candidate".to_string(),
            filename: "resume.pdf".to_string(),
            score: 35,
        }
        .to_string();
        assert!(weak.contains("#ef4444"));
        assert!(weak.contains("📚 We recommend building more skills for better opportunities."));
    }

    #[test]
    fn test_shortlist_notification_names_candidate_and_role() {
        let html = ShortlistNotification {
            candidate_name: "John Candidate".to_string(),
            role: "Full Stack Developer".to_string(),
        }
        .to_string();
        assert!(html.contains("Dear John Candidate,"));
        assert!(html.contains("<strong>Full Stack Developer</strong>"));
        assert!(html.contains("You've Been Shortlisted"));
        assert!(html.contains("📞 Phone screening interview"));
    }

    #[test]
    fn test_hr_alert_lists_submission_details() {
        let html = HrSubmissionAlert {
            candidate_name: "John Candidate".to_string(),
            filename: "resume.pdf".to_string(),
            role: "Full Stack Developer".to_string(),
            score: 82,
        }
        .to_string();
        assert!(html.contains("📄 New Resume Uploaded"));
        assert!(html.contains(">John Candidate</td>"));
        assert!(html.contains(">resume.pdf</td>"));
        assert!(html.contains(">Full Stack Developer</td>"));
        assert!(html.contains("82%"));
        assert!(html.contains("⭐ High potential candidate - recommended for immediate review"));

        let low = HrSubmissionAlert {
            candidate_name: "John Candidate".to_string(),
            filename: "resume.pdf".to_string(),
            role: "Backend Developer".to_string(),
            score: 35,
        }
        .to_string();
        assert!(low.contains("📋 Low match - review if needed"));
    }

    #[test]
    fn test_offer_letter_omits_absent_optional_sections() {
        let html = make_offer().to_string();
        assert!(html.contains("OFFER OF EMPLOYMENT"));
        assert!(html.contains("<li><strong>Designation:</strong> Engineer</li>"));
        assert!(!html.contains("Compensation"));
        assert!(!html.contains("Expected Joining Date"));
        assert!(!html.contains("Additional Notes"));
        assert!(html.contains("Date: "), "date line falls back to today");
    }

    #[test]
    fn test_offer_letter_renders_optional_sections_when_present() {
        let mut offer = make_offer();
        offer.salary = Some("$95,000".to_string());
        offer.joining_date = Some("March 1, 2026".to_string());
        offer.message = Some("We are excited to have you join!".to_string());
        let html = offer.to_string();

        assert!(html.contains("<li><strong>Compensation:</strong> $95,000 per annum</li>"));
        assert!(html.contains("<li><strong>Expected Joining Date:</strong> March 1, 2026</li>"));
        assert!(html.contains("Date: March 1, 2026"));
        assert!(html.contains("<p><strong>Additional Notes:</strong><br>We are excited to have you join!</p>"));
    }

    #[test]
    fn test_offer_letter_contact_strips_company_whitespace() {
        let mut offer = make_offer();
        offer.company_name = "TechCorp Solutions".to_string();
        assert_eq!(offer.contact_email(), "hr@techcorpsolutions.com");
        assert!(offer.to_string().contains("hr@techcorpsolutions.com"));
    }
}
