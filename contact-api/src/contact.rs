//! Contact submission domain types.
//!
//! A [`Submission`] is the normalized form payload for one request; a
//! [`DeliveryOutcome`] describes whether the relay email was attempted and
//! its result. Neither outlives the request.

use serde::Serialize;

/// Fixed sender identity used when CONTACT_FROM is not configured.
pub const DEFAULT_FROM: &str = "Kors Digital <onboarding@resend.dev>";

/// A normalized contact-form submission.
///
/// Fields are trimmed of surrounding whitespace; missing fields normalize to
/// the empty string. The IP comes from the trusted reverse-proxy header, not
/// from the form.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
    pub ip: Option<String>,
}

impl Submission {
    pub fn new(
        name: &str,
        email: &str,
        company: &str,
        message: &str,
        ip: Option<String>,
    ) -> Self {
        Submission {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            company: company.trim().to_string(),
            message: message.trim().to_string(),
            ip,
        }
    }

    /// Whether any of the required fields is empty after trimming.
    pub fn missing_required(&self) -> bool {
        self.name.is_empty() || self.email.is_empty() || self.message.is_empty()
    }

    /// Subject line for the relay email.
    pub fn subject(&self) -> String {
        format!("New project inquiry from {}", self.name)
    }

    /// Plain-text body for the relay email.
    pub fn body_text(&self) -> String {
        let company = if self.company.is_empty() {
            "N/A"
        } else {
            self.company.as_str()
        };
        let ip = self.ip.as_deref().unwrap_or("N/A");

        [
            format!("Name: {}", self.name),
            format!("Email: {}", self.email),
            format!("Company: {}", company),
            format!("IP: {}", ip),
            String::new(),
            self.message.clone(),
        ]
        .join("\n")
    }
}

/// Result of the relay-email step for one request.
///
/// A skipped or failed delivery does not fail the overall request; this is
/// reported in the 200 response body instead.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum DeliveryOutcome {
    Skipped { reason: String },
    Sent,
    #[serde(rename = "error")]
    Failed { reason: String },
}

impl DeliveryOutcome {
    pub fn skipped(reason: &str) -> Self {
        DeliveryOutcome::Skipped {
            reason: reason.to_string(),
        }
    }

    pub fn failed(reason: &str) -> Self {
        DeliveryOutcome::Failed {
            reason: reason.to_string(),
        }
    }
}
