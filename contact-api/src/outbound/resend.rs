//! Resend transactional-email client.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::info;

use crate::outbound::OutboundError;

/// Fixed Resend email-delivery endpoint.
const EMAILS_URL: &str = "https://api.resend.com/emails";

/// One outbound email, serialized as the Resend request body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutboundEmail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub text: String,
}

/// Capability to send one transactional email.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, api_key: &str, email: &OutboundEmail) -> Result<(), OutboundError>;
}

/// Mailer backed by the real Resend endpoint.
///
/// Only the HTTP status of the response is inspected; the body is not parsed.
#[derive(Clone)]
pub struct ResendClient {
    http: Client,
}

impl ResendClient {
    pub fn new(http: Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl Mailer for ResendClient {
    async fn send(&self, api_key: &str, email: &OutboundEmail) -> Result<(), OutboundError> {
        let response = self
            .http
            .post(EMAILS_URL)
            .bearer_auth(api_key)
            .json(email)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(OutboundError::Status(status));
        }

        info!(to = %email.to, subject = %email.subject, "resend_email_sent");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_email_serializes_to_resend_shape() {
        let email = OutboundEmail {
            from: "Kors Digital <onboarding@resend.dev>".to_string(),
            to: "inbox@example.com".to_string(),
            subject: "New project inquiry from Jo".to_string(),
            text: "Name: Jo\n\nHi".to_string(),
        };

        assert_eq!(
            serde_json::to_value(&email).unwrap(),
            json!({
                "from": "Kors Digital <onboarding@resend.dev>",
                "to": "inbox@example.com",
                "subject": "New project inquiry from Jo",
                "text": "Name: Jo\n\nHi",
            })
        );
    }
}
