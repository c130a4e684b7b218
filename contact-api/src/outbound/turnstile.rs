//! Cloudflare Turnstile verification client.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::info;

use crate::outbound::OutboundError;

/// Fixed Turnstile challenge-verification endpoint.
const SITEVERIFY_URL: &str = "https://challenges.cloudflare.com/turnstile/v0/siteverify";

/// Verification result as returned by the siteverify endpoint.
///
/// Turnstile sends more fields than these; only `success` and `error-codes`
/// are inspected.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct VerificationOutcome {
    pub success: bool,
    #[serde(default, rename = "error-codes")]
    pub error_codes: Vec<String>,
}

/// Capability to verify a client-provided challenge token.
#[async_trait]
pub trait Verifier: Send + Sync {
    async fn verify(
        &self,
        secret: &str,
        token: &str,
        remote_ip: Option<&str>,
    ) -> Result<VerificationOutcome, OutboundError>;
}

/// Verifier backed by the real siteverify endpoint.
#[derive(Clone)]
pub struct TurnstileClient {
    http: Client,
}

impl TurnstileClient {
    pub fn new(http: Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl Verifier for TurnstileClient {
    async fn verify(
        &self,
        secret: &str,
        token: &str,
        remote_ip: Option<&str>,
    ) -> Result<VerificationOutcome, OutboundError> {
        let mut params = vec![("secret", secret), ("response", token)];
        if let Some(ip) = remote_ip {
            params.push(("remoteip", ip));
        }

        let response = self.http.post(SITEVERIFY_URL).form(&params).send().await?;
        let outcome: VerificationOutcome = response.json().await?;

        info!(
            success = outcome.success,
            error_codes = ?outcome.error_codes,
            "turnstile_siteverify_complete"
        );

        Ok(outcome)
    }
}
