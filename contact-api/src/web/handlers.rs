//! Contact endpoint handlers.
//!
//! The contact handler runs a five-step linear sequence, short-circuiting on
//! the first failure:
//!
//! ```text
//! extract fields → required-field check → token check → Turnstile verify
//!                → Resend relay (conditional) → JSON response
//! ```
//!
//! A skipped or failed relay never fails the request; it is downgraded to the
//! `delivery` field of the 200 response.

use std::sync::Arc;

use axum::{
    extract::{Form, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use crate::contact::{DeliveryOutcome, Submission, DEFAULT_FROM};
use crate::outbound::{Mailer, OutboundEmail, Verifier};
use crate::Config;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub verifier: Arc<dyn Verifier>,
    pub mailer: Arc<dyn Mailer>,
}

impl AppState {
    pub fn new(config: Config, verifier: Arc<dyn Verifier>, mailer: Arc<dyn Mailer>) -> Self {
        Self {
            config: Arc::new(config),
            verifier,
            mailer,
        }
    }
}

// =============================================================================
// Health Check
// =============================================================================

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Health check endpoint.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

// =============================================================================
// Contact Endpoint
// =============================================================================

/// Raw contact-form payload.
///
/// The front-end submits form-encoded data; the Turnstile widget injects its
/// token under a hyphenated name, aliased here. Missing fields normalize to
/// empty strings.
#[derive(Debug, Default, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub message: String,
    #[serde(default, rename = "cf-turnstile-response")]
    pub turnstile_response: String,
}

/// JSON body of every contact response.
#[derive(Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ContactResponse {
    /// 200: validation and verification passed, delivery attempted or skipped.
    Accepted {
        ok: bool,
        delivery: DeliveryOutcome,
    },
    /// 403: Turnstile rejected the token; provider codes passed through.
    Denied {
        error: String,
        details: Vec<String>,
    },
    /// 400/500: client input error or server misconfiguration.
    Rejected { error: String },
}

impl ContactResponse {
    fn accepted(delivery: DeliveryOutcome) -> Self {
        ContactResponse::Accepted { ok: true, delivery }
    }

    fn denied(details: Vec<String>) -> Self {
        ContactResponse::Denied {
            error: "Turnstile verification failed.".to_string(),
            details,
        }
    }

    fn rejected(error: &str) -> Self {
        ContactResponse::Rejected {
            error: error.to_string(),
        }
    }
}

/// Contact form endpoint.
pub async fn contact(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<ContactForm>,
) -> Response {
    let ip = client_ip(&headers);
    let (status, body) = handle_contact(&state, form, ip).await;
    json_response(status, &body)
}

/// Core contact flow, independent of the axum extractors.
pub async fn handle_contact(
    state: &AppState,
    form: ContactForm,
    ip: Option<String>,
) -> (StatusCode, ContactResponse) {
    let submission = Submission::new(&form.name, &form.email, &form.company, &form.message, ip);
    let token = form.turnstile_response.trim();

    info!(
        name = %submission.name,
        email = %submission.email,
        has_company = !submission.company.is_empty(),
        has_ip = submission.ip.is_some(),
        has_token = !token.is_empty(),
        "contact_received"
    );

    if submission.missing_required() {
        warn!("contact_missing_fields");
        return (
            StatusCode::BAD_REQUEST,
            ContactResponse::rejected("Please complete all required fields."),
        );
    }

    if token.is_empty() {
        warn!("contact_missing_token");
        return (
            StatusCode::BAD_REQUEST,
            ContactResponse::rejected("Turnstile verification failed. Please try again."),
        );
    }

    let Some(secret) = state.config.turnstile_secret_key.as_deref() else {
        error!("turnstile_secret_missing");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            ContactResponse::rejected("Turnstile secret key is not configured."),
        );
    };

    let outcome = match state
        .verifier
        .verify(secret, token, submission.ip.as_deref())
        .await
    {
        Ok(outcome) => outcome,
        Err(e) => {
            // Cannot prove the submitter is human, so do not proceed.
            error!(error = %e, "turnstile_request_failed");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                ContactResponse::rejected("Turnstile verification request failed."),
            );
        }
    };

    if !outcome.success {
        warn!(error_codes = ?outcome.error_codes, "turnstile_rejected");
        return (
            StatusCode::FORBIDDEN,
            ContactResponse::denied(outcome.error_codes),
        );
    }

    let delivery = deliver(state, &submission).await;

    info!(delivery = ?delivery, "contact_accepted");

    (StatusCode::OK, ContactResponse::accepted(delivery))
}

/// Relay the inquiry by email if the provider is configured.
async fn deliver(state: &AppState, submission: &Submission) -> DeliveryOutcome {
    let (Some(api_key), Some(to)) = (
        state.config.resend_api_key.as_deref(),
        state.config.contact_email.as_deref(),
    ) else {
        info!("delivery_skipped_unconfigured");
        return DeliveryOutcome::skipped("Email provider not configured.");
    };

    let email = OutboundEmail {
        from: state
            .config
            .contact_from
            .clone()
            .unwrap_or_else(|| DEFAULT_FROM.to_string()),
        to: to.to_string(),
        subject: submission.subject(),
        text: submission.body_text(),
    };

    match state.mailer.send(api_key, &email).await {
        Ok(()) => DeliveryOutcome::Sent,
        Err(e) => {
            warn!(error = %e, "resend_request_failed");
            DeliveryOutcome::failed("Email provider request failed.")
        }
    }
}

/// Extract the caller's IP from the trusted reverse-proxy header.
fn client_ip(headers: &HeaderMap) -> Option<String> {
    headers
        .get("CF-Connecting-IP")
        .and_then(|v| v.to_str().ok())
        .map(|v| v.to_string())
}

/// Serialize a response body with an explicit charset.
fn json_response(status: StatusCode, body: &ContactResponse) -> Response {
    let body = serde_json::to_string(body).unwrap_or_else(|_| "{}".to_string());
    (
        status,
        [(header::CONTENT_TYPE, "application/json; charset=utf-8")],
        body,
    )
        .into_response()
}
