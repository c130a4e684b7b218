//! Contact API - contact-form endpoint for the static site.
//!
//! This library backs the single `contact-api` binary, which serves the
//! contact form on the marketing site:
//! - Validates the submitted fields
//! - Verifies the submitter with Cloudflare Turnstile
//! - Relays the inquiry by email through Resend, when configured
//!
//! ## Request Flow
//!
//! ```text
//! Form POST → validate fields → verify token (Turnstile) → relay (Resend) → JSON
//! ```

pub mod config;
pub mod contact;
pub mod outbound;
pub mod web;

// Re-export commonly used types
pub use config::Config;
pub use contact::{DeliveryOutcome, Submission};
pub use outbound::{
    Mailer, OutboundEmail, OutboundError, ResendClient, TurnstileClient, VerificationOutcome,
    Verifier,
};
pub use web::AppState;
