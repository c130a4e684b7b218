//! Outbound HTTP collaborators.
//!
//! The handler talks to two external services, each behind a small trait so
//! unit tests can substitute fakes instead of performing network calls:
//!
//! ```text
//! handler → Verifier (Turnstile siteverify)
//!         → Mailer   (Resend transactional email)
//! ```

pub mod resend;
pub mod turnstile;

use thiserror::Error;

pub use resend::{Mailer, OutboundEmail, ResendClient};
pub use turnstile::{TurnstileClient, VerificationOutcome, Verifier};

/// Failure of an outbound call to one of the collaborators.
#[derive(Debug, Error)]
pub enum OutboundError {
    /// The request never completed (timeout, DNS, connection refused) or the
    /// response body could not be decoded.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The collaborator answered with a non-success HTTP status.
    #[error("unexpected status {0}")]
    Status(reqwest::StatusCode),
}
