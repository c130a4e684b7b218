//! Configuration module for environment variable parsing.
//!
//! Reads all configuration from environment variables once at startup. The
//! resulting struct is injected into the handler state so tests can construct
//! configurations directly instead of mutating the environment.

use std::env;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Turnstile secret key for siteverify calls (verification is refused
    /// with a 500 when this is unset)
    pub turnstile_secret_key: Option<String>,

    /// Resend API key (delivery is skipped when this is unset)
    pub resend_api_key: Option<String>,

    /// Destination address for relayed inquiries (delivery is skipped when
    /// this is unset)
    pub contact_email: Option<String>,

    /// Optional sender override for relayed inquiries
    pub contact_from: Option<String>,

    /// Port for the web server to listen on
    pub port: u16,

    /// HTTP request timeout in milliseconds for outbound calls
    pub request_timeout_ms: u64,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Config {
            turnstile_secret_key: non_empty_var("TURNSTILE_SECRET_KEY"),

            resend_api_key: non_empty_var("RESEND_API_KEY"),

            contact_email: non_empty_var("CONTACT_EMAIL"),

            contact_from: non_empty_var("CONTACT_FROM"),

            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),

            request_timeout_ms: env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8000),
        }
    }

    /// Whether both Resend credentials needed for delivery are present.
    pub fn delivery_configured(&self) -> bool {
        self.resend_api_key.is_some() && self.contact_email.is_some()
    }
}

/// Read an environment variable, treating blank values as unset.
fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}
