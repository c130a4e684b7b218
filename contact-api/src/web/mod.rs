//! Web server module for the contact endpoint.
//!
//! The handler is deliberately small:
//! 1. Normalize and validate the form fields
//! 2. Verify the Turnstile token
//! 3. Relay the inquiry through Resend, when configured
//! 4. Return JSON
//!
//! Both outbound calls go through the `outbound` traits so tests run against
//! fakes.

pub mod handlers;

pub use handlers::{contact, handle_contact, health, AppState, ContactForm, ContactResponse};
