// Contact form: field validation, submission status, and the HTTP client that
// posts the form to the mail relay.

pub mod error;
pub mod form;

#[cfg(not(target_arch = "wasm32"))]
pub mod client;

pub use error::ContactError;
pub use form::{ContactForm, ContactStatus};

#[cfg(not(target_arch = "wasm32"))]
pub use client::ContactClient;

/// Mail relay the form posts to unless configured otherwise
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/send-email";
