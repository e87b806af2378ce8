use crate::contact::error::ContactError;
use crate::contact::form::{ContactForm, ContactStatus};
use crate::contact::DEFAULT_ENDPOINT;
use reqwest::blocking::Client;
use tracing::{debug, warn};

/// Posts contact forms as JSON to a mail relay and tracks the outcome of the
/// last submission.
#[derive(Debug, Clone)]
pub struct ContactClient {
    http: Client,
    endpoint: String,
    status: ContactStatus,
}

impl Default for ContactClient {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

impl ContactClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        ContactClient {
            http: Client::new(),
            endpoint: endpoint.into(),
            status: ContactStatus::Idle,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn status(&self) -> ContactStatus {
        self.status
    }

    /// Validate and post the form. Any 2xx response counts as delivered.
    pub fn submit(&self, form: &ContactForm) -> Result<(), ContactError> {
        form.validate()?;

        debug!(endpoint = %self.endpoint, "posting contact form");
        let resp = self
            .http
            .post(&self.endpoint)
            .json(form)
            .send()
            .map_err(|e| ContactError::Transport(e.to_string()))?;

        let status = resp.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(ContactError::Rejected(status.as_u16()))
        }
    }

    /// Submit and record the outcome. Failures are logged, not returned.
    pub fn send(&mut self, form: &ContactForm) -> ContactStatus {
        self.status = ContactStatus::Submitting;
        self.status = match self.submit(form) {
            Ok(()) => ContactStatus::Success,
            Err(e) => {
                warn!(endpoint = %self.endpoint, error = %e, "contact form submission failed");
                ContactStatus::Error
            }
        };
        self.status
    }

    /// Back to `Idle`, ready for another message
    pub fn reset(&mut self) {
        self.status = ContactStatus::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoint() {
        let client = ContactClient::default();
        assert_eq!(client.endpoint(), "http://127.0.0.1:5000/send-email");
        assert_eq!(client.status(), ContactStatus::Idle);
    }

    #[test]
    fn test_invalid_form_is_not_sent() {
        // Nothing listens here; validation must fail before any request.
        let mut client = ContactClient::new("http://127.0.0.1:9/send-email");
        let form = ContactForm::new("", "a@b.c", "hi");
        assert_eq!(client.submit(&form), Err(ContactError::MissingField("name")));
        assert_eq!(client.send(&form), ContactStatus::Error);
        client.reset();
        assert_eq!(client.status(), ContactStatus::Idle);
    }
}
