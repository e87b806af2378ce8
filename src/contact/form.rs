use crate::contact::error::ContactError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        ContactForm {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Every field is required. Reports the first blank one.
    pub fn validate(&self) -> Result<(), ContactError> {
        let fields = [
            ("name", &self.name),
            ("email", &self.email),
            ("message", &self.message),
        ];
        for (field, value) in fields {
            if value.trim().is_empty() {
                return Err(ContactError::MissingField(field));
            }
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        *self = ContactForm::default();
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

impl ContactStatus {
    /// Banner shown under the form, if any
    pub fn banner(&self) -> Option<&'static str> {
        match self {
            ContactStatus::Idle => None,
            ContactStatus::Submitting => Some("Sending..."),
            ContactStatus::Success => {
                Some("Message Sent! Thank you for reaching out. We'll get back to you soon.")
            }
            ContactStatus::Error => Some("Failed to send message. Please try again."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_requires_every_field() {
        let form = ContactForm::new("Ada", "ada@example.com", "Hello");
        assert_eq!(form.validate(), Ok(()));

        let form = ContactForm::new("Ada", "  ", "Hello");
        assert_eq!(form.validate(), Err(ContactError::MissingField("email")));

        assert_eq!(ContactForm::default().validate(), Err(ContactError::MissingField("name")));
    }

    #[test]
    fn test_clear() {
        let mut form = ContactForm::new("Ada", "ada@example.com", "Hello");
        form.clear();
        assert_eq!(form, ContactForm::default());
    }

    #[test]
    fn test_serializes_as_wire_body() {
        let form = ContactForm::new("Ada", "ada@example.com", "Hi");
        let json = serde_json::to_value(&form).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "Ada", "email": "ada@example.com", "message": "Hi"})
        );
    }

    #[test]
    fn test_banner() {
        assert_eq!(ContactStatus::Idle.banner(), None);
        assert_eq!(ContactStatus::Submitting.banner(), Some("Sending..."));
        assert!(ContactStatus::Success.banner().unwrap().starts_with("Message Sent!"));
        assert!(ContactStatus::Error.banner().is_some());
    }
}
