use std::sync::OnceLock;

use regex::Regex;
use serde::Deserialize;
use utoipa::ToSchema;

/// Shape check only (`local@domain.tld`), deliberately far short of RFC 5322.
/// Same pattern the client applies before submitting.
fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"))
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("All fields are required")]
    MissingField,

    #[error("Invalid email format")]
    InvalidEmail,
}

/// Raw form body as posted by the client.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

/// A validated submission. Exists only for the duration of one request and is
/// never persisted; the only thing that outlives the request is the outbound
/// email built from it.
#[derive(Debug, Clone)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl TryFrom<ContactForm> for ContactMessage {
    type Error = ValidationError;

    fn try_from(form: ContactForm) -> Result<Self, Self::Error> {
        let name = form.name.trim().to_string();
        let email = form.email.trim().to_string();
        let subject = form.subject.trim().to_string();
        let message = form.message.trim().to_string();

        if name.is_empty() || email.is_empty() || subject.is_empty() || message.is_empty() {
            return Err(ValidationError::MissingField);
        }
        if !email_pattern().is_match(&email) {
            return Err(ValidationError::InvalidEmail);
        }

        Ok(Self {
            name,
            email,
            subject,
            message,
        })
    }
}
