use crate::contact::application::ports::outgoing::email_sender::{EmailSendError, EmailSender};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentEmail {
    pub visitor_name: String,
    pub reply_to: String,
    pub subject: String,
    pub html_body: String,
}

/// Records sends for verification instead of delivering. Constructed with a
/// fixed outcome so tests can drive both success and each failure class.
pub struct MockEmailSender {
    outcome: Result<(), EmailSendError>,
    sent_emails: Arc<Mutex<Vec<SentEmail>>>,
}

impl MockEmailSender {
    pub fn new() -> Self {
        Self {
            outcome: Ok(()),
            sent_emails: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing(error: EmailSendError) -> Self {
        Self {
            outcome: Err(error),
            sent_emails: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn sent_emails(&self) -> Vec<SentEmail> {
        self.sent_emails.lock().unwrap().clone()
    }

    pub fn send_count(&self) -> usize {
        self.sent_emails.lock().unwrap().len()
    }
}

impl Default for MockEmailSender {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmailSender for MockEmailSender {
    async fn send_email(
        &self,
        visitor_name: &str,
        reply_to: &str,
        subject: &str,
        html_body: &str,
    ) -> Result<(), EmailSendError> {
        self.sent_emails.lock().unwrap().push(SentEmail {
            visitor_name: visitor_name.to_string(),
            reply_to: reply_to.to_string(),
            subject: subject.to_string(),
            html_body: html_body.to_string(),
        });
        self.outcome.clone()
    }
}
