use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use utoipa::ToSchema;

use crate::contact::application::domain::contact_message::{
    ContactForm, ContactMessage, ValidationError,
};
use crate::contact::application::ports::outgoing::email_sender::{EmailSendError, EmailSender};

/// Upper bound on how long a submission waits for the provider before the
/// request reports failure. The losing send keeps running detached.
pub const SEND_TIMEOUT: Duration = Duration::from_secs(25);

const SUBJECT_PREFIX: &str = "Portfolio Contact: ";

/// Echoed back on success. Deliberately excludes the message body so the
/// response never reflects arbitrary submitted content.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ContactReceipt {
    pub name: String,
    pub email: String,
    pub subject: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SubmitContactError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("email delivery is not configured")]
    NotConfigured,

    #[error("provider authentication failed: {0}")]
    ProviderAuth(String),

    #[error("provider did not respond within {}s", SEND_TIMEOUT.as_secs())]
    ProviderTimeout,

    #[error("cannot connect to provider: {0}")]
    ProviderConnection(String),

    #[error("delivery failed: {0}")]
    ProviderUnknown(String),
}

/// Validates a visitor submission and relays it to the email provider with a
/// bounded wait. Stateless across submissions; a failed submission is lost
/// unless the visitor retries.
pub struct ContactService {
    sender: Option<Arc<dyn EmailSender>>,
}

impl ContactService {
    pub fn new(sender: Arc<dyn EmailSender>) -> Self {
        Self {
            sender: Some(sender),
        }
    }

    /// Used when SMTP credentials are absent: validation still runs, but every
    /// delivery attempt reports the configuration error.
    pub fn unconfigured() -> Self {
        Self { sender: None }
    }

    pub fn is_configured(&self) -> bool {
        self.sender.is_some()
    }

    pub async fn submit(&self, form: ContactForm) -> Result<ContactReceipt, SubmitContactError> {
        let message = ContactMessage::try_from(form)?;
        let sender = Arc::clone(
            self.sender
                .as_ref()
                .ok_or(SubmitContactError::NotConfigured)?,
        );

        let receipt = ContactReceipt {
            name: message.name.clone(),
            email: message.email.clone(),
            subject: message.subject.clone(),
        };

        let visitor_name = message.name.clone();
        let reply_to = message.email.clone();
        let subject = format!("{SUBJECT_PREFIX}{}", message.subject);
        let html_body = render_html_body(&message);

        // First settled wins. The send runs as a detached task, so when the
        // timer wins the in-flight delivery is abandoned rather than
        // cancelled; its eventual result has no further effect.
        let send_task = tokio::spawn(async move {
            sender
                .send_email(&visitor_name, &reply_to, &subject, &html_body)
                .await
        });

        match tokio::time::timeout(SEND_TIMEOUT, send_task).await {
            Err(_elapsed) => Err(SubmitContactError::ProviderTimeout),
            Ok(Err(join_err)) => Err(SubmitContactError::ProviderUnknown(join_err.to_string())),
            Ok(Ok(Err(send_err))) => Err(match send_err {
                EmailSendError::Auth(detail) => SubmitContactError::ProviderAuth(detail),
                EmailSendError::Connection(detail) => SubmitContactError::ProviderConnection(detail),
                EmailSendError::InvalidMessage(detail) | EmailSendError::Other(detail) => {
                    SubmitContactError::ProviderUnknown(detail)
                }
            }),
            Ok(Ok(Ok(()))) => Ok(receipt),
        }
    }
}

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn render_html_body(message: &ContactMessage) -> String {
    format!(
        concat!(
            r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">"#,
            r#"<h2 style="color: #333; border-bottom: 2px solid #4CAF50; padding-bottom: 10px;">New Contact Form Submission</h2>"#,
            r#"<div style="background-color: #f5f5f5; padding: 20px; border-radius: 5px; margin: 20px 0;">"#,
            r#"<p style="margin: 10px 0;"><strong>Name:</strong> {name}</p>"#,
            r#"<p style="margin: 10px 0;"><strong>Email:</strong> {email}</p>"#,
            r#"<p style="margin: 10px 0;"><strong>Subject:</strong> {subject}</p>"#,
            r#"</div>"#,
            r#"<div style="margin: 20px 0;"><h3 style="color: #333;">Message:</h3>"#,
            r#"<p style="line-height: 1.6; color: #666; white-space: pre-wrap;">{body}</p></div>"#,
            r#"<div style="margin-top: 30px; padding-top: 20px; border-top: 1px solid #ddd; color: #999; font-size: 12px;">"#,
            r#"<p>This email was sent from your portfolio website contact form.</p></div></div>"#,
        ),
        name = escape_html(&message.name),
        email = escape_html(&message.email),
        subject = escape_html(&message.subject),
        body = escape_html(&message.message),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::adapter::outgoing::mock_sender::MockEmailSender;
    use async_trait::async_trait;

    fn valid_form() -> ContactForm {
        ContactForm {
            name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            subject: "Hello".into(),
            message: "I enjoyed your projects page.".into(),
        }
    }

    #[tokio::test]
    async fn successful_submission_echoes_name_email_subject_only() {
        let sender = Arc::new(MockEmailSender::new());
        let service = ContactService::new(sender.clone());

        let receipt = service.submit(valid_form()).await.expect("delivered");

        assert_eq!(receipt.name, "Ada Lovelace");
        assert_eq!(receipt.email, "ada@example.com");
        assert_eq!(receipt.subject, "Hello");

        let echoed = serde_json::to_value(&receipt).expect("serialize");
        assert!(echoed.get("message").is_none());
    }

    #[tokio::test]
    async fn envelope_carries_prefix_reply_to_and_rendered_body() {
        let sender = Arc::new(MockEmailSender::new());
        let service = ContactService::new(sender.clone());

        service.submit(valid_form()).await.expect("delivered");

        let sent = sender.sent_emails();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].subject, "Portfolio Contact: Hello");
        assert_eq!(sent[0].reply_to, "ada@example.com");
        assert_eq!(sent[0].visitor_name, "Ada Lovelace");
        assert!(sent[0].html_body.contains("I enjoyed your projects page."));
    }

    #[tokio::test]
    async fn html_in_submission_is_escaped_in_the_body() {
        let sender = Arc::new(MockEmailSender::new());
        let service = ContactService::new(sender.clone());

        let mut form = valid_form();
        form.message = "<script>alert('x')</script>".into();
        service.submit(form).await.expect("delivered");

        let body = &sender.sent_emails()[0].html_body;
        assert!(body.contains("&lt;script&gt;"));
        assert!(!body.contains("<script>"));
    }

    #[tokio::test]
    async fn invalid_submission_never_reaches_the_provider() {
        let sender = Arc::new(MockEmailSender::new());
        let service = ContactService::new(sender.clone());

        let mut form = valid_form();
        form.email = "not-an-email".into();
        let err = service.submit(form).await.unwrap_err();

        assert!(matches!(
            err,
            SubmitContactError::Validation(ValidationError::InvalidEmail)
        ));
        assert_eq!(sender.send_count(), 0);

        let mut form = valid_form();
        form.name.clear();
        let err = service.submit(form).await.unwrap_err();
        assert!(matches!(
            err,
            SubmitContactError::Validation(ValidationError::MissingField)
        ));
        assert_eq!(sender.send_count(), 0);
    }

    #[tokio::test]
    async fn unconfigured_service_rejects_after_validation() {
        let service = ContactService::unconfigured();

        let err = service.submit(valid_form()).await.unwrap_err();
        assert!(matches!(err, SubmitContactError::NotConfigured));

        // Validation still runs first
        let mut form = valid_form();
        form.subject.clear();
        let err = service.submit(form).await.unwrap_err();
        assert!(matches!(err, SubmitContactError::Validation(_)));
    }

    #[tokio::test]
    async fn provider_errors_map_to_distinct_kinds() {
        let cases: [(EmailSendError, fn(&SubmitContactError) -> bool); 3] = [
            (
                EmailSendError::Auth("535".into()),
                |e: &SubmitContactError| matches!(e, SubmitContactError::ProviderAuth(_)),
            ),
            (
                EmailSendError::Connection("refused".into()),
                |e: &SubmitContactError| matches!(e, SubmitContactError::ProviderConnection(_)),
            ),
            (
                EmailSendError::Other("4xx".into()),
                |e: &SubmitContactError| matches!(e, SubmitContactError::ProviderUnknown(_)),
            ),
        ];

        for (send_err, is_expected) in cases {
            let sender = Arc::new(MockEmailSender::failing(send_err));
            let service = ContactService::new(sender);
            let err = service.submit(valid_form()).await.unwrap_err();
            assert!(is_expected(&err), "unexpected mapping: {err:?}");
        }
    }

    mockall::mock! {
        pub Sender {}
        #[async_trait]
        impl EmailSender for Sender {
            async fn send_email(
                &self,
                visitor_name: &str,
                reply_to: &str,
                subject: &str,
                html_body: &str,
            ) -> Result<(), EmailSendError>;
        }
    }

    #[tokio::test]
    async fn rejected_submission_makes_zero_provider_calls() {
        let mut sender = MockSender::new();
        sender.expect_send_email().times(0);
        let service = ContactService::new(Arc::new(sender));

        let mut form = valid_form();
        form.email = "missing-at-sign.example.com".into();
        let err = service.submit(form).await.unwrap_err();
        assert!(matches!(err, SubmitContactError::Validation(_)));
    }

    struct NeverResolvesSender;

    #[async_trait]
    impl EmailSender for NeverResolvesSender {
        async fn send_email(
            &self,
            _visitor_name: &str,
            _reply_to: &str,
            _subject: &str,
            _html_body: &str,
        ) -> Result<(), EmailSendError> {
            std::future::pending().await
        }
    }

    #[tokio::test(start_paused = true)]
    async fn hung_provider_times_out_at_the_bound() {
        let service = ContactService::new(Arc::new(NeverResolvesSender));

        let started = tokio::time::Instant::now();
        let err = service.submit(valid_form()).await.unwrap_err();

        assert!(matches!(err, SubmitContactError::ProviderTimeout));
        // Not immediate, not indefinite: exactly the bound under paused time.
        assert_eq!(started.elapsed(), SEND_TIMEOUT);
    }
}
