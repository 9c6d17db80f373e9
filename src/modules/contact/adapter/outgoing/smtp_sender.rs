use crate::contact::application::ports::outgoing::email_sender::{EmailSendError, EmailSender};
use async_trait::async_trait;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{
    message::header::ContentType, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: Message) -> Result<(), EmailSendError>;
}

#[async_trait]
impl Mailer for AsyncSmtpTransport<Tokio1Executor> {
    async fn send(&self, email: Message) -> Result<(), EmailSendError> {
        AsyncTransport::send(self, email)
            .await
            .map(|_resp| ())
            .map_err(|e| classify_smtp_error(&e))
    }
}

/// Credential rejections come back from the relay as permanent 5xx responses;
/// anything that never produced a response is a connect/TLS/DNS problem.
fn classify_smtp_error(err: &lettre::transport::smtp::Error) -> EmailSendError {
    if err.is_permanent() {
        EmailSendError::Auth(err.to_string())
    } else if err.is_transient() {
        EmailSendError::Other(err.to_string())
    } else {
        EmailSendError::Connection(err.to_string())
    }
}

/// Sends contact notifications through an SMTP relay. The fixed from-address
/// and recipient are configured once; only the display name, reply-to and
/// content vary per submission.
pub struct SmtpEmailSender {
    mailer: Box<dyn Mailer>,
    from_email: String,
    recipient: String,
}

impl SmtpEmailSender {
    pub fn new_with_mailer(mailer: Box<dyn Mailer>, from_email: &str, recipient: &str) -> Self {
        Self {
            mailer,
            from_email: from_email.to_string(),
            recipient: recipient.to_string(),
        }
    }

    pub fn new(
        relay: &str,
        username: &str,
        password: &str,
        recipient: &str,
    ) -> Result<Self, lettre::transport::smtp::Error> {
        let creds = Credentials::new(username.to_string(), password.to_string());

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(relay)?
            .credentials(creds)
            .build();

        Ok(Self {
            mailer: Box::new(transport),
            from_email: username.to_string(),
            recipient: recipient.to_string(),
        })
    }

    fn build_message(
        &self,
        visitor_name: &str,
        reply_to: &str,
        subject: &str,
        html_body: &str,
    ) -> Result<Message, EmailSendError> {
        // Display name on the fixed from-address; quotes would break the
        // mailbox syntax.
        let from = format!(
            "\"{}\" <{}>",
            visitor_name.replace('"', ""),
            self.from_email
        );

        Message::builder()
            .from(
                from.parse()
                    .map_err(|e| EmailSendError::InvalidMessage(format!("{e:?}")))?,
            )
            .to(self
                .recipient
                .parse()
                .map_err(|e| EmailSendError::InvalidMessage(format!("{e:?}")))?)
            .reply_to(
                reply_to
                    .parse()
                    .map_err(|e| EmailSendError::InvalidMessage(format!("{e:?}")))?,
            )
            .subject(subject)
            .header(ContentType::TEXT_HTML)
            .body(html_body.to_string())
            .map_err(|e| EmailSendError::InvalidMessage(e.to_string()))
    }
}

#[async_trait]
impl EmailSender for SmtpEmailSender {
    async fn send_email(
        &self,
        visitor_name: &str,
        reply_to: &str,
        subject: &str,
        html_body: &str,
    ) -> Result<(), EmailSendError> {
        let email = self.build_message(visitor_name, reply_to, subject, html_body)?;
        self.mailer.send(email).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct OkMailer;
    #[async_trait]
    impl Mailer for OkMailer {
        async fn send(&self, _email: Message) -> Result<(), EmailSendError> {
            Ok(())
        }
    }

    struct UnreachableMailer;
    #[async_trait]
    impl Mailer for UnreachableMailer {
        async fn send(&self, _email: Message) -> Result<(), EmailSendError> {
            panic!("message building should have failed before send");
        }
    }

    #[tokio::test]
    async fn sends_a_well_formed_message() {
        let sender =
            SmtpEmailSender::new_with_mailer(Box::new(OkMailer), "me@example.com", "me@example.com");

        let result = sender
            .send_email("Ada Lovelace", "ada@example.com", "Hello", "<p>Hi</p>")
            .await;

        assert!(result.is_ok(), "expected Ok, got {result:?}");
    }

    #[tokio::test]
    async fn invalid_reply_to_fails_before_reaching_the_mailer() {
        let sender = SmtpEmailSender::new_with_mailer(
            Box::new(UnreachableMailer),
            "me@example.com",
            "me@example.com",
        );

        let result = sender
            .send_email("Ada", "not an address", "Hello", "<p>Hi</p>")
            .await;

        assert!(matches!(result, Err(EmailSendError::InvalidMessage(_))));
    }

    #[tokio::test]
    async fn invalid_recipient_fails_before_reaching_the_mailer() {
        let sender = SmtpEmailSender::new_with_mailer(
            Box::new(UnreachableMailer),
            "me@example.com",
            "not-a-recipient",
        );

        let result = sender
            .send_email("Ada", "ada@example.com", "Hello", "<p>Hi</p>")
            .await;

        assert!(matches!(result, Err(EmailSendError::InvalidMessage(_))));
    }

    #[tokio::test]
    async fn quotes_in_visitor_name_do_not_break_the_from_mailbox() {
        let sender =
            SmtpEmailSender::new_with_mailer(Box::new(OkMailer), "me@example.com", "me@example.com");

        let result = sender
            .send_email("Ada \"the\" Lovelace", "ada@example.com", "Hi", "<p>x</p>")
            .await;

        assert!(result.is_ok(), "expected Ok, got {result:?}");
    }
}
