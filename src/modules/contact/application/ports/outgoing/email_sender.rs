use async_trait::async_trait;

/// Provider failures, already classified so the handler can map them to
/// distinct user-facing messages and status codes without knowing the
/// transport.
#[derive(Debug, Clone, thiserror::Error)]
pub enum EmailSendError {
    #[error("authentication rejected: {0}")]
    Auth(String),

    #[error("connection failed: {0}")]
    Connection(String),

    #[error("invalid message: {0}")]
    InvalidMessage(String),

    #[error("{0}")]
    Other(String),
}

#[async_trait]
pub trait EmailSender: Send + Sync {
    /// Delivers one contact notification. `visitor_name` becomes the display
    /// name on the fixed from-address and `reply_to` the visitor's own
    /// address, so replying in a mail client goes back to the visitor.
    async fn send_email(
        &self,
        visitor_name: &str,
        reply_to: &str,
        subject: &str,
        html_body: &str,
    ) -> Result<(), EmailSendError>;
}
