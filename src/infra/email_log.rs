use async_trait::async_trait;
use tracing::info;

use crate::app::ports::{EmailReceipt, EmailSender};
use crate::contact::ContactRequest;
use crate::error::Result;

/// Non-production sender: records the message in the log and never touches
/// the network.
#[derive(Debug, Default, Clone)]
pub struct LogEmailSender;

#[async_trait]
impl EmailSender for LogEmailSender {
    async fn send(&self, request: &ContactRequest) -> Result<EmailReceipt> {
        info!(
            to = %request.to,
            reply_to = request.reply_to.as_deref().unwrap_or("-"),
            subject = %request.subject,
            html_bytes = request.html.len(),
            "Email not sent outside production; logged instead"
        );
        crate::observability::metrics::contact::email_logged();
        Ok(EmailReceipt { id: None, delivered: false })
    }

    fn name(&self) -> &'static str {
        "log"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn logs_and_succeeds() {
        let request = ContactRequest::new("a@b.com", "Quote Request", "<p>hi</p>");
        let receipt = LogEmailSender.send(&request).await.unwrap();
        assert!(!receipt.delivered);
        assert!(receipt.id.is_none());
    }
}
