use chrono::Utc;
use serde::Serialize;
use serde_json::{json, Map, Value};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::analytics::AnalyticsCommand;
use crate::app::ports::{AnalyticsBeacon, EmailReceipt, EmailSender};
use crate::contact::{ContactForm, ContactRequest, ValidationErrors};
use crate::content::ContentRegistry;
use crate::error::{Result, SiteError};

/// Result of handling one submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionReceipt {
    pub id: String,
    pub delivered: bool,
    pub provider_id: Option<String>,
}

#[derive(Debug)]
pub enum SubmissionError {
    /// The form failed validation and never reached the sender.
    Invalid(ValidationErrors),
    /// Rendering or sending failed.
    Failed(SiteError),
}

impl From<SiteError> for SubmissionError {
    fn from(e: SiteError) -> Self {
        SubmissionError::Failed(e)
    }
}

/// Validate a submission, render it, then make one send attempt.
pub struct ContactUseCase {
    sender: Arc<dyn EmailSender>,
    beacon: Arc<dyn AnalyticsBeacon>,
    registry: &'static ContentRegistry,
    inbox: String,
}

impl ContactUseCase {
    pub fn new(
        sender: Arc<dyn EmailSender>,
        beacon: Arc<dyn AnalyticsBeacon>,
        registry: &'static ContentRegistry,
        inbox: impl Into<String>,
    ) -> Self {
        Self {
            sender,
            beacon,
            registry,
            inbox: inbox.into(),
        }
    }

    pub async fn submit(&self, form: &ContactForm) -> std::result::Result<SubmissionReceipt, SubmissionError> {
        let kind = form.kind;
        crate::observability::metrics::contact::submitted(kind.as_str());

        let contact = form.validate(self.registry).map_err(|errors| {
            warn!(kind = kind.as_str(), errors = %errors, "Rejected contact submission");
            crate::observability::metrics::contact::rejected(kind.as_str());
            SubmissionError::Invalid(errors)
        })?;

        let id = Uuid::new_v4().to_string();
        let request = ContactRequest::from_submission(&contact, &self.inbox, self.registry, &id, Utc::now())?;
        let receipt = send_email(self.sender.as_ref(), &request).await?;

        info!(submission = %id, kind = kind.as_str(), sender = self.sender.name(), "Contact submission handled");

        let mut params = Map::new();
        params.insert("inquiry".to_string(), json!(kind.as_str()));
        if let Some(service) = &contact.service {
            params.insert("service".to_string(), Value::String(service.clone()));
        }
        self.beacon.dispatch(AnalyticsCommand::event("generate_lead", params));

        Ok(SubmissionReceipt {
            id,
            delivered: receipt.delivered,
            provider_id: receipt.id,
        })
    }
}

/// Single delivery attempt through whichever strategy was wired at startup.
pub async fn send_email(sender: &dyn EmailSender, request: &ContactRequest) -> Result<EmailReceipt> {
    sender.send(request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::InquiryKind;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingSender {
        sent: Mutex<Vec<ContactRequest>>,
        fail_with: Option<String>,
    }

    #[async_trait]
    impl EmailSender for RecordingSender {
        async fn send(&self, request: &ContactRequest) -> Result<EmailReceipt> {
            self.sent.lock().unwrap().push(request.clone());
            match &self.fail_with {
                Some(body) => Err(SiteError::EmailProvider { status: 500, body: body.clone() }),
                None => Ok(EmailReceipt { id: Some("msg_1".to_string()), delivered: true }),
            }
        }

        fn name(&self) -> &'static str {
            "recording"
        }
    }

    #[derive(Default)]
    struct RecordingBeacon {
        commands: Mutex<Vec<AnalyticsCommand>>,
    }

    impl AnalyticsBeacon for RecordingBeacon {
        fn dispatch(&self, command: AnalyticsCommand) {
            self.commands.lock().unwrap().push(command);
        }
    }

    fn form() -> ContactForm {
        ContactForm {
            kind: InquiryKind::Quote,
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            service: Some("lcl".to_string()),
            message: "3 CBM to Rotterdam".to_string(),
            ..ContactForm::default()
        }
    }

    fn use_case(sender: Arc<RecordingSender>, beacon: Arc<RecordingBeacon>) -> ContactUseCase {
        ContactUseCase::new(sender, beacon, ContentRegistry::global(), "sales@example.com")
    }

    #[tokio::test]
    async fn valid_submission_is_sent_and_tracked() {
        let sender = Arc::new(RecordingSender::default());
        let beacon = Arc::new(RecordingBeacon::default());
        let receipt = use_case(sender.clone(), beacon.clone()).submit(&form()).await.unwrap();

        assert!(receipt.delivered);
        assert_eq!(receipt.provider_id.as_deref(), Some("msg_1"));

        let sent = sender.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to, "sales@example.com");
        assert_eq!(sent[0].reply_to.as_deref(), Some("ada@example.com"));
        assert_eq!(sent[0].subject, "Quote Request from Ada");

        let commands = beacon.commands.lock().unwrap();
        assert_eq!(commands.len(), 1);
        assert!(matches!(&commands[0], AnalyticsCommand::Event { name, .. } if name == "generate_lead"));
    }

    #[tokio::test]
    async fn invalid_submission_never_reaches_sender() {
        let sender = Arc::new(RecordingSender::default());
        let beacon = Arc::new(RecordingBeacon::default());
        let mut bad = form();
        bad.email = "nope".to_string();

        let err = use_case(sender.clone(), beacon.clone()).submit(&bad).await.unwrap_err();
        assert!(matches!(err, SubmissionError::Invalid(ref e) if e.has("email")));
        assert!(sender.sent.lock().unwrap().is_empty());
        assert!(beacon.commands.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn provider_failure_is_surfaced_and_not_tracked() {
        let sender = Arc::new(RecordingSender {
            fail_with: Some("rate limited".to_string()),
            ..RecordingSender::default()
        });
        let beacon = Arc::new(RecordingBeacon::default());

        let err = use_case(sender.clone(), beacon.clone()).submit(&form()).await.unwrap_err();
        match err {
            SubmissionError::Failed(e) => assert!(e.to_string().contains("rate limited")),
            other => panic!("unexpected error: {:?}", other),
        }
        assert_eq!(sender.sent.lock().unwrap().len(), 1);
        assert!(beacon.commands.lock().unwrap().is_empty());
    }
}
