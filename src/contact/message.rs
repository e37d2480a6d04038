use askama::Template;
use chrono::{DateTime, Utc};
use serde::Serialize;

use super::form::{InquiryKind, ValidatedContact};
use crate::content::ContentRegistry;
use crate::error::Result;

/// A message ready to hand to an email sender. Built per submission and
/// dropped after the send attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactRequest {
    pub to: String,
    pub reply_to: Option<String>,
    pub subject: String,
    pub html: String,
}

#[derive(Template)]
#[template(path = "emails/contact.html")]
struct ContactEmailTemplate<'a> {
    heading: &'a str,
    contact: &'a ValidatedContact,
    service_title: Option<&'a str>,
    submission_id: &'a str,
    submitted_at: String,
}

impl ContactRequest {
    pub fn new(to: impl Into<String>, subject: impl Into<String>, html: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            reply_to: None,
            subject: subject.into(),
            html: html.into(),
        }
    }

    pub fn with_reply_to(mut self, reply_to: impl Into<String>) -> Self {
        self.reply_to = Some(reply_to.into());
        self
    }

    /// Render a validated submission into a message addressed to `inbox`,
    /// replying to the submitter.
    pub fn from_submission(
        contact: &ValidatedContact,
        inbox: &str,
        registry: &ContentRegistry,
        submission_id: &str,
        submitted_at: DateTime<Utc>,
    ) -> Result<Self> {
        let service_title = contact
            .service
            .as_deref()
            .and_then(|slug| registry.by_slug(slug))
            .map(|s| s.title);

        let html = ContactEmailTemplate {
            heading: contact.kind.label(),
            contact,
            service_title,
            submission_id,
            submitted_at: submitted_at.format("%Y-%m-%d %H:%M UTC").to_string(),
        }
        .render()?;

        Ok(Self::new(inbox, subject_for(contact.kind, &contact.name), html).with_reply_to(&contact.email))
    }
}

pub fn subject_for(kind: InquiryKind, name: &str) -> String {
    match kind {
        InquiryKind::Quote => format!("Quote Request from {}", name),
        InquiryKind::General => format!("Contact Form: {}", name),
    }
}
