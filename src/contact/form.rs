use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::content::ContentRegistry;
use crate::error::SiteError;

pub const MAX_MESSAGE_LEN: usize = 5000;
pub const MAX_FIELD_LEN: usize = 200;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InquiryKind {
    #[default]
    General,
    Quote,
}

impl InquiryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InquiryKind::General => "general",
            InquiryKind::Quote => "quote",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            InquiryKind::General => "Contact Form",
            InquiryKind::Quote => "Quote Request",
        }
    }
}

/// Raw submission as posted by the browser (urlencoded) or the JSON API.
/// Blank optional fields are treated as absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub kind: InquiryKind,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub service: Option<String>,
    #[serde(default)]
    pub origin: Option<String>,
    #[serde(default)]
    pub destination: Option<String>,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

impl ValidationErrors {
    fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push(FieldError { field, message: message.into() });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn has(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    /// Message for a field, if it failed; used by the form templates.
    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .errors
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl From<ValidationErrors> for SiteError {
    fn from(errors: ValidationErrors) -> Self {
        SiteError::Validation(errors.to_string())
    }
}

/// A submission that passed validation, with every field trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedContact {
    pub kind: InquiryKind,
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub phone: Option<String>,
    pub service: Option<String>,
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub message: String,
}

fn clean(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

impl ContactForm {
    pub fn with_kind(mut self, kind: InquiryKind) -> Self {
        self.kind = kind;
        self
    }

    /// Check every field and report all problems at once.
    pub fn validate(&self, registry: &ContentRegistry) -> Result<ValidatedContact, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let name = self.name.trim();
        if name.is_empty() {
            errors.push("name", "Please enter your name");
        } else if name.chars().count() > MAX_FIELD_LEN {
            errors.push("name", format!("Name must be at most {} characters", MAX_FIELD_LEN));
        }

        let email = self.email.trim();
        if email.is_empty() {
            errors.push("email", "Please enter your email address");
        } else if !EMAIL_RE.is_match(email) {
            errors.push("email", "Please enter a valid email address");
        }

        let message = self.message.trim();
        if message.is_empty() {
            errors.push("message", "Please tell us how we can help");
        } else if message.chars().count() > MAX_MESSAGE_LEN {
            errors.push(
                "message",
                format!("Message must be at most {} characters", MAX_MESSAGE_LEN),
            );
        }

        let service = clean(&self.service);
        if let Some(slug) = service.as_deref() {
            if !registry.contains_slug(slug) {
                errors.push("service", "Please choose one of our services");
            }
        }

        for (field, value) in [
            ("company", &self.company),
            ("phone", &self.phone),
            ("origin", &self.origin),
            ("destination", &self.destination),
        ] {
            if clean(value).is_some_and(|v| v.chars().count() > MAX_FIELD_LEN) {
                errors.push(field, format!("Must be at most {} characters", MAX_FIELD_LEN));
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(ValidatedContact {
            kind: self.kind,
            name: name.to_string(),
            email: email.to_string(),
            company: clean(&self.company),
            phone: clean(&self.phone),
            service,
            origin: clean(&self.origin),
            destination: clean(&self.destination),
            message: message.to_string(),
        })
    }
}
