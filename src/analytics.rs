//! Page-view and event reporting to the analytics collector.
//!
//! The command vocabulary mirrors the client-side `gtag` calls: `config`
//! for page views, `event` for custom events and `consent` for consent
//! updates.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// One observed navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyticsEvent {
    pub path: String,
    pub query: Option<String>,
}

impl AnalyticsEvent {
    pub fn new(path: impl Into<String>, query: Option<&str>) -> Self {
        Self {
            path: path.into(),
            query: query.map(str::to_string),
        }
    }

    pub fn page_path(&self) -> String {
        page_path(&self.path, self.query.as_deref())
    }
}

/// `path`, or `path?query` when a non-empty query string is present.
pub fn page_path(path: &str, query: Option<&str>) -> String {
    match query.map(|q| q.trim_start_matches('?')) {
        Some(q) if !q.is_empty() => format!("{}?{}", path, q),
        _ => path.to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsentState {
    Granted,
    Denied,
}

impl ConsentState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConsentState::Granted => "granted",
            ConsentState::Denied => "denied",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AnalyticsCommand {
    /// Page view for the given path (with query).
    Config { page_path: String },
    /// Custom event with a free-form parameter bag.
    Event { name: String, params: Map<String, Value> },
    /// Consent update for analytics storage.
    Consent { analytics_storage: ConsentState },
}

impl AnalyticsCommand {
    pub fn page_view(event: &AnalyticsEvent) -> Self {
        AnalyticsCommand::Config { page_path: event.page_path() }
    }

    pub fn event(name: impl Into<String>, params: Map<String, Value>) -> Self {
        AnalyticsCommand::Event { name: name.into(), params }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            AnalyticsCommand::Config { .. } => "config",
            AnalyticsCommand::Event { .. } => "event",
            AnalyticsCommand::Consent { .. } => "consent",
        }
    }

    /// Collector payload for this command: `{client_id, events: [{name, params}]}`.
    pub fn to_payload(&self, tracking_id: &str, client_id: &str) -> Value {
        let (name, params) = match self {
            AnalyticsCommand::Config { page_path } => (
                "page_view".to_string(),
                json!({ "send_to": tracking_id, "page_path": page_path }),
            ),
            AnalyticsCommand::Event { name, params } => {
                let mut params = params.clone();
                params.insert("send_to".to_string(), Value::String(tracking_id.to_string()));
                (name.clone(), Value::Object(params))
            }
            AnalyticsCommand::Consent { analytics_storage } => (
                "consent_update".to_string(),
                json!({ "send_to": tracking_id, "analytics_storage": analytics_storage.as_str() }),
            ),
        };
        json!({
            "client_id": client_id,
            "events": [{ "name": name, "params": params }],
        })
    }
}
