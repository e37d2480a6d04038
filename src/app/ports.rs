use async_trait::async_trait;

use crate::analytics::AnalyticsCommand;
use crate::contact::ContactRequest;
use crate::error::Result;

/// Outcome of a single delivery attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmailReceipt {
    /// Provider message id; `None` when the message was only logged.
    pub id: Option<String>,
    pub delivered: bool,
}

/// Transactional email strategy, chosen once at startup.
///
/// Implementations make at most one delivery attempt per call: no retries,
/// no queueing.
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, request: &ContactRequest) -> Result<EmailReceipt>;

    /// Short name for logs.
    fn name(&self) -> &'static str;
}

/// One-way analytics notification. Never blocks the caller and never
/// reports failure back.
pub trait AnalyticsBeacon: Send + Sync {
    fn dispatch(&self, command: AnalyticsCommand);
}
