//! Adapters behind the app ports, plus the startup wiring that picks one
//! strategy per port from configuration.

pub mod analytics_http;
pub mod email_log;
pub mod resend;

use std::sync::Arc;
use tracing::info;

use crate::app::ports::{AnalyticsBeacon, EmailSender};
use crate::config::SiteConfig;
use crate::error::{Result, SiteError};

pub use analytics_http::{HttpBeacon, NoopBeacon};
pub use email_log::LogEmailSender;
pub use resend::ResendEmailSender;

/// Live sender in production, log-only sender everywhere else.
/// Production without an API key is a startup error.
pub fn email_sender_for(config: &SiteConfig) -> Result<Arc<dyn EmailSender>> {
    if !config.environment.is_production() {
        info!(environment = %config.environment, "Using log-only email sender");
        return Ok(Arc::new(LogEmailSender));
    }

    let api_key = config.email.api_key.clone().ok_or_else(|| {
        SiteError::Config("RESEND_API_KEY must be set in production".to_string())
    })?;
    info!(api_base = %config.email.api_base, "Using Resend email sender");
    Ok(Arc::new(ResendEmailSender::new(
        &config.email.api_base,
        api_key,
        config.email.from.clone(),
    )))
}

/// HTTP beacon when a tracking id is configured, otherwise a no-op.
pub fn analytics_beacon_for(config: &SiteConfig) -> Arc<dyn AnalyticsBeacon> {
    match config.analytics.tracking_id.as_deref() {
        Some(id) => {
            info!(tracking_id = id, "Analytics beacon enabled");
            Arc::new(HttpBeacon::new(&config.analytics.endpoint, id))
        }
        None => Arc::new(NoopBeacon),
    }
}
