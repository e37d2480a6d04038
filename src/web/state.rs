use chrono::Utc;
use std::sync::Arc;

use crate::app::ports::{AnalyticsBeacon, EmailSender};
use crate::app::ContactUseCase;
use crate::config::SiteConfig;
use crate::content::ContentRegistry;
use crate::error::Result;
use crate::infra::{analytics_beacon_for, email_sender_for};
use crate::sitemap::SitemapBuilder;

/// Shared, read-only state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<SiteConfig>,
    pub registry: &'static ContentRegistry,
    pub sitemap: SitemapBuilder,
    pub contact: Arc<ContactUseCase>,
    pub beacon: Arc<dyn AnalyticsBeacon>,
}

impl AppState {
    /// Wire strategies from configuration. Called once at startup.
    pub fn from_config(config: SiteConfig) -> Result<Self> {
        let sender = email_sender_for(&config)?;
        let beacon = analytics_beacon_for(&config);
        Ok(Self::with_parts(config, sender, beacon))
    }

    /// Explicit wiring, used by tests to inject senders and beacons.
    pub fn with_parts(
        config: SiteConfig,
        sender: Arc<dyn EmailSender>,
        beacon: Arc<dyn AnalyticsBeacon>,
    ) -> Self {
        let registry = ContentRegistry::global();
        let contact = ContactUseCase::new(sender, beacon.clone(), registry, config.email.inbox.clone());
        Self {
            sitemap: SitemapBuilder::new(&config.base_url, Utc::now()),
            config: Arc::new(config),
            registry,
            contact: Arc::new(contact),
            beacon,
        }
    }
}
