//! Metrics for the site, recorded through the `metrics` facade and exported
//! in Prometheus text format at `/metrics`.
//!
//! Recording is a no-op until [`init`] installs the recorder, so library code
//! and tests can call the helpers unconditionally.

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;
use std::fmt;
use tracing::info;

/// All metric names used by the site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricName {
    PageViews,
    SitemapBuilds,
    SitemapEntries,
    ContactSubmissions,
    ContactRejected,
    EmailsSent,
    EmailsLogged,
    EmailsFailed,
    AnalyticsDispatched,
    AnalyticsFailed,
}

impl MetricName {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricName::PageViews => "site_page_views_total",
            MetricName::SitemapBuilds => "site_sitemap_builds_total",
            MetricName::SitemapEntries => "site_sitemap_entries",
            MetricName::ContactSubmissions => "site_contact_submissions_total",
            MetricName::ContactRejected => "site_contact_rejected_total",
            MetricName::EmailsSent => "site_emails_sent_total",
            MetricName::EmailsLogged => "site_emails_logged_total",
            MetricName::EmailsFailed => "site_emails_failed_total",
            MetricName::AnalyticsDispatched => "site_analytics_dispatched_total",
            MetricName::AnalyticsFailed => "site_analytics_failed_total",
        }
    }

    pub fn all_metrics() -> impl Iterator<Item = MetricName> {
        use MetricName::*;
        [
            PageViews,
            SitemapBuilds,
            SitemapEntries,
            ContactSubmissions,
            ContactRejected,
            EmailsSent,
            EmailsLogged,
            EmailsFailed,
            AnalyticsDispatched,
            AnalyticsFailed,
        ]
        .into_iter()
    }
}

impl fmt::Display for MetricName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

static METRICS_HANDLE: OnceCell<PrometheusHandle> = OnceCell::new();

/// Install the Prometheus recorder. Safe to call more than once.
pub fn init() -> Result<(), Box<dyn std::error::Error>> {
    if METRICS_HANDLE.get().is_some() {
        return Ok(());
    }
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| format!("Failed to install Prometheus recorder: {}", e))?;
    METRICS_HANDLE.set(handle).ok();
    info!("Metrics recorder installed");
    Ok(())
}

/// Current exposition text, empty when no recorder is installed.
pub fn render() -> String {
    METRICS_HANDLE.get().map(|h| h.render()).unwrap_or_default()
}

pub mod site {
    use super::MetricName;

    pub fn page_viewed(path: &str) {
        ::metrics::counter!(MetricName::PageViews.as_str(), "path" => path.to_string()).increment(1);
    }

    pub fn sitemap_built(entries: usize) {
        ::metrics::counter!(MetricName::SitemapBuilds.as_str()).increment(1);
        ::metrics::gauge!(MetricName::SitemapEntries.as_str()).set(entries as f64);
    }
}

pub mod contact {
    use super::MetricName;

    pub fn submitted(kind: &str) {
        ::metrics::counter!(MetricName::ContactSubmissions.as_str(), "kind" => kind.to_string())
            .increment(1);
    }

    pub fn rejected(kind: &str) {
        ::metrics::counter!(MetricName::ContactRejected.as_str(), "kind" => kind.to_string())
            .increment(1);
    }

    pub fn email_sent() {
        ::metrics::counter!(MetricName::EmailsSent.as_str()).increment(1);
    }

    pub fn email_logged() {
        ::metrics::counter!(MetricName::EmailsLogged.as_str()).increment(1);
    }

    pub fn email_failed() {
        ::metrics::counter!(MetricName::EmailsFailed.as_str()).increment(1);
    }
}

pub mod analytics {
    use super::MetricName;

    pub fn dispatched(command: &str) {
        ::metrics::counter!(MetricName::AnalyticsDispatched.as_str(), "command" => command.to_string())
            .increment(1);
    }

    pub fn failed() {
        ::metrics::counter!(MetricName::AnalyticsFailed.as_str()).increment(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn metric_names_are_unique_and_prefixed() {
        let names: Vec<&str> = MetricName::all_metrics().map(|m| m.as_str()).collect();
        let unique: HashSet<&str> = names.iter().copied().collect();
        assert_eq!(names.len(), unique.len());
        assert!(names.iter().all(|n| n.starts_with("site_")));
    }

    #[test]
    fn recording_without_recorder_is_harmless() {
        site::sitemap_built(3);
        contact::email_logged();
        analytics::failed();
    }
}
