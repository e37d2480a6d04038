//! Sitemap projection: static pages followed by one entry per registered service.
//!
//! Priorities and change frequencies are hand-assigned per page category and
//! kept as data in [`STATIC_PAGES`] and [`SERVICE_PAGE`].

use askama::Template;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use std::fmt;

use crate::config::normalize_base_url;
use crate::constants::{ABOUT_PATH, CONTACT_PATH, QUOTE_PATH, RESOURCES_PATH, SERVICES_PATH};
use crate::content::ContentRegistry;
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeFrequency::Always => "always",
            ChangeFrequency::Hourly => "hourly",
            ChangeFrequency::Daily => "daily",
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
            ChangeFrequency::Yearly => "yearly",
            ChangeFrequency::Never => "never",
        }
    }
}

impl fmt::Display for ChangeFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Crawl hints for one class of page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageHints {
    pub path: &'static str,
    pub change_frequency: ChangeFrequency,
    pub priority: f32,
}

/// Static pages in the order they are emitted. The home page has an empty path
/// so its URL is the bare base URL.
pub const STATIC_PAGES: &[PageHints] = &[
    PageHints { path: "", change_frequency: ChangeFrequency::Weekly, priority: 1.0 },
    PageHints { path: SERVICES_PATH, change_frequency: ChangeFrequency::Weekly, priority: 0.9 },
    PageHints { path: ABOUT_PATH, change_frequency: ChangeFrequency::Monthly, priority: 0.7 },
    PageHints { path: RESOURCES_PATH, change_frequency: ChangeFrequency::Monthly, priority: 0.6 },
    PageHints { path: CONTACT_PATH, change_frequency: ChangeFrequency::Yearly, priority: 0.7 },
    PageHints { path: QUOTE_PATH, change_frequency: ChangeFrequency::Monthly, priority: 0.8 },
];

/// Hints shared by every service detail page; `path` is the prefix.
pub const SERVICE_PAGE: PageHints = PageHints {
    path: SERVICES_PATH,
    change_frequency: ChangeFrequency::Monthly,
    priority: 0.8,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SitemapEntry {
    pub url: String,
    pub last_modified: DateTime<Utc>,
    pub change_frequency: ChangeFrequency,
    pub priority: f32,
}

impl SitemapEntry {
    /// W3C datetime with second precision, as crawlers expect in `<lastmod>`.
    pub fn lastmod(&self) -> String {
        self.last_modified.to_rfc3339_opts(SecondsFormat::Secs, true)
    }

    pub fn priority_text(&self) -> String {
        format!("{:.1}", self.priority)
    }
}

/// Builds sitemap entries for a base URL. `last_modified` is fixed at
/// construction so repeated builds are identical.
#[derive(Debug, Clone)]
pub struct SitemapBuilder {
    base_url: String,
    last_modified: DateTime<Utc>,
}

impl SitemapBuilder {
    pub fn new(base_url: &str, last_modified: DateTime<Utc>) -> Self {
        Self {
            base_url: normalize_base_url(base_url),
            last_modified,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build(&self, registry: &ContentRegistry) -> Vec<SitemapEntry> {
        let static_entries = STATIC_PAGES
            .iter()
            .map(|page| self.entry(format!("{}{}", self.base_url, page.path), page));

        let service_entries = registry.all().iter().map(|service| {
            self.entry(
                format!("{}{}/{}", self.base_url, SERVICE_PAGE.path, service.slug),
                &SERVICE_PAGE,
            )
        });

        let entries: Vec<SitemapEntry> = static_entries.chain(service_entries).collect();
        crate::observability::metrics::site::sitemap_built(entries.len());
        entries
    }

    fn entry(&self, url: String, hints: &PageHints) -> SitemapEntry {
        SitemapEntry {
            url,
            last_modified: self.last_modified,
            change_frequency: hints.change_frequency,
            priority: hints.priority,
        }
    }
}

#[derive(Template)]
#[template(path = "sitemap.xml")]
struct SitemapTemplate<'a> {
    entries: &'a [SitemapEntry],
}

/// Render entries as a sitemaps.org `urlset` document.
pub fn render_xml(entries: &[SitemapEntry]) -> Result<String> {
    Ok(SitemapTemplate { entries }.render()?)
}

/// robots.txt allowing everything but the API and pointing crawlers at the sitemap.
pub fn render_robots(base_url: &str) -> String {
    format!(
        "User-agent: *\nAllow: /\nDisallow: {}/\n\nSitemap: {}{}\n",
        crate::constants::API_PREFIX,
        normalize_base_url(base_url),
        crate::constants::SITEMAP_PATH
    )
}
