//! Route and company constants shared by the router, sitemap and templates.

pub const COMPANY_NAME: &str = "Harborline Ocean Freight";
pub const COMPANY_TAGLINE: &str = "Reliable ocean freight from port to door";
pub const COMPANY_EMAIL: &str = "sales@harborlinefreight.com";
pub const COMPANY_PHONE: &str = "+1 (562) 555-0148";
pub const COMPANY_ADDRESS: &str = "300 Harbor Plaza, Suite 1200, Long Beach, CA 90802";

// Page paths (relative to the base URL)
pub const HOME_PATH: &str = "/";
pub const SERVICES_PATH: &str = "/services";
pub const ABOUT_PATH: &str = "/about";
pub const RESOURCES_PATH: &str = "/resources";
pub const CONTACT_PATH: &str = "/contact";
pub const QUOTE_PATH: &str = "/request-quote";

// Machine-facing paths
pub const SITEMAP_PATH: &str = "/sitemap.xml";
pub const ROBOTS_PATH: &str = "/robots.txt";
pub const HEALTH_PATH: &str = "/health";
pub const METRICS_PATH: &str = "/metrics";
pub const STATIC_PREFIX: &str = "/static";
pub const API_PREFIX: &str = "/api";

pub const DEFAULT_OG_IMAGE: &str = "/static/images/og-default.svg";

/// Path of a service detail page for the given slug.
pub fn service_path(slug: &str) -> String {
    format!("{}/{}", SERVICES_PATH, slug)
}
