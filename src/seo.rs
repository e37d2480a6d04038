//! Per-page metadata: title, description, canonical URL and social image.

use crate::config::normalize_base_url;
use crate::constants::{COMPANY_NAME, COMPANY_TAGLINE, DEFAULT_OG_IMAGE, HOME_PATH};
use crate::content::ServiceOffering;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub canonical_url: String,
    pub og_image: String,
}

impl PageMeta {
    /// Metadata for a page at `path` (absolute, starting with `/`).
    pub fn new(base_url: &str, path: &str, page_title: &str, description: &str) -> Self {
        Self::with_image(base_url, path, page_title, description, DEFAULT_OG_IMAGE)
    }

    pub fn with_image(base_url: &str, path: &str, page_title: &str, description: &str, image: &str) -> Self {
        let base = normalize_base_url(base_url);
        Self {
            title: format!("{} | {}", page_title, COMPANY_NAME),
            description: description.to_string(),
            canonical_url: absolute_url(&base, path),
            og_image: absolute_url(&base, image),
        }
    }

    pub fn home(base_url: &str) -> Self {
        let base = normalize_base_url(base_url);
        Self {
            title: format!("{} | {}", COMPANY_NAME, COMPANY_TAGLINE),
            description: "FCL, LCL, reefer and project cargo shipping with customs brokerage and warehousing \
                under one roof."
                .to_string(),
            canonical_url: absolute_url(&base, HOME_PATH),
            og_image: absolute_url(&base, DEFAULT_OG_IMAGE),
        }
    }

    /// Metadata for error and not-found pages, which carry no URLs.
    pub fn status(page_title: &str) -> Self {
        Self {
            title: format!("{} | {}", page_title, COMPANY_NAME),
            description: String::new(),
            canonical_url: String::new(),
            og_image: String::new(),
        }
    }

    pub fn for_service(base_url: &str, service: &ServiceOffering) -> Self {
        Self::with_image(
            base_url,
            &crate::constants::service_path(service.slug),
            service.title,
            service.short_description,
            service.image,
        )
    }
}

/// Join a normalized base URL with a path; the home path maps to the bare base.
fn absolute_url(base: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    match path.trim_end_matches('/') {
        "" => base.to_string(),
        p if p.starts_with('/') => format!("{}{}", base, p),
        p => format!("{}/{}", base, p),
    }
}
