//! Content registry: the static catalog of service offerings and company facts.
//!
//! Everything here is immutable and built once on first access; there is no
//! write path.

pub mod company;
mod services;

use once_cell::sync::Lazy;
use serde::Serialize;

/// One service line the company sells. `slug` is unique across the registry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceOffering {
    pub id: u32,
    pub title: &'static str,
    pub slug: &'static str,
    pub short_description: &'static str,
    pub full_description: &'static str,
    pub features: Vec<&'static str>,
    pub icon: &'static str,
    pub image: &'static str,
    pub equipment: Option<Vec<&'static str>>,
    pub certifications: Option<Vec<&'static str>>,
}

/// Read-only view over a list of offerings.
///
/// The process-wide instance is [`ContentRegistry::global`]; tests build
/// their own with [`ContentRegistry::new`].
#[derive(Debug, Clone, PartialEq)]
pub struct ContentRegistry {
    services: Vec<ServiceOffering>,
}

static GLOBAL: Lazy<ContentRegistry> = Lazy::new(|| ContentRegistry::new(services::catalog()));

impl ContentRegistry {
    pub fn new(services: Vec<ServiceOffering>) -> Self {
        Self { services }
    }

    pub fn global() -> &'static ContentRegistry {
        &GLOBAL
    }

    /// All offerings in declaration order.
    pub fn all(&self) -> &[ServiceOffering] {
        &self.services
    }

    pub fn by_slug(&self, slug: &str) -> Option<&ServiceOffering> {
        self.services.iter().find(|s| s.slug == slug)
    }

    pub fn contains_slug(&self, slug: &str) -> bool {
        self.by_slug(slug).is_some()
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}
