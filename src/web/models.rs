use crate::config::SiteConfig;
use crate::constants::{
    ABOUT_PATH, COMPANY_ADDRESS, COMPANY_EMAIL, COMPANY_NAME, COMPANY_PHONE, CONTACT_PATH, HOME_PATH,
    QUOTE_PATH, RESOURCES_PATH, SERVICES_PATH,
};
use crate::contact::ContactForm;
use crate::content::{ContentRegistry, ServiceOffering};
use crate::seo::PageMeta;

pub const CARD_FEATURE_LIMIT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "Home", href: HOME_PATH },
    NavLink { label: "Services", href: SERVICES_PATH },
    NavLink { label: "About", href: ABOUT_PATH },
    NavLink { label: "Resources", href: RESOURCES_PATH },
    NavLink { label: "Contact", href: CONTACT_PATH },
];

/// Everything the base layout needs: metadata, navigation and the analytics id.
#[derive(Debug, Clone)]
pub struct Layout {
    pub meta: PageMeta,
    /// False for status pages: no canonical or social tags, and `noindex`.
    pub indexable: bool,
    pub current_path: String,
    pub nav: &'static [NavLink],
    pub analytics_id: Option<String>,
    pub company_name: &'static str,
    pub company_email: &'static str,
    pub company_phone: &'static str,
    pub company_address: &'static str,
    pub quote_path: &'static str,
    pub year: i32,
}

impl Layout {
    pub fn new(config: &SiteConfig, meta: PageMeta, current_path: &str) -> Self {
        Self {
            meta,
            indexable: true,
            current_path: current_path.to_string(),
            nav: NAV_LINKS,
            analytics_id: config.analytics.tracking_id.clone(),
            company_name: COMPANY_NAME,
            company_email: COMPANY_EMAIL,
            company_phone: COMPANY_PHONE,
            company_address: COMPANY_ADDRESS,
            quote_path: QUOTE_PATH,
            year: chrono::Datelike::year(&chrono::Utc::now()),
        }
    }

    /// Status page layout. Nothing from the request is reflected into it.
    pub fn status(config: &SiteConfig, page_title: &str) -> Self {
        let mut layout = Self::new(config, PageMeta::status(page_title), "");
        layout.indexable = false;
        layout
    }

    /// Status page layout for responses rendered without access to app state.
    pub fn bare(page_title: &str) -> Self {
        let mut layout = Self::status(&SiteConfig::default(), page_title);
        layout.analytics_id = None;
        layout
    }

    pub fn is_active(&self, href: &str) -> bool {
        if href == HOME_PATH {
            self.current_path == HOME_PATH
        } else {
            self.current_path.starts_with(href)
        }
    }
}

/// Card projection of a service offering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceCard {
    pub title: &'static str,
    pub href: String,
    pub short_description: &'static str,
    pub icon: &'static str,
    pub image: &'static str,
    pub features: Vec<&'static str>,
}

impl From<&ServiceOffering> for ServiceCard {
    fn from(service: &ServiceOffering) -> Self {
        Self {
            title: service.title,
            href: crate::constants::service_path(service.slug),
            short_description: service.short_description,
            icon: service.icon,
            image: service.image,
            features: service.features.iter().take(CARD_FEATURE_LIMIT).copied().collect(),
        }
    }
}

pub fn service_cards(registry: &ContentRegistry) -> Vec<ServiceCard> {
    registry.all().iter().map(ServiceCard::from).collect()
}

/// One `<option>` of the service picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceOption {
    pub slug: &'static str,
    pub title: &'static str,
    pub selected: bool,
}

pub fn service_options(registry: &ContentRegistry, selected: Option<&str>) -> Vec<ServiceOption> {
    registry
        .all()
        .iter()
        .map(|s| ServiceOption {
            slug: s.slug,
            title: s.title,
            selected: selected == Some(s.slug),
        })
        .collect()
}

/// Form values echoed back into the inputs, blanks for absent fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFormValues {
    pub name: String,
    pub email: String,
    pub company: String,
    pub phone: String,
    pub origin: String,
    pub destination: String,
    pub message: String,
}

impl From<&ContactForm> for ContactFormValues {
    fn from(form: &ContactForm) -> Self {
        let text = |v: &Option<String>| v.clone().unwrap_or_default();
        Self {
            name: form.name.clone(),
            email: form.email.clone(),
            company: text(&form.company),
            phone: text(&form.phone),
            origin: text(&form.origin),
            destination: text(&form.destination),
            message: form.message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_keeps_first_three_features() {
        let fcl = ContentRegistry::global().by_slug("fcl").unwrap();
        let card = ServiceCard::from(fcl);
        assert_eq!(card.href, "/services/fcl");
        assert_eq!(card.features.len(), CARD_FEATURE_LIMIT);
        assert_eq!(card.features[0], fcl.features[0]);
    }

    #[test]
    fn cards_follow_registry_order() {
        let registry = ContentRegistry::global();
        let cards = service_cards(registry);
        assert_eq!(cards.len(), registry.len());
        assert_eq!(cards[0].title, registry.all()[0].title);
    }

    #[test]
    fn selected_option_is_marked() {
        let options = service_options(ContentRegistry::global(), Some("reefer"));
        assert_eq!(options.iter().filter(|o| o.selected).count(), 1);
        assert!(options.iter().find(|o| o.slug == "reefer").unwrap().selected);
    }

    #[test]
    fn nav_highlights_section() {
        let config = SiteConfig::default();
        let layout = Layout::new(&config, PageMeta::home(&config.base_url), "/services/fcl");
        assert!(layout.is_active(SERVICES_PATH));
        assert!(!layout.is_active(HOME_PATH));
    }

    #[test]
    fn status_layout_carries_no_urls() {
        let mut config = SiteConfig::default();
        config.analytics.tracking_id = Some("G-TEST".to_string());
        let layout = Layout::status(&config, "Page Not Found");

        assert!(!layout.indexable);
        assert!(layout.meta.canonical_url.is_empty());
        assert_eq!(layout.analytics_id.as_deref(), Some("G-TEST"));
        assert!(NAV_LINKS.iter().all(|link| !layout.is_active(link.href)));
        assert!(Layout::bare("Something Went Wrong").analytics_id.is_none());
    }
}
