use askama::Template;

use crate::contact::ValidationErrors;
use crate::content::company::{Certification, Resource, Stat};
use crate::content::ServiceOffering;
use crate::web::models::{ContactFormValues, Layout, ServiceCard, ServiceOption};

#[derive(Template)]
#[template(path = "index.html")]
pub struct HomeTemplate {
    pub layout: Layout,
    pub services: Vec<ServiceCard>,
    pub stats: &'static [Stat],
    pub certifications: &'static [Certification],
}

#[derive(Template)]
#[template(path = "services.html")]
pub struct ServicesTemplate {
    pub layout: Layout,
    pub services: Vec<ServiceCard>,
}

#[derive(Template)]
#[template(path = "service_detail.html")]
pub struct ServiceDetailTemplate {
    pub layout: Layout,
    pub service: &'static ServiceOffering,
    pub related: Vec<ServiceCard>,
}

#[derive(Template)]
#[template(path = "about.html")]
pub struct AboutTemplate {
    pub layout: Layout,
    pub stats: &'static [Stat],
    pub certifications: &'static [Certification],
}

#[derive(Template)]
#[template(path = "resources.html")]
pub struct ResourcesTemplate {
    pub layout: Layout,
    pub resources: &'static [Resource],
}

#[derive(Template)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    pub layout: Layout,
    pub heading: &'static str,
    pub intro: &'static str,
    pub action: &'static str,
    pub is_quote: bool,
    pub values: ContactFormValues,
    pub errors: ValidationErrors,
    pub services: Vec<ServiceOption>,
    pub submitted: bool,
}

#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub layout: Layout,
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub layout: Layout,
}
