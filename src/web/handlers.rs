use askama::Template;
use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    Form, Json,
};
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info};

use crate::analytics::{AnalyticsCommand, ConsentState};
use crate::app::SubmissionError;
use crate::constants::{self, CONTACT_PATH, QUOTE_PATH, RESOURCES_PATH, SERVICES_PATH};
use crate::contact::{ContactForm, InquiryKind, ValidationErrors};
use crate::content::company::{CERTIFICATIONS, RESOURCES, STATS};
use crate::error::{Result, SiteError};
use crate::seo::PageMeta;
use crate::sitemap::{render_robots, render_xml};
use crate::web::models::{service_cards, service_options, ContactFormValues, Layout, ServiceCard};
use crate::web::state::AppState;
use crate::web::templates::{
    AboutTemplate, ContactTemplate, ErrorTemplate, HomeTemplate, NotFoundTemplate, ResourcesTemplate,
    ServiceDetailTemplate, ServicesTemplate,
};

fn layout(state: &AppState, meta: PageMeta, path: &str) -> Layout {
    Layout::new(&state.config, meta, path)
}

pub async fn index(State(state): State<AppState>) -> Result<Html<String>> {
    let template = HomeTemplate {
        layout: layout(&state, PageMeta::home(&state.config.base_url), constants::HOME_PATH),
        services: service_cards(state.registry),
        stats: STATS,
        certifications: CERTIFICATIONS,
    };
    Ok(Html(template.render()?))
}

pub async fn services_list(State(state): State<AppState>) -> Result<Html<String>> {
    let meta = PageMeta::new(
        &state.config.base_url,
        SERVICES_PATH,
        "Ocean Freight Services",
        "FCL, LCL, refrigerated, project cargo, customs brokerage and warehousing services.",
    );
    let template = ServicesTemplate {
        layout: layout(&state, meta, SERVICES_PATH),
        services: service_cards(state.registry),
    };
    Ok(Html(template.render()?))
}

pub async fn service_page(State(state): State<AppState>, Path(slug): Path<String>) -> Result<Response> {
    let Some(service) = state.registry.by_slug(&slug) else {
        info!(slug = %slug, "Unknown service");
        return not_found_page(&state);
    };

    let related: Vec<ServiceCard> = state
        .registry
        .all()
        .iter()
        .filter(|s| s.slug != service.slug)
        .take(3)
        .map(ServiceCard::from)
        .collect();

    let path = constants::service_path(service.slug);
    let template = ServiceDetailTemplate {
        layout: layout(&state, PageMeta::for_service(&state.config.base_url, service), &path),
        service,
        related,
    };
    Ok(Html(template.render()?).into_response())
}

pub async fn about(State(state): State<AppState>) -> Result<Html<String>> {
    let meta = PageMeta::new(
        &state.config.base_url,
        constants::ABOUT_PATH,
        "About Us",
        "Family-owned NVOCC and licensed customs broker based in Long Beach, California.",
    );
    let template = AboutTemplate {
        layout: layout(&state, meta, constants::ABOUT_PATH),
        stats: STATS,
        certifications: CERTIFICATIONS,
    };
    Ok(Html(template.render()?))
}

pub async fn resources(State(state): State<AppState>) -> Result<Html<String>> {
    let meta = PageMeta::new(
        &state.config.base_url,
        RESOURCES_PATH,
        "Shipping Resources",
        "Incoterms, container specifications and customs checklists for importers and exporters.",
    );
    let template = ResourcesTemplate {
        layout: layout(&state, meta, RESOURCES_PATH),
        resources: RESOURCES,
    };
    Ok(Html(template.render()?))
}

/// Query string accepted by the form pages, e.g. `/request-quote?service=fcl`.
#[derive(Debug, Default, Deserialize)]
pub struct FormQuery {
    pub service: Option<String>,
}

fn contact_template(
    state: &AppState,
    kind: InquiryKind,
    form: &ContactForm,
    errors: ValidationErrors,
    submitted: bool,
) -> ContactTemplate {
    let (path, title, heading, intro, description) = match kind {
        InquiryKind::General => (
            CONTACT_PATH,
            "Contact Us",
            "Contact Us",
            "Questions about a shipment or our services? Send us a note.",
            "Reach the Harborline team by phone, email or the contact form.",
        ),
        InquiryKind::Quote => (
            QUOTE_PATH,
            "Request a Quote",
            "Request a Quote",
            "Tell us what you are shipping and where; we reply with rates within one business day.",
            "Request ocean freight rates for FCL, LCL, reefer and project cargo.",
        ),
    };
    let meta = PageMeta::new(&state.config.base_url, path, title, description);
    ContactTemplate {
        layout: layout(state, meta, path),
        heading,
        intro,
        action: path,
        is_quote: kind == InquiryKind::Quote,
        values: ContactFormValues::from(form),
        errors,
        services: service_options(state.registry, form.service.as_deref()),
        submitted,
    }
}

pub async fn contact_form(State(state): State<AppState>, Query(query): Query<FormQuery>) -> Result<Html<String>> {
    render_form_page(&state, InquiryKind::General, query)
}

pub async fn quote_form(State(state): State<AppState>, Query(query): Query<FormQuery>) -> Result<Html<String>> {
    render_form_page(&state, InquiryKind::Quote, query)
}

fn render_form_page(state: &AppState, kind: InquiryKind, query: FormQuery) -> Result<Html<String>> {
    let form = ContactForm {
        kind,
        service: query.service,
        ..ContactForm::default()
    };
    let template = contact_template(state, kind, &form, ValidationErrors::default(), false);
    Ok(Html(template.render()?))
}

pub async fn submit_contact(State(state): State<AppState>, Form(form): Form<ContactForm>) -> Result<Response> {
    submit_form(&state, form.with_kind(InquiryKind::General)).await
}

pub async fn submit_quote(State(state): State<AppState>, Form(form): Form<ContactForm>) -> Result<Response> {
    submit_form(&state, form.with_kind(InquiryKind::Quote)).await
}

async fn submit_form(state: &AppState, form: ContactForm) -> Result<Response> {
    let kind = form.kind;
    match state.contact.submit(&form).await {
        Ok(receipt) => {
            info!(submission = %receipt.id, "Form submission accepted");
            let template = contact_template(state, kind, &form, ValidationErrors::default(), true);
            Ok(Html(template.render()?).into_response())
        }
        Err(SubmissionError::Invalid(errors)) => {
            let template = contact_template(state, kind, &form, errors, false);
            Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(template.render()?)).into_response())
        }
        Err(SubmissionError::Failed(e)) => Err(e),
    }
}

/// JSON variant of the contact pipeline for script-driven forms.
pub async fn api_contact(State(state): State<AppState>, Json(form): Json<ContactForm>) -> Response {
    match state.contact.submit(&form).await {
        Ok(receipt) => Json(json!({ "success": true, "id": receipt.id })).into_response(),
        Err(SubmissionError::Invalid(errors)) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "success": false, "errors": errors.errors })),
        )
            .into_response(),
        Err(SubmissionError::Failed(e)) => {
            error!(error = %e, "Contact API submission failed");
            let status = StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            (status, Json(json!({ "success": false, "error": e.to_string() }))).into_response()
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ConsentUpdate {
    pub analytics: ConsentState,
}

pub async fn api_consent(State(state): State<AppState>, Json(update): Json<ConsentUpdate>) -> StatusCode {
    state.beacon.dispatch(AnalyticsCommand::Consent { analytics_storage: update.analytics });
    StatusCode::NO_CONTENT
}

pub async fn sitemap_xml(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let entries = state.sitemap.build(state.registry);
    Ok(([(header::CONTENT_TYPE, "application/xml; charset=utf-8")], render_xml(&entries)?))
}

pub async fn robots_txt(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        render_robots(&state.config.base_url),
    )
}

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "service": "harborline-site",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

pub async fn metrics_text() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        crate::observability::metrics::render(),
    )
}

pub async fn fallback(State(state): State<AppState>) -> Result<Response> {
    not_found_page(&state)
}

fn not_found_page(state: &AppState) -> Result<Response> {
    let template = NotFoundTemplate { layout: Layout::status(&state.config, "Page Not Found") };
    Ok((StatusCode::NOT_FOUND, Html(template.render()?)).into_response())
}

impl IntoResponse for SiteError {
    fn into_response(self) -> Response {
        if let SiteError::NotFound(what) = &self {
            info!(what = %what, "Not found");
        } else {
            error!(error = %self, "Request failed");
        }

        let status = StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body = match &self {
            SiteError::NotFound(_) => NotFoundTemplate { layout: Layout::bare("Page Not Found") }.render(),
            _ => ErrorTemplate { layout: Layout::bare("Something Went Wrong") }.render(),
        };
        match body {
            Ok(html) => (status, Html(html)).into_response(),
            Err(e) => {
                error!(error = %e, "Error page failed to render");
                (status, "Something went wrong").into_response()
            }
        }
    }
}
