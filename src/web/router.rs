use axum::{
    http::Method,
    middleware,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::constants::{
    ABOUT_PATH, CONTACT_PATH, HEALTH_PATH, HOME_PATH, METRICS_PATH, QUOTE_PATH, RESOURCES_PATH,
    ROBOTS_PATH, SERVICES_PATH, SITEMAP_PATH, STATIC_PREFIX,
};
use crate::web::handlers::{
    about, api_consent, api_contact, contact_form, fallback, health, index, metrics_text, quote_form,
    resources, robots_txt, service_page, services_list, sitemap_xml, submit_contact, submit_quote,
};
use crate::web::state::AppState;
use crate::web::tracking::track_page_views;

pub fn app_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    Router::new()
        .route(HOME_PATH, get(index))
        .route(SERVICES_PATH, get(services_list))
        .route("/services/:slug", get(service_page))
        .route(ABOUT_PATH, get(about))
        .route(RESOURCES_PATH, get(resources))
        .route(CONTACT_PATH, get(contact_form).post(submit_contact))
        .route(QUOTE_PATH, get(quote_form).post(submit_quote))
        .route("/api/contact", post(api_contact))
        .route("/api/consent", post(api_consent))
        .route(SITEMAP_PATH, get(sitemap_xml))
        .route(ROBOTS_PATH, get(robots_txt))
        .route(HEALTH_PATH, get(health))
        .route(METRICS_PATH, get(metrics_text))
        .nest_service(STATIC_PREFIX, ServeDir::new("static"))
        .fallback(fallback)
        .layer(middleware::from_fn_with_state(state.clone(), track_page_views))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(cors))
        .with_state(state)
}
