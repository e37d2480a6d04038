use axum::{
    extract::{Request, State},
    http::{header, Method},
    middleware::Next,
    response::Response,
};

use crate::analytics::{AnalyticsCommand, AnalyticsEvent};
use crate::constants::{API_PREFIX, HEALTH_PATH, METRICS_PATH, ROBOTS_PATH, SITEMAP_PATH, STATIC_PREFIX};
use crate::web::state::AppState;

/// Whether a request path is a page navigation worth reporting.
pub fn is_trackable(path: &str) -> bool {
    let machine_paths = [SITEMAP_PATH, ROBOTS_PATH, HEALTH_PATH, METRICS_PATH];
    !(path.starts_with(STATIC_PREFIX) || path.starts_with(API_PREFIX) || machine_paths.contains(&path))
}

/// Report each successful HTML page navigation to the analytics beacon.
pub async fn track_page_views(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let event = (request.method() == Method::GET && is_trackable(request.uri().path()))
        .then(|| AnalyticsEvent::new(request.uri().path(), request.uri().query()));

    let response = next.run(request).await;

    if let Some(event) = event {
        let is_html = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("text/html"));
        if response.status().is_success() && is_html {
            crate::observability::metrics::site::page_viewed(&event.path);
            state.beacon.dispatch(AnalyticsCommand::page_view(&event));
        }
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pages_are_trackable() {
        assert!(is_trackable("/"));
        assert!(is_trackable("/services/fcl"));
        assert!(is_trackable("/request-quote"));
    }

    #[test]
    fn machine_paths_are_not_trackable() {
        assert!(!is_trackable("/static/css/site.css"));
        assert!(!is_trackable("/api/contact"));
        assert!(!is_trackable("/sitemap.xml"));
        assert!(!is_trackable("/robots.txt"));
        assert!(!is_trackable("/health"));
        assert!(!is_trackable("/metrics"));
    }
}
