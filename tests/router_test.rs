use std::sync::{Arc, Mutex};

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use async_trait::async_trait;

use harborline_site::analytics::{AnalyticsCommand, ConsentState};
use harborline_site::app::{AnalyticsBeacon, EmailReceipt, EmailSender};
use harborline_site::config::SiteConfig;
use harborline_site::contact::ContactRequest;
use harborline_site::error::{Result as SiteResult, SiteError};
use harborline_site::infra::LogEmailSender;
use harborline_site::web::{app_router, AppState};

#[derive(Default)]
struct RecordingBeacon {
    commands: Mutex<Vec<AnalyticsCommand>>,
}

impl AnalyticsBeacon for RecordingBeacon {
    fn dispatch(&self, command: AnalyticsCommand) {
        self.commands.lock().unwrap().push(command);
    }
}

impl RecordingBeacon {
    fn page_paths(&self) -> Vec<String> {
        self.commands
            .lock()
            .unwrap()
            .iter()
            .filter_map(|c| match c {
                AnalyticsCommand::Config { page_path } => Some(page_path.clone()),
                _ => None,
            })
            .collect()
    }
}

struct RejectingSender;

#[async_trait]
impl EmailSender for RejectingSender {
    async fn send(&self, _request: &ContactRequest) -> SiteResult<EmailReceipt> {
        Err(SiteError::EmailProvider {
            status: 403,
            body: "API key is invalid".to_string(),
        })
    }

    fn name(&self) -> &'static str {
        "rejecting"
    }
}

fn test_config() -> SiteConfig {
    SiteConfig::from_lookup(|key| match key {
        "SITE_URL" => Some("https://test.harborline.example".to_string()),
        "APP_ENV" => Some("test".to_string()),
        _ => None,
    })
    .unwrap()
}

fn app() -> (Router, Arc<RecordingBeacon>) {
    app_with_sender(Arc::new(LogEmailSender))
}

fn app_with_sender(sender: Arc<dyn EmailSender>) -> (Router, Arc<RecordingBeacon>) {
    let beacon = Arc::new(RecordingBeacon::default());
    let state = AppState::with_parts(test_config(), sender, beacon.clone());
    (app_router(state), beacon)
}

async fn get(app: Router, uri: &str) -> (StatusCode, String, Option<String>) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap(), content_type)
}

async fn post(app: Router, uri: &str, content_type: &str, body: String) -> (StatusCode, String) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, content_type)
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn home_page_renders_and_is_tracked() {
    let (app, beacon) = app();
    let (status, body, content_type) = get(app, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(content_type.unwrap().starts_with("text/html"));
    assert!(body.contains("Harborline Ocean Freight"));
    assert!(body.contains("/services/fcl"));
    assert!(body.contains(r#"<link rel="canonical" href="https://test.harborline.example" />"#));
    assert_eq!(beacon.page_paths(), vec!["/".to_string()]);
}

#[tokio::test]
async fn query_string_is_included_in_page_view() {
    let (app, beacon) = app();
    let (status, _, _) = get(app, "/services?a=1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(beacon.page_paths(), vec!["/services?a=1".to_string()]);
}

#[tokio::test]
async fn service_detail_page_renders() {
    let (app, _) = app();
    let (status, body, _) = get(app, "/services/reefer").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Refrigerated Cargo"));
    assert!(body.contains("40&#x27; High Cube Reefer") || body.contains("40' High Cube Reefer"));
    assert!(body.contains("https://test.harborline.example/services/reefer"));
}

#[tokio::test]
async fn unknown_service_is_not_found_and_not_tracked() {
    let (app, beacon) = app();
    let (status, body, _) = get(app, "/services/air-freight").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Page not found"));
    assert!(beacon.page_paths().is_empty());
}

#[tokio::test]
async fn unknown_service_slug_is_not_reflected() {
    let (app, _) = app();
    let (status, body, _) = get(app, "/services/x%22%3E%3Cscript%3Ealert(1)%3C%2Fscript%3E").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(!body.contains("<script>alert(1)</script>"));
    assert!(!body.contains("alert(1)"));
    assert!(!body.contains(r#"rel="canonical""#));
    assert!(body.contains(r#"<meta name="robots" content="noindex" />"#));
}

#[tokio::test]
async fn fallback_does_not_reflect_request_path() {
    let (app, _) = app();
    let (status, body, _) = get(app, "/%22%3E%3Cscript%3Ealert(1)%3C/script%3E").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(!body.contains("alert(1)"));
}

#[tokio::test]
async fn unknown_route_hits_fallback() {
    let (app, _) = app();
    let (status, body, _) = get(app, "/no/such/page").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Back to home"));
}

#[tokio::test]
async fn sitemap_is_served_as_xml_and_not_tracked() {
    let (app, beacon) = app();
    let (status, body, content_type) = get(app, "/sitemap.xml").await;

    assert_eq!(status, StatusCode::OK);
    assert!(content_type.unwrap().starts_with("application/xml"));
    assert!(body.contains("<loc>https://test.harborline.example</loc>"));
    assert!(body.contains("<loc>https://test.harborline.example/services/fcl</loc>"));
    assert!(beacon.page_paths().is_empty());
}

#[tokio::test]
async fn robots_references_sitemap() {
    let (app, _) = app();
    let (status, body, _) = get(app, "/robots.txt").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Sitemap: https://test.harborline.example/sitemap.xml"));
}

#[tokio::test]
async fn health_reports_status() {
    let (app, _) = app();
    let (status, body, _) = get(app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "healthy");
}

#[tokio::test]
async fn quote_form_preselects_service() {
    let (app, _) = app();
    let (status, body, _) = get(app, "/request-quote?service=lcl").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"<option value="lcl" selected>"#));
    assert!(body.contains(r#"name="origin""#));
}

#[tokio::test]
async fn valid_contact_submission_shows_confirmation() {
    let (app, beacon) = app();
    let form = "name=Ada&email=ada%40example.com&message=Hello+there&service=fcl".to_string();
    let (status, body) = post(app, "/contact", "application/x-www-form-urlencoded", form).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Thank you!"));
    let commands = beacon.commands.lock().unwrap();
    assert!(commands
        .iter()
        .any(|c| matches!(c, AnalyticsCommand::Event { name, .. } if name == "generate_lead")));
}

#[tokio::test]
async fn invalid_contact_submission_echoes_errors() {
    let (app, _) = app();
    let form = "name=Ada&email=not-an-email&message=".to_string();
    let (status, body) = post(app, "/request-quote", "application/x-www-form-urlencoded", form).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body.contains("Please enter a valid email address"));
    assert!(body.contains("Please tell us how we can help"));
    assert!(body.contains(r#"value="Ada""#));
}

#[tokio::test]
async fn api_contact_returns_json_result() {
    let (app, _) = app();
    let payload = serde_json::json!({
        "kind": "quote",
        "name": "Ada",
        "email": "ada@example.com",
        "message": "Two containers"
    });
    let (status, body) = post(app, "/api/contact", "application/json", payload.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["success"], true);
    assert!(json["id"].as_str().is_some());
}

#[tokio::test]
async fn api_contact_reports_field_errors() {
    let (app, _) = app();
    let (status, body) = post(app, "/api/contact", "application/json", "{}".to_string()).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["success"], false);
    assert_eq!(json["errors"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn consent_update_is_forwarded() {
    let (app, beacon) = app();
    let (status, _) = post(
        app,
        "/api/consent",
        "application/json",
        r#"{"analytics":"denied"}"#.to_string(),
    )
    .await;

    assert_eq!(status, StatusCode::NO_CONTENT);
    let commands = beacon.commands.lock().unwrap();
    assert_eq!(
        commands.as_slice(),
        &[AnalyticsCommand::Consent { analytics_storage: ConsentState::Denied }]
    );
}

#[tokio::test]
async fn failed_delivery_renders_error_screen() {
    let (app, beacon) = app_with_sender(Arc::new(RejectingSender));
    let form = "name=Ada&email=ada%40example.com&message=Hello+there".to_string();
    let (status, body) = post(app, "/contact", "application/x-www-form-urlencoded", form).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body.contains("Something went wrong"));
    assert!(body.contains(r#"onclick="window.location.reload()">Try again</button>"#));
    assert!(body.contains(r#"<a class="button" href="/">Back to home</a>"#));
    assert!(!body.contains(r#"rel="canonical""#));
    assert!(beacon
        .commands
        .lock()
        .unwrap()
        .iter()
        .all(|c| !matches!(c, AnalyticsCommand::Event { .. })));
}

#[tokio::test]
async fn failed_delivery_reports_json_error() {
    let (app, _) = app_with_sender(Arc::new(RejectingSender));
    let payload = serde_json::json!({
        "name": "Ada",
        "email": "ada@example.com",
        "message": "Two containers"
    });
    let (status, body) = post(app, "/api/contact", "application/json", payload.to_string()).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["success"], false);
    assert!(json["error"].as_str().unwrap().contains("API key is invalid"));
}
