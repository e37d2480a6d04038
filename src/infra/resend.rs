use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::app::ports::{EmailReceipt, EmailSender};
use crate::contact::ContactRequest;
use crate::error::{Result, SiteError};

/// Payload shape expected by the provider's `POST /emails`.
#[derive(Debug, Serialize)]
struct SendEmailPayload<'a> {
    from: &'a str,
    to: Vec<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_to: Option<&'a str>,
    subject: &'a str,
    html: &'a str,
}

#[derive(Debug, Deserialize)]
struct SendEmailResponse {
    id: Option<String>,
}

/// Production sender backed by the Resend transactional email API.
pub struct ResendEmailSender {
    client: Client,
    api_base: String,
    api_key: String,
    from: String,
}

impl ResendEmailSender {
    pub fn new(api_base: &str, api_key: impl Into<String>, from: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_base: api_base.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            from: from.into(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/emails", self.api_base)
    }
}

fn transport_failure(e: reqwest::Error) -> SiteError {
    error!(error = %e, "Email provider request failed");
    crate::observability::metrics::contact::email_failed();
    SiteError::Http(e)
}

#[async_trait]
impl EmailSender for ResendEmailSender {
    async fn send(&self, request: &ContactRequest) -> Result<EmailReceipt> {
        let payload = SendEmailPayload {
            from: &self.from,
            to: vec![request.to.as_str()],
            reply_to: request.reply_to.as_deref(),
            subject: &request.subject,
            html: &request.html,
        };

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(transport_failure)?;

        let status = response.status();
        let body = response.text().await.map_err(transport_failure)?;

        if !status.is_success() {
            error!(status = status.as_u16(), body = %body, "Email provider rejected message");
            crate::observability::metrics::contact::email_failed();
            return Err(SiteError::EmailProvider { status: status.as_u16(), body });
        }

        let id = serde_json::from_str::<SendEmailResponse>(&body)
            .ok()
            .and_then(|r| r.id);
        info!(id = id.as_deref().unwrap_or("-"), subject = %request.subject, "Email sent");
        crate::observability::metrics::contact::email_sent();
        Ok(EmailReceipt { id, delivered: true })
    }

    fn name(&self) -> &'static str {
        "resend"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn request() -> ContactRequest {
        ContactRequest::new("sales@example.com", "Quote Request", "<p>hi</p>").with_reply_to("a@b.com")
    }

    #[tokio::test]
    async fn successful_send_returns_provider_id() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/emails"))
            .and(header("authorization", "Bearer re_test"))
            .and(body_partial_json(serde_json::json!({
                "from": "Site <site@example.com>",
                "to": ["sales@example.com"],
                "reply_to": "a@b.com",
                "subject": "Quote Request",
                "html": "<p>hi</p>"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "id": "msg_42" })))
            .expect(1)
            .mount(&server)
            .await;

        let sender = ResendEmailSender::new(&server.uri(), "re_test", "Site <site@example.com>");
        let receipt = sender.send(&request()).await.unwrap();
        assert!(receipt.delivered);
        assert_eq!(receipt.id.as_deref(), Some("msg_42"));
    }

    #[tokio::test]
    async fn non_success_surfaces_provider_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/emails"))
            .respond_with(ResponseTemplate::new(422).set_body_string("domain is not verified"))
            .expect(1)
            .mount(&server)
            .await;

        let sender = ResendEmailSender::new(&server.uri(), "re_test", "site@example.com");
        let err = sender.send(&request()).await.unwrap_err();
        assert!(matches!(err, SiteError::EmailProvider { status: 422, .. }));
        assert!(err.to_string().contains("domain is not verified"));
    }

    #[tokio::test]
    async fn unreachable_provider_is_an_http_error() {
        let sender = ResendEmailSender::new("http://127.0.0.1:9", "re_test", "site@example.com");
        let err = sender.send(&request()).await.unwrap_err();
        assert!(matches!(err, SiteError::Http(_)));
    }

    #[test]
    fn reply_to_is_omitted_when_absent() {
        let payload = SendEmailPayload {
            from: "f",
            to: vec!["t"],
            reply_to: None,
            subject: "s",
            html: "h",
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("reply_to").is_none());
    }
}
