use std::time::Duration;

use reqwest::Client;
use tracing::{debug, warn};

use crate::analytics::AnalyticsCommand;
use crate::app::ports::AnalyticsBeacon;

/// Used when no tracking id is configured: commands are only logged.
#[derive(Debug, Default, Clone)]
pub struct NoopBeacon;

impl AnalyticsBeacon for NoopBeacon {
    fn dispatch(&self, command: AnalyticsCommand) {
        debug!(command = command.kind(), ?command, "Analytics disabled; command dropped");
    }
}

/// Upper bound on a single collector request, connect through body.
pub const COLLECTOR_TIMEOUT: Duration = Duration::from_secs(5);

/// Posts each command to the collector on a background task. Failures are
/// logged and counted, never returned.
#[derive(Clone)]
pub struct HttpBeacon {
    client: Client,
    endpoint: String,
    tracking_id: String,
    client_id: String,
}

impl HttpBeacon {
    pub fn new(endpoint: &str, tracking_id: impl Into<String>) -> Self {
        Self::with_timeout(endpoint, tracking_id, COLLECTOR_TIMEOUT)
    }

    pub fn with_timeout(endpoint: &str, tracking_id: impl Into<String>, timeout: Duration) -> Self {
        let client = Client::builder().timeout(timeout).build().unwrap_or_else(|e| {
            warn!(error = %e, "Falling back to default analytics client");
            Client::new()
        });
        Self {
            client,
            endpoint: endpoint.to_string(),
            tracking_id: tracking_id.into(),
            client_id: uuid::Uuid::new_v4().to_string(),
        }
    }
}

impl AnalyticsBeacon for HttpBeacon {
    fn dispatch(&self, command: AnalyticsCommand) {
        let payload = command.to_payload(&self.tracking_id, &self.client_id);
        let kind = command.kind();
        let client = self.client.clone();
        let endpoint = self.endpoint.clone();
        let tracking_id = self.tracking_id.clone();

        // Outside a runtime there is nowhere to run the request; drop it.
        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            debug!(command = kind, "No async runtime; analytics command dropped");
            return;
        };

        crate::observability::metrics::analytics::dispatched(kind);
        handle.spawn(async move {
            let result = client
                .post(&endpoint)
                .query(&[("measurement_id", tracking_id.as_str())])
                .json(&payload)
                .send()
                .await;
            match result {
                Ok(resp) if resp.status().is_success() => {
                    debug!(command = kind, "Analytics command delivered");
                }
                Ok(resp) => {
                    warn!(command = kind, status = resp.status().as_u16(), "Analytics collector rejected command");
                    crate::observability::metrics::analytics::failed();
                }
                Err(e) => {
                    warn!(command = kind, error = %e, "Analytics collector unreachable");
                    crate::observability::metrics::analytics::failed();
                }
            }
        });
    }
}
