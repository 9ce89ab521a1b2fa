//! Mock analysis service for integration tests

use agentic_compliance::{AnalysisClient, ComplianceResponse};
use mockito::{Matcher, Mock, Server, ServerGuard};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Verdict the mock returns for the SSN breach scenario.
pub const SSN_BREACH_RESPONSE: &str = r#"{"analysis":{"reasoning_map":[{"fact":"SSN exposure","legal_meaning":"PII breach","regulation":"GDPR","article":"Art. 33","justification":"Breach notification required within 72h"}],"risk_level":"High","confidence":0.91,"summary":"High-risk PII breach detected."},"decision":"REVIEW_REQUIRED"}"#;

pub const SSN_BREACH_QUERY: &str = "We lost patient data containing SSNs.";

pub fn ssn_breach() -> ComplianceResponse {
    serde_json::from_str(SSN_BREACH_RESPONSE).expect("fixture decodes")
}

/// Test fixture that manages a mock server
pub struct MockServerFixture {
    pub server: Arc<Mutex<ServerGuard>>,
    pub base_url: String,
}

impl MockServerFixture {
    pub async fn new() -> Self {
        let server = Server::new_async().await;
        let base_url = server.url();
        Self {
            server: Arc::new(Mutex::new(server)),
            base_url,
        }
    }

    /// Client pointed at the mock server
    pub fn client(&self) -> AnalysisClient {
        AnalysisClient::builder()
            .base_url(&self.base_url)
            .build()
            .expect("client builds")
    }

    /// Expect one `POST /analyze` carrying exactly `query`, answer with `status` and `body`
    pub async fn mock_analyze(&self, query: &str, status: u16, body: &str) -> Mock {
        let mut server = self.server.lock().await;
        server
            .mock("POST", "/analyze")
            .match_header("content-type", "application/json")
            .match_header("x-request-id", Matcher::Any)
            .match_body(Matcher::Json(serde_json::json!({ "query": query })))
            .with_status(status as usize)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await
    }

    /// Answer any `POST /analyze` with a raw body and content type
    pub async fn mock_analyze_raw(&self, status: u16, content_type: &str, body: &str) -> Mock {
        let mut server = self.server.lock().await;
        server
            .mock("POST", "/analyze")
            .with_status(status as usize)
            .with_header("content-type", content_type)
            .with_body(body)
            .create_async()
            .await
    }

    /// A mock that fails the test if `/analyze` is ever hit
    pub async fn mock_analyze_never(&self) -> Mock {
        let mut server = self.server.lock().await;
        server
            .mock("POST", "/analyze")
            .expect(0)
            .create_async()
            .await
    }

    pub async fn mock_health(&self, status: u16, body: &str) -> Mock {
        let mut server = self.server.lock().await;
        server
            .mock("GET", "/health")
            .with_status(status as usize)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await
    }
}

/// Base URL of a local port nothing listens on
pub fn unreachable_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}
