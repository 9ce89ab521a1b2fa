use crate::client::builder::AnalysisClientBuilder;
use crate::client::service::AnalysisService;
use crate::config::ClientConfig;
use crate::types::{service_error_message, AnalysisRequest, ComplianceResponse, HealthStatus};
use crate::{Error, Result};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use std::time::Instant;
use tracing::{debug, info, warn};
use uuid::Uuid;

pub const ANALYZE_PATH: &str = "/analyze";
pub const HEALTH_PATH: &str = "/health";

/// Correlation id attached to every request. The service may ignore it.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// HTTP client for the analysis service.
///
/// Stateless between calls: each call depends only on the configured endpoint
/// and its own arguments.
#[derive(Debug, Clone)]
pub struct AnalysisClient {
    pub(crate) http_client: reqwest::Client,
    pub(crate) config: ClientConfig,
}

impl AnalysisClient {
    /// Create a client for an explicit configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        AnalysisClientBuilder::new().config(config).build()
    }

    /// Create a client configured from the environment.
    pub fn from_env() -> Result<Self> {
        AnalysisClientBuilder::new().build()
    }

    pub fn builder() -> AnalysisClientBuilder {
        AnalysisClientBuilder::new()
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Submit a query for analysis.
    ///
    /// The query is forwarded untouched (no trimming). Non-2xx responses become
    /// [`Error::Service`] with the service's `detail` message or the fallback
    /// text; send failures are returned as [`Error::Transport`]; a success body
    /// that does not decode is [`Error::Decode`].
    pub async fn submit_analysis(&self, query: &str) -> Result<ComplianceResponse> {
        let endpoint = self.config.endpoint(ANALYZE_PATH);
        let request_id = Uuid::new_v4().to_string();
        let started = Instant::now();

        debug!(
            endpoint = %endpoint,
            request_id = %request_id,
            query_len = query.len(),
            "sending analysis request"
        );

        let response = self
            .http_client
            .post(&endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header(REQUEST_ID_HEADER, &request_id)
            .json(&AnalysisRequest { query })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // An unreadable error body is treated like an empty one.
            let body = response.text().await.unwrap_or_default();
            let message = service_error_message(&body);
            warn!(
                request_id = %request_id,
                status = status.as_u16(),
                message = %message,
                "analysis service returned an error"
            );
            return Err(Error::service(status.as_u16(), message));
        }

        let body = response.text().await?;
        let parsed: ComplianceResponse = serde_json::from_str(&body).map_err(|e| {
            warn!(request_id = %request_id, error = %e, "analysis response did not decode");
            Error::Decode(e)
        })?;

        info!(
            request_id = %request_id,
            decision = %parsed.decision,
            risk_level = %parsed.analysis.risk_level,
            steps = parsed.analysis.reasoning_map.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "analysis complete"
        );
        Ok(parsed)
    }

    /// Probe the service's lightweight health endpoint.
    pub async fn health(&self) -> Result<HealthStatus> {
        let endpoint = self.config.endpoint(HEALTH_PATH);
        debug!(endpoint = %endpoint, "probing analysis service health");

        let response = self.http_client.get(&endpoint).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::service(status.as_u16(), service_error_message(&body)));
        }
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl AnalysisService for AnalysisClient {
    async fn submit_analysis(&self, query: &str) -> Result<ComplianceResponse> {
        AnalysisClient::submit_analysis(self, query).await
    }
}
