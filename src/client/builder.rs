use crate::client::core::AnalysisClient;
use crate::config::ClientConfig;
use crate::{Error, Result};
use std::time::Duration;

/// Builder for [`AnalysisClient`].
///
/// Without an explicit config or base URL the configuration is resolved from
/// the environment (`COMPLIANCE_API_URL`, `COMPLIANCE_HTTP_TIMEOUT_SECS`).
#[derive(Debug, Default)]
pub struct AnalysisClientBuilder {
    config: Option<ClientConfig>,
    base_url: Option<String>,
    timeout: Option<Duration>,
    http_client: Option<reqwest::Client>,
}

impl AnalysisClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a fully resolved configuration.
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Override the base URL (takes precedence over `config`).
    ///
    /// Mostly useful for pointing tests at a mock server.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Supply a preconfigured `reqwest::Client`. Its own timeout settings win.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    pub fn build(self) -> Result<AnalysisClient> {
        let mut config = match (self.base_url, self.config) {
            (Some(url), Some(cfg)) => ClientConfig::new(url)?
                .with_timeout(cfg.timeout())
                .with_user_agent(cfg.user_agent()),
            (Some(url), None) => ClientConfig::new(url)?,
            (None, Some(cfg)) => cfg,
            (None, None) => ClientConfig::from_env()?,
        };
        if let Some(timeout) = self.timeout {
            config = config.with_timeout(timeout);
        }

        let http_client = match self.http_client {
            Some(client) => client,
            None => reqwest::Client::builder()
                .timeout(config.timeout())
                .user_agent(config.user_agent())
                .build()
                .map_err(|e| Error::configuration(format!("Failed to create HTTP client: {}", e)))?,
        };

        Ok(AnalysisClient {
            http_client,
            config,
        })
    }
}
