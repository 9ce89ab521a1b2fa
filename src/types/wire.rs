//! Request and auxiliary bodies exchanged with the analysis service.

use serde::{Deserialize, Serialize};

/// Message used when a non-2xx response carries no usable `detail`.
pub const FALLBACK_ERROR_MESSAGE: &str = "Analysis request failed";

/// Body of `POST /analyze`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest<'a> {
    pub query: &'a str,
}

/// Error body the service may attach to a non-2xx response.
///
/// `detail` is usually a string but validation failures report a list of
/// issues, so it is kept as raw JSON.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServiceErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ServiceErrorBody {
    /// Human-readable message for display, if the body carries one.
    pub fn message(&self) -> Option<String> {
        match self.detail.as_ref()? {
            serde_json::Value::Null => None,
            serde_json::Value::String(s) if s.is_empty() => None,
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

/// Resolve the message for a failed response from its raw body text.
pub fn service_error_message(body: &str) -> String {
    serde_json::from_str::<ServiceErrorBody>(body)
        .ok()
        .and_then(|b| b.message())
        .unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_string())
}

/// Response of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub service: Option<String>,
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case("ok")
    }
}
